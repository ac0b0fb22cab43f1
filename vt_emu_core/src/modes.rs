// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Boolean terminal modes set/reset by SM/RM (CSI `h`/`l`), private (`?`)
//! and ANSI (no intermediate) alike.
//!
//! Exactly one of the four mouse-tracking modes may be set at a time (spec
//! §3 invariant); [`MouseTracking`] is an enum rather than four independent
//! bools specifically to make that invariant structurally true instead of
//! something every call site has to remember to maintain.

/// Which of the mutually-exclusive mouse-tracking protocols (if any) is
/// active. Setting one always clears any previously-set one, matching
/// `do_modes`'s `S->flags &= ~MODE_MOUSE_MASK` before applying the new bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseTracking {
    #[default]
    Off,
    /// Mode 9 (X10 compatibility tracking).
    X10,
    /// Mode 1000 (normal tracking).
    Normal,
    /// Mode 1001 (highlight tracking).
    Highlight,
    /// Mode 1002 (button-event tracking).
    ButtonEvent,
    /// Mode 1003 (any-event tracking).
    AnyEvent,
}

/// The full set of boolean/enum modes tracked by the emulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modes {
    /// IRM — insert mode: printing shifts the row tail right instead of
    /// overwriting.
    pub insert: bool,
    /// LNM — newline mode: LF/VT/FF also returns to column 0 (otherwise
    /// they only move the cursor down).
    pub newline: bool,
    /// DECCKM — cursor keys send application- vs. ANSI-mode sequences.
    /// This crate never emits cursor-key sequences itself (that's an input
    /// concern, not covered here) but tracks the bit so a host-side input
    /// layer can read it back.
    pub cursor_keys_application: bool,
    /// DECCOLM — 80/132 column switch, gated by `allow_deccolm`.
    pub column_132: bool,
    /// Gate for DECCOLM (mode 40): DECCOLM is a no-op unless this is set.
    pub allow_deccolm: bool,
    /// DECSCNM — reverse video: forces a full-screen dirty redraw when
    /// toggled.
    pub reverse_video: bool,
    /// DECOM — origin mode: CUP/VPA row coordinates are relative to the
    /// scroll region and confined within it.
    pub origin: bool,
    /// DECAWM — wraparound: writing past the last column advances to the
    /// next line instead of repeatedly overwriting the last cell.
    pub wraparound: bool,
    /// DECTCEM — cursor visibility.
    pub cursor_visible: bool,
    /// Mode 45 — reverse wraparound. Tracked per spec's "known-missing":
    /// defined and settable, never consulted by character output (see
    /// `DESIGN.md`, Open Question on `MODE_REVWRAP`).
    pub reverse_wraparound: bool,
    pub mouse_tracking: MouseTracking,
}

impl Default for Modes {
    /// `init`'s defaults: wraparound on (xterm/VT100 power-on default),
    /// cursor visible, everything else off.
    fn default() -> Self {
        Self {
            insert: false,
            newline: false,
            cursor_keys_application: false,
            column_132: false,
            allow_deccolm: false,
            reverse_video: false,
            origin: false,
            wraparound: true,
            cursor_visible: true,
            reverse_wraparound: false,
            mouse_tracking: MouseTracking::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_power_on_state() {
        let modes = Modes::default();
        assert!(modes.wraparound);
        assert!(modes.cursor_visible);
        assert!(!modes.insert);
        assert_eq!(modes.mouse_tracking, MouseTracking::Off);
    }
}
