// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SM/RM (`CSI Ps h` / `CSI Ps l`) and their private (`?`) counterparts:
//! every boolean mode this crate tracks, plus the explicit no-op modes
//! carried over from the original for parity (see `SPEC_FULL.md` §4.H).

use tracing::trace;

use crate::cell::EMPTY_FIELD;
use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::modes::MouseTracking;
use crate::units::{col_index, row_index};

impl<H: TerminalHost> Emulator<H> {
    pub(crate) fn do_sm(&mut self, priv_marker: u8, intermed: u16, params: &[u16]) {
        self.do_modes(priv_marker, intermed, params, true);
    }

    pub(crate) fn do_rm(&mut self, priv_marker: u8, intermed: u16, params: &[u16]) {
        self.do_modes(priv_marker, intermed, params, false);
    }

    fn do_modes(&mut self, priv_marker: u8, intermed: u16, params: &[u16], set: bool) {
        for &param in params {
            match (priv_marker, param) {
                (0, 4) => self.modes_mut().insert = set,
                (0, 20) => self.modes_mut().newline = set,
                (b'?', 1) => self.modes_mut().cursor_keys_application = set,
                (b'?', 2) => {} // DECANM: a software terminal has no vt52 mode to leave.
                (b'?', 3) => self.do_deccolm(set),
                (b'?', 4) => {} // DECSCLM: smooth scrolling, not implemented.
                (b'?', 5) => {
                    self.modes_mut().reverse_video = set;
                    self.mark_all_rows_dirty();
                }
                (b'?', 6) => self.do_decom(set),
                (b'?', 7) => self.modes_mut().wraparound = set,
                (b'?', 8) => {} // DECARM: autorepeat, meaningless for a software terminal.
                (b'?', 9) => self.set_mouse_tracking(set, MouseTracking::X10),
                (b'?', 12) => {} // cursor blink: not implemented.
                (b'?', 25) => self.modes_mut().cursor_visible = set,
                (b'?', 40) => self.modes_mut().allow_deccolm = set,
                (b'?', 41) => {} // more(1) fix: obsolete.
                (b'?', 45) => self.modes_mut().reverse_wraparound = set,
                (b'?', 1000) => self.set_mouse_tracking(set, MouseTracking::Normal),
                (b'?', 1001) => self.set_mouse_tracking(set, MouseTracking::Highlight),
                (b'?', 1002) => self.set_mouse_tracking(set, MouseTracking::ButtonEvent),
                (b'?', 1003) => self.set_mouse_tracking(set, MouseTracking::AnyEvent),
                (b'?', 1047 | 1049) => {} // alternate screen buffer: Non-goal.
                _ => trace!(priv_marker, intermed, param, set, "discarded unhandled mode"),
            }
        }
    }

    fn set_mouse_tracking(&mut self, set: bool, which: MouseTracking) {
        self.modes_mut().mouse_tracking = if set { which } else { MouseTracking::Off };
    }

    fn mark_all_rows_dirty(&mut self) {
        for i in 0..self.screen().rows_len() {
            self.screen_mut().row_mut(row_index(i)).mark_dirty();
        }
    }

    /// DECOM: origin mode. Setting or resetting homes the cursor.
    fn do_decom(&mut self, set: bool) {
        self.modes_mut().origin = set;
        self.cursor_mut().row = if set { self.scroll_top() } else { row_index(0) };
        self.cursor_mut().col = col_index(0);
    }

    /// DECCOLM: 80/132-column switch, gated by `allow_deccolm` (mode 40).
    /// Resizes, clears the whole screen, and homes the cursor.
    fn do_deccolm(&mut self, set: bool) {
        if !self.modes().allow_deccolm {
            return;
        }
        let rows = self.screen().rows_len() as u16;
        let _ = self.resize(rows, if set { 132 } else { 80 });
        let cols = self.screen().cols_len();
        let rows = self.screen().rows_len();
        for i in 0..rows {
            self.screen_mut().fill_row(row_index(i), col_index(0), cols, EMPTY_FIELD);
        }
        self.cursor_mut().col = col_index(0);
        self.cursor_mut().row = if self.modes().origin { self.scroll_top() } else { row_index(0) };
    }
}
