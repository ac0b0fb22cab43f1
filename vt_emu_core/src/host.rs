// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability set the core calls back out through.
//!
//! Per spec §9 ("callback inversion... implement it as a trait/interface
//! parameter to the core, not a global registry"), [`TerminalHost`] is a
//! plain trait an [`crate::emulator::Emulator`] is generic over, not a
//! global or a `dyn`-only object (though `dyn TerminalHost` works fine for
//! callers who want dynamic dispatch).

/// Everything this crate's core needs from the outside world: none of it is
/// implemented here — rasterization, the pty, window chrome, and the event
/// loop are all excluded collaborators (spec §1) that a host wires up.
pub trait TerminalHost {
    /// BEL (0x07): audible/visual bell.
    fn bell(&mut self) {}

    /// Bytes to send back up the pty — DA's `"\e[?1;2c"`, DSR replies, etc.
    fn write_str(&mut self, bytes: &[u8]);

    /// OSC 0/1/2: window/icon title changed. `title` is the UTF-8 decoded
    /// contents of the OSC string (lenient-UTF-8, same decoder as the main
    /// text path).
    fn set_title(&mut self, title: &str) {
        let _ = title;
    }

    /// The host is asked to change geometry (xterm window manipulation `CSI
    /// 8 t`/DECSLPP). The host is expected to call
    /// [`crate::emulator::Emulator::resize`] back with whatever dimensions
    /// it actually accepts (which may differ, e.g. if the real terminal
    /// window can't grow that far).
    fn request_resize(&mut self, rows: u16, cols: u16) {
        let _ = (rows, cols);
    }
}

/// A host that drops every callback — handy for tests that only care about
/// buffer/cursor state.
#[derive(Debug, Default)]
pub struct NullHost {
    pub bell_count: u32,
    pub written: Vec<u8>,
    pub title: Option<String>,
    pub resize_requests: Vec<(u16, u16)>,
}

impl TerminalHost for NullHost {
    fn bell(&mut self) { self.bell_count += 1; }

    fn write_str(&mut self, bytes: &[u8]) { self.written.extend_from_slice(bytes); }

    fn set_title(&mut self, title: &str) { self.title = Some(title.to_owned()); }

    fn request_resize(&mut self, rows: u16, cols: u16) { self.resize_requests.push((rows, cols)); }
}
