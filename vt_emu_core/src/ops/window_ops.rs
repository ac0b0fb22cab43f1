// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! xterm window manipulation (`CSI Ps ; Ps ; Ps t`) and DECSLPP
//! (`CSI Ps t` with `Ps >= 24`, set lines per page).
//!
//! Everything about physical window chrome (iconify, raise, move, zoom) is
//! an excluded collaborator (spec §1); only the text-resize form (`Ps=8`)
//! and DECSLPP request a geometry change, and they do it through
//! [`crate::host::TerminalHost::request_resize`] rather than calling
//! [`Emulator::resize`] directly — the host decides what it can actually
//! accommodate and calls `resize` back with the accepted dimensions (spec
//! §4.G). The report forms (`Ps` 11, 13, 14, 18, 19, 20, 21) are
//! recognized-but-unreported — see `SPEC_FULL.md` §4.H.

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::get_arg;

impl<H: TerminalHost> Emulator<H> {
    pub(crate) fn do_dterm_window(&mut self, params: &[u16]) {
        let p1 = get_arg(params, 0, 0);
        let p2 = get_arg(params, 1, 0);
        let p3 = get_arg(params, 2, 0);
        match p1 {
            0..=1 | 3 | 4..=7 | 9 => {} // iconify/deiconify/move/resize(px)/raise/lower/refresh/zoom: not implemented.
            8 => {
                if (1..=999).contains(&p2) && (1..=999).contains(&p3) {
                    self.host_mut().request_resize(p2, p3);
                }
            }
            11 | 13 | 14 | 18 | 19 | 20 | 21 => {} // report state/position/size/title: known, unreported.
            _ if p1 >= 24 => {
                let cols = self.screen().cols_len() as u16;
                self.host_mut().request_resize(p1, cols);
            }
            _ => tracing::trace!(p1, "discarded unhandled xterm window manipulation"),
        }
    }
}
