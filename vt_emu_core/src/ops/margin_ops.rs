// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! DECSTBM: set the top/bottom scroll margins.

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::get_arg;
use crate::units::{col_index, row_index};

impl<H: TerminalHost> Emulator<H> {
    /// DECSTBM (`CSI Ps ; Ps r`): set the scroll region to `[p1, p2]`
    /// (1-based, inclusive). A request where `p2 <= p1` is ignored entirely
    /// — confirmed xterm behavior, not a source bug (spec §7).
    pub(crate) fn do_decstbm(&mut self, params: &[u16]) {
        let p1 = get_arg(params, 0, 1).max(1);
        let last_row = self.screen().last_row_index().as_usize() as u16 + 1;
        let p2 = get_arg(params, 1, 65535).min(last_row);
        if p2 <= p1 {
            return;
        }
        let top = row_index((p1 - 1) as usize);
        let bottom = row_index((p2 - 1) as usize);
        self.set_scroll_region(top, bottom);
        self.cursor_mut().row = if self.modes().origin { top } else { row_index(0) };
        self.cursor_mut().col = col_index(0);
    }
}
