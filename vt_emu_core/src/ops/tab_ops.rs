// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tab stops: HT (advance), HTS (set), TBC (clear).

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::get_arg;
use crate::units::col_index;

impl<H: TerminalHost> Emulator<H> {
    /// HT: advance to the next tab stop, or the last column if none remain.
    pub(crate) fn do_ht(&mut self) {
        let last_col = self.screen().last_col_index().as_usize();
        let mut col = self.cursor().col.as_usize();
        loop {
            col += 1;
            if col >= self.screen().cols_len() || self.screen().is_tab_stop(col_index(col)) {
                break;
            }
        }
        self.cursor_mut().col = col_index(col.min(last_col));
        self.cursor_mut().wrapnext = false;
    }

    /// HTS: set a tab stop at the cursor column.
    pub(crate) fn do_hts(&mut self) {
        let col = self.cursor().col;
        self.screen_mut().set_tab_stop(col);
    }

    /// TBC: clear tab stop(s). `Ps=2` ("clear all stops on this line") is a
    /// documented no-op — vttest specifically checks that it does nothing,
    /// despite what ECMA-48 might suggest (matches the original's comment
    /// verbatim).
    pub(crate) fn do_tbc(&mut self, params: &[u16]) {
        match get_arg(params, 0, 0) {
            0 => {
                let col = self.cursor().col;
                self.screen_mut().clear_tab_stop(col);
            }
            1 | 4 => {} // vertical tab clear: not implemented (no vtabs).
            2 => {}     // deliberate no-op, see doc comment above.
            3 | 5 => self.screen_mut().clear_all_tab_stops(),
            _ => {}
        }
    }
}
