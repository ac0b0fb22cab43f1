// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line and character insert/delete: IL, DL, DCH, and the supplemented
//! ICH/ECH siblings (see `SPEC_FULL.md` §4.H).

use crate::cell::EMPTY_FIELD;
use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::get_arg;

impl<H: TerminalHost> Emulator<H> {
    /// IL: insert `n` blank lines at the cursor row, pushing the rest of the
    /// scroll region down (bottom rows fall off). A no-op outside the scroll
    /// region.
    pub(crate) fn do_il(&mut self, params: &[u16]) {
        let row = self.cursor().row;
        let (top, bottom) = self.scroll_region();
        if row < top || row > bottom {
            return;
        }
        let n = get_arg(params, 0, 1) as usize;
        let blank = self.blank_cell();
        self.screen_mut().scroll_up(row, bottom, n, blank);
    }

    /// DL: delete `n` lines at the cursor row, pulling the rest of the
    /// scroll region up (blank rows appear at the bottom). A no-op outside
    /// the scroll region.
    pub(crate) fn do_dl(&mut self, params: &[u16]) {
        let row = self.cursor().row;
        let (top, bottom) = self.scroll_region();
        if row < top || row > bottom {
            return;
        }
        let n = get_arg(params, 0, 1) as usize;
        let blank = self.blank_cell();
        self.screen_mut().scroll_down(row, bottom, n, blank);
    }

    /// DCH: delete `n` characters at the cursor column, pulling the row's
    /// tail left; vacated columns at the end become blank.
    pub(crate) fn do_dch(&mut self, params: &[u16]) {
        let n = (get_arg(params, 0, 1) as usize).min(self.screen().cols_len());
        let (row, col) = (self.cursor().row, self.cursor().col.as_usize());
        self.screen_mut().row_mut(row).shift_left(col, n, EMPTY_FIELD);
    }

    /// ICH: insert `n` blank cells at the cursor column, pushing the row's
    /// tail right (cells fall off the end).
    pub(crate) fn do_ich(&mut self, params: &[u16]) {
        let n = (get_arg(params, 0, 1) as usize).min(self.screen().cols_len());
        let (row, col) = (self.cursor().row, self.cursor().col.as_usize());
        self.screen_mut().row_mut(row).shift_right(col, n, EMPTY_FIELD);
    }

    /// ECH: blank `n` cells starting at the cursor column, without shifting
    /// anything.
    pub(crate) fn do_ech(&mut self, params: &[u16]) {
        let n = get_arg(params, 0, 1) as usize;
        let (row, col) = (self.cursor().row, self.cursor().col.as_usize());
        self.screen_mut().fill_row(row, crate::units::col_index(col), n, EMPTY_FIELD);
    }
}
