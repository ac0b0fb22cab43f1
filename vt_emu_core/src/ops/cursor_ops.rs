// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor motion: C0 BS/CR/NL and the CSI cursor-positioning family (CUU,
//! CUD, CUF, CUB, CNL, CPL, CHA, VPA, CUP/HVP).

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::{csi_param_to_index, get_arg};
use crate::units::{col_index, row_index};

impl<H: TerminalHost> Emulator<H> {
    pub(crate) fn do_bs(&mut self) {
        let col = self.cursor().col.saturating_sub(1);
        self.cursor_mut().col = self.clamp_col(col);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cr(&mut self) {
        self.cursor_mut().col = col_index(0);
        self.cursor_mut().wrapnext = false;
    }

    /// LF/VT/FF: always advance a line; only rebase to column 0 under LNM
    /// (newline mode).
    pub(crate) fn do_nl(&mut self) {
        self.term_index(1);
        if self.modes().newline {
            self.cursor_mut().col = col_index(0);
        }
        self.cursor_mut().wrapnext = false;
    }

    /// CUU: move up `p1` rows. The original clamps the vmax bound against
    /// `wCols - 1`; confirmed a copy-paste bug against xterm behavior
    /// (vertical motion must bound against the row count, not the column
    /// count) and fixed here — see `DESIGN.md`.
    pub(crate) fn do_cuu(&mut self, params: &[u16]) {
        let p1 = i32::from(get_arg(params, 0, 1));
        let row_before = self.cursor().row.as_usize() as i32;
        let top = self.scroll_top().as_usize() as i32;
        let max = self.screen().last_row_index().as_usize() as i32;
        let min = if row_before < top { 0 } else { top };
        let clamped = (row_before - p1).clamp(min, max);
        self.cursor_mut().row = row_index(clamped as usize);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cud(&mut self, params: &[u16]) {
        let p1 = i32::from(get_arg(params, 0, 1));
        let row_before = self.cursor().row.as_usize() as i32;
        let bottom = self.scroll_bottom().as_usize() as i32;
        let last = self.screen().last_row_index().as_usize() as i32;
        let max = if row_before > bottom { last } else { bottom };
        let clamped = (row_before + p1).clamp(0, max);
        self.cursor_mut().row = row_index(clamped as usize);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cuf(&mut self, params: &[u16]) {
        let p1 = get_arg(params, 0, 1) as usize;
        let col = self.cursor().col.saturating_add(p1);
        self.cursor_mut().col = self.clamp_col(col);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cub(&mut self, params: &[u16]) {
        let p1 = get_arg(params, 0, 1) as usize;
        let col = self.cursor().col.saturating_sub(p1);
        self.cursor_mut().col = self.clamp_col(col);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cnl(&mut self, params: &[u16]) {
        let p1 = i32::from(get_arg(params, 0, 1));
        self.term_index(p1);
        self.cursor_mut().col = col_index(0);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cpl(&mut self, params: &[u16]) {
        let p1 = i32::from(get_arg(params, 0, 1));
        self.term_index(-p1);
        self.cursor_mut().col = col_index(0);
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_cha(&mut self, params: &[u16]) {
        let col = csi_param_to_index(params, 0, 1);
        self.cursor_mut().col = self.clamp_col(col_index(col));
        self.cursor_mut().wrapnext = false;
    }

    pub(crate) fn do_vpa(&mut self, params: &[u16]) {
        let mut row = csi_param_to_index(params, 0, 1);
        self.cursor_mut().wrapnext = false;
        if self.modes().origin {
            row += self.scroll_top().as_usize();
            self.cursor_mut().row = row_index(row).clamp_to(self.scroll_bottom());
        } else {
            self.cursor_mut().row = self.clamp_row_full(row_index(row));
        }
    }

    pub(crate) fn do_cup_hvp(&mut self, params: &[u16]) {
        let mut row = csi_param_to_index(params, 0, 1);
        let col = csi_param_to_index(params, 1, 1);
        self.cursor_mut().wrapnext = false;
        if self.modes().origin {
            row += self.scroll_top().as_usize();
            self.cursor_mut().row = row_index(row).clamp_to(self.scroll_bottom());
        } else {
            self.cursor_mut().row = self.clamp_row_full(row_index(row));
        }
        self.cursor_mut().col = self.clamp_col(col_index(col));
    }
}
