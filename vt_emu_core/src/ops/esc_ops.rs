// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-shot ESC/C1 operations: IND, NEL, RI (index/next-line/reverse
//! index) and DECSC/DECRC (cursor save/restore).

use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::units::col_index;

impl<H: TerminalHost> Emulator<H> {
    /// IND: index — move down one line, scrolling if at the scroll region's
    /// bottom edge. Unlike NL, never rebases to column 0.
    pub(crate) fn do_ind(&mut self) { self.term_index(1); }

    /// NEL: next line — index, then return to column 0.
    pub(crate) fn do_nel(&mut self) {
        self.term_index(1);
        self.cursor_mut().col = col_index(0);
        self.cursor_mut().wrapnext = false;
    }

    /// RI: reverse index — move up one line, scrolling if at the scroll
    /// region's top edge.
    pub(crate) fn do_ri(&mut self) { self.term_index(-1); }

    /// DECSC: save cursor position and attributes.
    pub(crate) fn do_decsc(&mut self) { self.cursor_mut().save(); }

    /// DECRC: restore cursor position and attributes, clamped into the
    /// current screen bounds (in case a resize shrank it since the save).
    pub(crate) fn do_decrc(&mut self) {
        let (max_row, max_col) = (self.screen().last_row_index(), self.screen().last_col_index());
        self.cursor_mut().restore(max_row, max_col);
    }
}
