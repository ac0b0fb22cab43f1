// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor position, current attribute, saved state, and the `wrapnext`
//! pending-wrap latch.

use crate::cell::CellAttrs;
use crate::units::{ColIndex, RowIndex};

/// A snapshot of the fields DECSC (`ESC 7`) saves and DECRC (`ESC 8`)
/// restores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SavedCursor {
    pub row: RowIndex,
    pub col: ColIndex,
    pub attrs: CellAttrs,
}

/// Cursor state. `wrapnext` is the one-bit "pending wrap" latch: the
/// previous [`crate::ops::char_ops::print`] filled the last column, but
/// whether that commits to a line-advance is decided by the *next* write
/// (see spec §4.C, `outputChar`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub row: RowIndex,
    pub col: ColIndex,
    pub attrs: CellAttrs,
    pub wrapnext: bool,
    saved: SavedCursor,
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// DECSC: save `(row, col, attrs)`.
    pub fn save(&mut self) {
        self.saved = SavedCursor { row: self.row, col: self.col, attrs: self.attrs };
    }

    /// DECRC: restore `(row, col, attrs)`, clamping the restored position
    /// into `[0, rows-1] x [0, cols-1]` in case a resize shrank the screen
    /// since the save. Always clears `wrapnext` (every cursor-moving op
    /// does, per spec §4.F).
    pub fn restore(&mut self, max_row: RowIndex, max_col: ColIndex) {
        self.row = self.saved.row.clamp_to(max_row);
        self.col = self.saved.col.clamp_to(max_col);
        self.attrs = self.saved.attrs;
        self.wrapnext = false;
    }
}
