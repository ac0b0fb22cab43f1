// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The row grid: scroll region, fill/clear, and row rotation.
//!
//! The original rotates an array of row *pointers* so scrolling a full
//! region never touches cell storage — only `clearStart..=bottom` gets
//! `row_fill`'d. `ScreenBuffer` gets the same property for free from
//! `Vec<Row>` + `[u8]::rotate_left`/`rotate_right`: rotating a slice of
//! `Row`s moves each `Row`'s three-word `Vec` header (ptr/len/cap), not the
//! cells it owns, so a region rotation is O(region length) word-moves
//! regardless of row width — the character-storage-copy-free property the
//! original calls out as "both a performance requirement and a semantic
//! one" (spec §9) holds here too.

use crate::cell::Cell;
use crate::row::Row;
use crate::units::{ColIndex, RowIndex, col_index, row_index};

/// An ordered sequence of rows, each `cols` wide, plus the tab-stop table
/// (one `bool` per column; spec's "column-flags table").
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    rows: Vec<Row>,
    cols: usize,
    tab_stops: Vec<bool>,
}

impl ScreenBuffer {
    /// Allocate `rows x cols` blank cells and an empty tab-stop table (no
    /// tab stop is pre-populated — the original never seeds `colFlags`
    /// either; stops only exist once `HTS` sets one).
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows: (0..rows).map(|_| Row::new(cols)).collect(), cols, tab_stops: vec![false; cols] }
    }

    #[must_use]
    pub fn rows_len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn cols_len(&self) -> usize { self.cols }

    #[must_use]
    pub fn row(&self, index: RowIndex) -> &Row { &self.rows[index.as_usize()] }

    pub fn row_mut(&mut self, index: RowIndex) -> &mut Row { &mut self.rows[index.as_usize()] }

    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    #[must_use]
    pub fn last_row_index(&self) -> RowIndex { row_index(self.rows.len() - 1) }

    #[must_use]
    pub fn last_col_index(&self) -> ColIndex { col_index(self.cols - 1) }

    #[must_use]
    pub fn is_tab_stop(&self, col: ColIndex) -> bool { self.tab_stops.get(col.as_usize()).copied().unwrap_or(false) }

    pub fn set_tab_stop(&mut self, col: ColIndex) {
        if let Some(slot) = self.tab_stops.get_mut(col.as_usize()) {
            *slot = true;
        }
    }

    pub fn clear_tab_stop(&mut self, col: ColIndex) {
        if let Some(slot) = self.tab_stops.get_mut(col.as_usize()) {
            *slot = false;
        }
    }

    pub fn clear_all_tab_stops(&mut self) { self.tab_stops.iter_mut().for_each(|stop| *stop = false); }

    /// Overwrite `[start, start+count)` of `row` with `cell`.
    pub fn fill_row(&mut self, row: RowIndex, start: ColIndex, count: usize, cell: Cell) {
        self.rows[row.as_usize()].fill(start.as_usize(), count, cell);
    }

    /// `scrollDown(top, bottom, n)`: move rows `[top+n, bottom]` up to
    /// `[top, bottom-n]`, and clear the new bottom `n` rows (painted with
    /// `blank_cell`, which the caller supplies as the *current* cursor
    /// attribute — "cleared cells are filled with the current
    /// cursorAttr-painted space", spec §4.B). If `n` covers or exceeds the
    /// whole region, every row in it is cleared in place with no rotation.
    pub fn scroll_down(&mut self, top: RowIndex, bottom: RowIndex, n: usize, blank_cell: Cell) {
        let (top, bottom) = (top.as_usize(), bottom.as_usize());
        debug_assert!(top <= bottom);
        let region_len = bottom - top + 1;
        let clear_start = if n >= region_len {
            top
        } else {
            self.rows[top..=bottom].rotate_left(n);
            bottom - n + 1
        };
        for i in clear_start..=bottom {
            self.rows[i].fill(0, self.cols, blank_cell);
        }
    }

    /// `scrollUp(top, bottom, n)`: the symmetric downward move — rows
    /// `[top, bottom-n]` move down to `[top+n, bottom]`, and the new top
    /// `n` rows are cleared.
    pub fn scroll_up(&mut self, top: RowIndex, bottom: RowIndex, n: usize, blank_cell: Cell) {
        let (top, bottom) = (top.as_usize(), bottom.as_usize());
        debug_assert!(top <= bottom);
        let region_len = bottom - top + 1;
        let clear_end = if n >= region_len {
            bottom
        } else {
            self.rows[top..=bottom].rotate_right(n);
            top + n - 1
        };
        for i in top..=clear_end {
            self.rows[i].fill(0, self.cols, blank_cell);
        }
    }

    /// Reallocate to `new_rows x new_cols`, copying the overlapping
    /// rectangle cell-for-cell and defaulting everything outside it to
    /// blank. See `DESIGN.md` §9.2 for the full resize contract this
    /// implements (the original's `handleResize` is an unimplemented
    /// `abort()`).
    #[must_use]
    pub fn resized(&self, new_rows: usize, new_cols: usize) -> Self {
        let mut next = Self::new(new_rows, new_cols);
        let copy_rows = self.rows.len().min(new_rows);
        let copy_cols = self.cols.min(new_cols);
        for r in 0..copy_rows {
            for c in 0..copy_cols {
                next.rows[r].set_cell(c, self.rows[r].cell(c));
            }
            next.rows[r].clear_dirty();
            if self.rows[r].is_wrapped() && copy_cols == self.cols {
                next.rows[r].mark_wrapped();
            }
        }
        for c in 0..self.tab_stops.len().min(new_cols) {
            if self.tab_stops[c] {
                next.tab_stops[c] = true;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cell::{Cell, CellAttrs, EMPTY_FIELD};

    fn tagged(rows: usize, cols: usize) -> ScreenBuffer {
        let mut buf = ScreenBuffer::new(rows, cols);
        for r in 0..rows {
            buf.row_mut(row_index(r)).set_cell(0, Cell::new(('0' as u8 + r as u8) as char, CellAttrs::default()));
        }
        buf
    }

    #[test]
    fn scroll_down_rotates_and_clears_bottom() {
        let mut buf = tagged(5, 3);
        buf.scroll_down(row_index(0), row_index(4), 2, EMPTY_FIELD);
        let tags: Vec<char> = (0..5).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        assert_eq!(tags, vec!['2', '3', '4', ' ', ' ']);
    }

    #[test]
    fn scroll_down_on_a_single_row_region_just_clears_it() {
        // `top == bottom`: IL/DL with the cursor sitting on the bottom
        // scroll-margin row gives exactly this region. Must not panic.
        let mut buf = tagged(5, 3);
        buf.scroll_down(row_index(2), row_index(2), 1, EMPTY_FIELD);
        let tags: Vec<char> = (0..5).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        assert_eq!(tags, vec!['0', '1', ' ', '3', '4']);
    }

    #[test]
    fn scroll_up_on_a_single_row_region_just_clears_it() {
        let mut buf = tagged(5, 3);
        buf.scroll_up(row_index(2), row_index(2), 1, EMPTY_FIELD);
        let tags: Vec<char> = (0..5).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        assert_eq!(tags, vec!['0', '1', ' ', '3', '4']);
    }

    #[test]
    fn scroll_up_rotates_and_clears_top() {
        let mut buf = tagged(5, 3);
        buf.scroll_up(row_index(0), row_index(4), 2, EMPTY_FIELD);
        let tags: Vec<char> = (0..5).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        assert_eq!(tags, vec![' ', ' ', '0', '1', '2']);
    }

    #[test]
    fn scroll_down_past_region_size_clears_everything() {
        let mut buf = tagged(5, 3);
        buf.scroll_down(row_index(1), row_index(3), 10, EMPTY_FIELD);
        let tags: Vec<char> = (0..5).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        assert_eq!(tags, vec!['0', ' ', ' ', ' ', '4']);
    }

    #[test]
    fn scroll_down_then_up_preserves_all_row_content_outside_cleared_band() {
        let mut buf = tagged(6, 3);
        buf.scroll_down(row_index(0), row_index(5), 2, EMPTY_FIELD);
        buf.scroll_up(row_index(0), row_index(5), 2, EMPTY_FIELD);
        let tags: Vec<char> = (0..6).map(|r| buf.row(row_index(r)).cell(0).ch).collect();
        // The 2 rows scrolled off the bottom were cleared and never return;
        // rows 2..=5 (content '2','3','4', blank) shift back down to 0..=3,
        // and the scroll_up clears its own top 2.
        assert_eq!(tags, vec![' ', ' ', '2', '3', '4', ' ']);
    }

    #[test]
    fn resize_grow_preserves_overlap_and_blanks_new_area() {
        let buf = tagged(3, 3);
        let grown = buf.resized(5, 5);
        assert_eq!(grown.rows_len(), 5);
        assert_eq!(grown.cols_len(), 5);
        assert_eq!(grown.row(row_index(0)).cell(0).ch, '0');
        assert_eq!(grown.row(row_index(2)).cell(0).ch, '2');
        assert_eq!(grown.row(row_index(4)).cell(0).ch, ' ');
    }

    #[test]
    fn resize_shrink_truncates() {
        let buf = tagged(5, 5);
        let shrunk = buf.resized(2, 2);
        assert_eq!(shrunk.rows_len(), 2);
        assert_eq!(shrunk.row(row_index(0)).cell(0).ch, '0');
        assert_eq!(shrunk.row(row_index(1)).cell(0).ch, '1');
    }

    #[test]
    fn tab_stops_default_to_unset() {
        let buf = ScreenBuffer::new(3, 10);
        assert!((0..10).all(|c| !buf.is_tab_stop(col_index(c))));
    }
}
