// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen/line erase (ED, EL) and the DECALN screen-alignment test pattern.

use crate::cell::{Cell, CellAttrs, EMPTY_FIELD};
use crate::emulator::Emulator;
use crate::host::TerminalHost;
use crate::ops::get_arg;
use crate::units::{col_index, row_index};

impl<H: TerminalHost> Emulator<H> {
    /// ED: erase in display. `0` erases cursor-to-end, `1` start-to-cursor
    /// (inclusive), `2` the whole screen. Erase always uses a plain blank
    /// (`EMPTY_FIELD`), not the current cursor-attribute-painted blank —
    /// matching the original's literal `EMPTY_FIELD` (as opposed to
    /// `ATTR_PACK(' ', cursorAttr)` used by scrolling).
    pub(crate) fn do_ed(&mut self, params: &[u16]) {
        let p1 = get_arg(params, 0, 0);
        let cursor_row = self.cursor().row.as_usize();
        let last_row = self.screen().last_row_index().as_usize();
        // `None` means "no whole row falls in range" (e.g. Ps=1 with the
        // cursor already on row 0 — nothing precedes it).
        let full_clear_range = match p1 {
            1 => (cursor_row > 0).then(|| (0, cursor_row - 1)),
            2 => Some((0, last_row)),
            _ => Some((cursor_row + 1, last_row)),
        };
        if let Some((from, to)) = full_clear_range {
            if from <= to {
                let cols = self.screen().cols_len();
                for i in from..=to {
                    self.screen_mut().fill_row(row_index(i), col_index(0), cols, EMPTY_FIELD);
                }
            }
        }

        let cursor_col = self.cursor().col.as_usize();
        let cols = self.screen().cols_len();
        if p1 == 1 {
            self.screen_mut().fill_row(row_index(cursor_row), col_index(0), cursor_col + 1, EMPTY_FIELD);
        } else if p1 != 2 {
            self.screen_mut().fill_row(row_index(cursor_row), col_index(cursor_col), cols - cursor_col, EMPTY_FIELD);
        }
    }

    /// EL: erase in line, same `0`/`1`/`2` convention as ED but scoped to the
    /// cursor's row.
    pub(crate) fn do_el(&mut self, params: &[u16]) {
        let cols = self.screen().cols_len();
        let cursor_col = self.cursor().col.as_usize();
        let (from, to) = match get_arg(params, 0, 0) {
            1 => (0, cursor_col),
            2 => (0, cols - 1),
            _ => (cursor_col, cols - 1),
        };
        let row = self.cursor().row;
        self.screen_mut().fill_row(row, col_index(from), to - from + 1, EMPTY_FIELD);
    }

    /// DECALN (`ESC # 8`): fill the whole screen with `E` at the default
    /// attribute (spec §4.F), not the current cursor attribute.
    pub(crate) fn do_decaln(&mut self) {
        let rows = self.screen().rows_len();
        let cols = self.screen().cols_len();
        let fill = Cell::new('E', CellAttrs::default());
        for i in 0..rows {
            self.screen_mut().fill_row(row_index(i), col_index(0), cols, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::emulator::Emulator;
    use crate::host::NullHost;
    use crate::units::row_index;

    fn emu(rows: u16, cols: u16) -> Emulator<NullHost> { Emulator::new(rows, cols, NullHost::default()) }

    #[test]
    fn ed_ps1_on_row_zero_only_clears_up_to_cursor() {
        // Regression: Ps=1 with the cursor already on row 0 must not wipe
        // the rest of that row — there is no row "before" row 0 to
        // full-clear, only the partial range up to and including the cursor.
        let mut e = emu(3, 10);
        e.feed(b"0123456789"); // fills row 0, cursor now wraps-pending at col 9
        e.feed(b"\x1b[1;6H"); // CUP row 1, col 6 (0-based col 5)
        e.feed(b"\x1b[1J"); // ED Ps=1: erase start-of-screen to cursor
        let text: String = e.screen().row(row_index(0)).cells().iter().map(|c| c.ch).collect();
        assert_eq!(text, "      6789");
    }

    #[test]
    fn ed_ps1_on_nonzero_row_clears_preceding_rows_fully() {
        let mut e = emu(3, 10);
        e.feed(b"\x1b[1;1HAAAAAAAAAA");
        e.feed(b"\x1b[2;1HBBBBBBBBBB");
        e.feed(b"\x1b[2;6H"); // row 1 (0-based), col 5
        e.feed(b"\x1b[1J");
        let row0: String = e.screen().row(row_index(0)).cells().iter().map(|c| c.ch).collect();
        let row1: String = e.screen().row(row_index(1)).cells().iter().map(|c| c.ch).collect();
        assert_eq!(row0, "          ");
        assert_eq!(row1, "      BBBB");
    }

    #[test]
    fn ed_ps0_erases_cursor_to_end_of_screen() {
        let mut e = emu(3, 10);
        e.feed(b"\x1b[1;1HAAAAAAAAAA\x1b[2;1HBBBBBBBBBB\x1b[3;1HCCCCCCCCCC");
        e.feed(b"\x1b[2;6H"); // row 1 (0-based), col 5
        e.feed(b"\x1b[0J");
        let row1: String = e.screen().row(row_index(1)).cells().iter().map(|c| c.ch).collect();
        let row2: String = e.screen().row(row_index(2)).cells().iter().map(|c| c.ch).collect();
        assert_eq!(row1, "BBBBB     ");
        assert_eq!(row2, "          ");
    }

    #[test]
    fn ed_ps2_clears_whole_screen() {
        let mut e = emu(2, 5);
        e.feed(b"\x1b[1;1HAAAAA\x1b[2;1HBBBBB");
        e.feed(b"\x1b[2J");
        for r in 0..2 {
            let text: String = e.screen().row(row_index(r)).cells().iter().map(|c| c.ch).collect();
            assert_eq!(text, "     ");
        }
    }

    #[test]
    fn el_ps1_clears_up_to_and_including_cursor() {
        let mut e = emu(1, 10);
        e.feed(b"0123456789\x1b[1;6H\x1b[1K");
        let text: String = e.screen().row(row_index(0)).cells().iter().map(|c| c.ch).collect();
        assert_eq!(text, "      6789");
    }

    #[test]
    fn decaln_fills_screen_with_e() {
        let mut e = emu(2, 3);
        e.feed(b"\x1b#8");
        for r in 0..2 {
            assert!(e.screen().row(row_index(r)).cells().iter().all(|c| c.ch == 'E'));
        }
    }

    #[test]
    fn decaln_fills_at_default_attrs_even_with_custom_cursor_attrs() {
        let mut e = emu(1, 3);
        e.feed(b"\x1b[31m"); // custom red foreground
        e.feed(b"\x1b#8");
        for cell in e.screen().row(row_index(0)).cells() {
            assert_eq!(cell.attrs, crate::cell::CellAttrs::default());
        }
    }
}
