// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Emulator`] — the crate's single public entry point. Wires the screen
//! buffer, cursor, mode state, parser, and UTF-8 decoder together and drives
//! them from an incoming byte stream, calling back out to a
//! [`crate::host::TerminalHost`] for bell/reply/title/resize events.

use tracing::{trace, warn};

use crate::cell::Cell;
use crate::cursor::Cursor;
use crate::error::ResizeError;
use crate::host::TerminalHost;
use crate::modes::Modes;
use crate::palette::{PALETTE_SIZE, Rgba, default_palette};
use crate::parser::{Parser, ParserEvent};
use crate::screen::ScreenBuffer;
use crate::units::{ColIndex, RowIndex, col_index, row_index};
use crate::utf8::Utf8Decoder;

/// The whole emulator: grid, cursor, modes, and the byte-level state machine
/// that drives them, plus a host callback sink.
#[derive(Debug)]
pub struct Emulator<H: TerminalHost> {
    screen: ScreenBuffer,
    cursor: Cursor,
    modes: Modes,
    palette: [Rgba; PALETTE_SIZE],
    scroll_top: RowIndex,
    scroll_bottom: RowIndex,
    parser: Parser,
    utf8: Utf8Decoder,
    host: H,
}

impl<H: TerminalHost> Emulator<H> {
    /// `TerminalEmulator_init`: allocate a blank `rows x cols` grid, the
    /// default palette, a full-screen scroll region, and power-on mode
    /// defaults (wraparound on, cursor visible).
    ///
    /// `rows` and `cols` are taken as `u16` (xterm's own geometry limit) but
    /// stored as `usize` internally; both must already be non-zero — use
    /// [`Emulator::resize`] to change geometry later, which is the one
    /// fallible path.
    #[must_use]
    pub fn new(rows: u16, cols: u16, host: H) -> Self {
        let rows = rows.max(1) as usize;
        let cols = cols.max(1) as usize;
        Self {
            screen: ScreenBuffer::new(rows, cols),
            cursor: Cursor::new(),
            modes: Modes::default(),
            palette: default_palette(),
            scroll_top: row_index(0),
            scroll_bottom: row_index(rows - 1),
            parser: Parser::new(),
            utf8: Utf8Decoder::new(),
            host,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &ScreenBuffer { &self.screen }

    #[must_use]
    pub fn cursor(&self) -> Cursor { self.cursor }

    #[must_use]
    pub fn modes(&self) -> &Modes { &self.modes }

    #[must_use]
    pub fn palette(&self) -> &[Rgba; PALETTE_SIZE] { &self.palette }

    #[must_use]
    pub fn scroll_region(&self) -> (RowIndex, RowIndex) { (self.scroll_top, self.scroll_bottom) }

    #[must_use]
    pub fn host(&self) -> &H { &self.host }

    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    /// Clear every row's dirty flag — call after a renderer has painted a
    /// frame.
    pub fn clear_dirty(&mut self) {
        for i in 0..self.screen.rows_len() {
            self.screen.row_mut(row_index(i)).clear_dirty();
        }
    }

    /// Feed a chunk of host-program output through the parser.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed_byte(byte);
        }
    }

    fn feed_byte(&mut self, byte: u8) {
        let event = self.parser.feed(byte, self.utf8.is_pending());
        match event {
            ParserEvent::None => {}
            ParserEvent::Print(b) => self.feed_print_byte(b),
            ParserEvent::C0(b) => self.dispatch_c0(b),
            ParserEvent::C1(b) => self.dispatch_c1(b),
            ParserEvent::Esc { intermed, final_byte } => self.dispatch_esc(intermed, final_byte),
            ParserEvent::Csi { priv_marker, intermed, params, final_byte } => {
                self.dispatch_csi(priv_marker, intermed, final_byte, &params);
            }
            ParserEvent::Osc { op, text } => self.dispatch_osc(op, &text),
        }
    }

    fn feed_print_byte(&mut self, byte: u8) {
        let mut chars = Vec::new();
        self.utf8.push(byte, &mut chars);
        for ch in chars {
            self.print_char(ch);
        }
    }

    fn dispatch_c0(&mut self, byte: u8) {
        use crate::constants::{BEL, BS, CR, FF, HT, LF, SI, SO, VT};
        match byte {
            BEL => self.host.bell(),
            BS => self.do_bs(),
            HT => self.do_ht(),
            LF | VT | FF => self.do_nl(),
            CR => self.do_cr(),
            SI | SO => {} // accepted, no charset-shift effect (Non-goal).
            _ => trace!(byte, "discarded unrecognized C0 control"),
        }
    }

    fn dispatch_c1(&mut self, byte: u8) {
        use crate::constants::{C1_HTS, C1_IND, C1_NEL, C1_RI};
        match byte {
            C1_IND => self.do_ind(),
            C1_NEL => self.do_nel(),
            C1_HTS => self.do_hts(),
            C1_RI => self.do_ri(),
            _ => trace!(byte, "discarded unrecognized C1 control"),
        }
    }

    fn dispatch_esc(&mut self, intermed: u16, final_byte: u8) {
        match (intermed, final_byte) {
            (0, b'7') => self.do_decsc(),
            (0, b'8') => self.do_decrc(),
            (0, b'D') => self.do_ind(),
            (0, b'E') => self.do_nel(),
            (0, b'H') => self.do_hts(),
            (0, b'M') => self.do_ri(),
            (0x23, b'8') => self.do_decaln(), // ESC # 8
            _ => warn!(intermed, final_byte, "discarded unknown ESC sequence"),
        }
    }

    fn dispatch_csi(&mut self, priv_marker: u8, intermed: u16, final_byte: u8, params: &[u16]) {
        if priv_marker == 0 {
            match final_byte {
                b'A' => self.do_cuu(params),
                b'B' => self.do_cud(params),
                b'C' => self.do_cuf(params),
                b'D' => self.do_cub(params),
                b'E' => self.do_cnl(params),
                b'F' => self.do_cpl(params),
                b'G' => self.do_cha(params),
                b'H' | b'f' => self.do_cup_hvp(params),
                b'J' => self.do_ed(params),
                b'K' => self.do_el(params),
                b'L' => self.do_il(params),
                b'M' => self.do_dl(params),
                b'P' => self.do_dch(params),
                b'X' => self.do_ech(params),
                b'@' => self.do_ich(params),
                b'c' => self.do_da(),
                b'd' => self.do_vpa(params),
                b'g' => self.do_tbc(params),
                b'h' => self.do_sm(priv_marker, intermed, params),
                b'l' => self.do_rm(priv_marker, intermed, params),
                b'm' => self.do_sgr(params),
                b'r' => self.do_decstbm(params),
                b't' => self.do_dterm_window(params),
                _ => warn!(intermed, final_byte, "discarded unhandled CSI"),
            }
        } else {
            match final_byte {
                b'h' => self.do_sm(priv_marker, intermed, params),
                b'l' => self.do_rm(priv_marker, intermed, params),
                _ => warn!(priv_marker, intermed, final_byte, "discarded unhandled private CSI"),
            }
        }
    }

    fn dispatch_osc(&mut self, op: u16, text: &[u8]) { self.do_osc(op, text); }

    /// `output_char`/`do_unichar`: write one decoded character at the cursor,
    /// honoring the pending-wrap latch, insert mode, and wraparound.
    fn print_char(&mut self, ch: char) {
        if self.cursor.wrapnext {
            if self.modes.wraparound {
                self.screen.row_mut(self.cursor.row).mark_wrapped();
                self.term_index(1);
                self.cursor.col = col_index(0);
            }
            self.cursor.wrapnext = false;
        }

        let attrs = self.cursor.attrs;
        let cols = self.screen.cols_len();
        if self.modes.insert {
            self.screen.row_mut(self.cursor.row).shift_right(self.cursor.col.as_usize(), 1, Cell::blank_with(attrs));
        }
        self.screen.row_mut(self.cursor.row).set_cell(self.cursor.col.as_usize(), Cell::new(ch, attrs));
        self.cursor.col = self.cursor.col.saturating_add(1);

        if self.cursor.col.as_usize() == cols {
            self.cursor.col = col_index(cols - 1);
            self.cursor.wrapnext = true;
        }
    }

    /// A blank cell painted with the *current* cursor attribute — used
    /// whenever clearing exposes new cells (scroll, DECSTBM reset, erase).
    pub(crate) fn blank_cell(&self) -> Cell { Cell::blank_with(self.cursor.attrs) }

    pub(crate) fn screen_mut(&mut self) -> &mut ScreenBuffer { &mut self.screen }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor { &mut self.cursor }

    pub(crate) fn modes_mut(&mut self) -> &mut Modes { &mut self.modes }

    pub(crate) fn scroll_top(&self) -> RowIndex { self.scroll_top }

    pub(crate) fn scroll_bottom(&self) -> RowIndex { self.scroll_bottom }

    pub(crate) fn set_scroll_region(&mut self, top: RowIndex, bottom: RowIndex) {
        self.scroll_top = top;
        self.scroll_bottom = bottom;
    }

    /// `term_index`: move the cursor row by `count` (positive = down,
    /// negative = up), scrolling the region when the motion would run off
    /// either edge.
    pub(crate) fn term_index(&mut self, count: i32) {
        if count == 0 {
            return;
        }
        let top = self.scroll_top.as_usize() as i32;
        let bottom = self.scroll_bottom.as_usize() as i32;
        let row = self.cursor.row.as_usize() as i32;

        if count > 0 {
            let dist = bottom - row;
            if dist >= count {
                self.cursor.row = row_index((row + count) as usize);
            } else {
                self.cursor.row = row_index(bottom as usize);
                let blank = self.blank_cell();
                self.screen.scroll_down(self.scroll_top, self.scroll_bottom, (count - dist) as usize, blank);
            }
        } else {
            let count = -count;
            let dist = row - top;
            if dist >= count {
                self.cursor.row = row_index((row - count) as usize);
            } else {
                self.cursor.row = row_index(top as usize);
                let blank = self.blank_cell();
                self.screen.scroll_up(self.scroll_top, self.scroll_bottom, (count - dist) as usize, blank);
            }
        }
    }

    pub(crate) fn clamp_col(&self, col: ColIndex) -> ColIndex {
        col.clamp_to(self.screen.last_col_index())
    }

    pub(crate) fn clamp_row_full(&self, row: RowIndex) -> RowIndex {
        row.clamp_to(self.screen.last_row_index())
    }

    /// `TerminalEmulator_handleResize`, implemented (the original aborts).
    /// See `DESIGN.md`/`SPEC_FULL.md` §9.2 for the full contract.
    pub fn resize(&mut self, rows: u16, cols: u16) -> Result<(), ResizeError> {
        if rows == 0 || cols == 0 {
            return Err(ResizeError::ZeroDimension { rows, cols });
        }
        let (new_rows, new_cols) = (rows as usize, cols as usize);
        self.screen = self.screen.resized(new_rows, new_cols);

        self.cursor.row = self.cursor.row.clamp_to(row_index(new_rows - 1));
        self.cursor.col = self.cursor.col.clamp_to(col_index(new_cols - 1));
        self.cursor.wrapnext = false;

        let top = self.scroll_top.as_usize().min(new_rows - 1);
        let bottom = self.scroll_bottom.as_usize().min(new_rows - 1);
        if top >= bottom {
            self.scroll_top = row_index(0);
            self.scroll_bottom = row_index(new_rows - 1);
        } else {
            self.scroll_top = row_index(top);
            self.scroll_bottom = row_index(bottom);
        }

        Ok(())
    }
}
