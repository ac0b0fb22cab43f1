// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The packed character + attribute cell, the unit of screen storage.
//!
//! The original emulator packs a cell into a single `uint64_t`: a 32-bit
//! Unicode scalar value in the low word, a 32-bit attribute word in the
//! high word (`ATTR_PACK`). Per the redesign note in `DESIGN.md`, callers of
//! this crate see named fields, not a bit layout — [`Cell::to_packed`] /
//! [`Cell::from_packed`] exist only as the internal fast path
//! [`crate::row::Row::fill`] uses to pattern-copy a cell across a column
//! range (the `memset_pattern8` in the original).

/// Foreground/background color selection: either "use the palette default"
/// or a specific 0..=255 palette index (set via SGR 30-37/90-97 or
/// 40-47/100-107).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSlot {
    #[default]
    Default,
    Indexed(u8),
}

impl ColorSlot {
    #[must_use]
    pub fn is_custom(self) -> bool { !matches!(self, ColorSlot::Default) }
}

/// Boolean style bits plus the two color slots. `Copy` and cheap: this is
/// the "attribute word" half of a cell, and also the state carried forward
/// by the cursor as `cursorAttr` between writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellAttrs {
    pub fg: ColorSlot,
    pub bg: ColorSlot,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub strikethrough: bool,
}

impl CellAttrs {
    /// SGR parameter `0`: reset the full attribute word.
    #[must_use]
    pub fn reset() -> Self { Self::default() }
}

/// One screen cell: a glyph and the attributes it was written with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub attrs: CellAttrs,
}

/// The sentinel cleared/blank cell: a space glyph at the zero attribute.
pub const EMPTY_FIELD: Cell = Cell { ch: ' ', attrs: CellAttrs {
    fg: ColorSlot::Default,
    bg: ColorSlot::Default,
    bold: false,
    italic: false,
    underline: false,
    blink: false,
    reverse: false,
    strikethrough: false,
} };

impl Default for Cell {
    fn default() -> Self { EMPTY_FIELD }
}

impl Cell {
    #[must_use]
    pub fn new(ch: char, attrs: CellAttrs) -> Self { Self { ch, attrs } }

    /// A blank cell (space glyph) painted with `attrs` — used when clearing
    /// under the *current* cursor attribute so the background color paints
    /// on clear, matching xterm (see `ScreenBuffer::fill_row`/`scroll_*`).
    #[must_use]
    pub fn blank_with(attrs: CellAttrs) -> Self { Self { ch: ' ', attrs } }

    /// Pack into the original's 64-bit representation: glyph in the low
    /// 32 bits, attribute word in the high 32 bits. Internal fast-path only.
    #[must_use]
    pub fn to_packed(self) -> u64 {
        let attr_word = pack_attrs(self.attrs);
        (u64::from(attr_word) << 32) | u64::from(self.ch as u32)
    }

    /// Inverse of [`Cell::to_packed`]. An invalid scalar value (shouldn't
    /// occur since we only ever pack chars we already validated) falls back
    /// to the replacement character rather than panicking.
    #[must_use]
    pub fn from_packed(packed: u64) -> Self {
        let ch = char::from_u32(packed as u32).unwrap_or('\u{FFFD}');
        let attrs = unpack_attrs((packed >> 32) as u32);
        Self { ch, attrs }
    }
}

const BOLD_BIT: u32 = 1 << 0;
const ITALIC_BIT: u32 = 1 << 2;
const UNDERLINE_BIT: u32 = 1 << 3;
const BLINK_BIT: u32 = 1 << 4;
const REVERSE_BIT: u32 = 1 << 5;
const STRIKETHROUGH_BIT: u32 = 1 << 7;
const FG_CUSTOM_BIT: u32 = 1 << 8;
const BG_CUSTOM_BIT: u32 = 1 << 9;
const FG_SHIFT: u32 = 16;
const BG_SHIFT: u32 = 24;

fn pack_attrs(attrs: CellAttrs) -> u32 {
    let mut word = 0u32;
    if attrs.bold {
        word |= BOLD_BIT;
    }
    if attrs.italic {
        word |= ITALIC_BIT;
    }
    if attrs.underline {
        word |= UNDERLINE_BIT;
    }
    if attrs.blink {
        word |= BLINK_BIT;
    }
    if attrs.reverse {
        word |= REVERSE_BIT;
    }
    if attrs.strikethrough {
        word |= STRIKETHROUGH_BIT;
    }
    if let ColorSlot::Indexed(idx) = attrs.fg {
        word |= FG_CUSTOM_BIT | (u32::from(idx) << FG_SHIFT);
    }
    if let ColorSlot::Indexed(idx) = attrs.bg {
        word |= BG_CUSTOM_BIT | (u32::from(idx) << BG_SHIFT);
    }
    word
}

fn unpack_attrs(word: u32) -> CellAttrs {
    let fg = if word & FG_CUSTOM_BIT != 0 {
        ColorSlot::Indexed(((word >> FG_SHIFT) & 0xFF) as u8)
    } else {
        ColorSlot::Default
    };
    let bg = if word & BG_CUSTOM_BIT != 0 {
        ColorSlot::Indexed(((word >> BG_SHIFT) & 0xFF) as u8)
    } else {
        ColorSlot::Default
    };
    CellAttrs {
        fg,
        bg,
        bold: word & BOLD_BIT != 0,
        italic: word & ITALIC_BIT != 0,
        underline: word & UNDERLINE_BIT != 0,
        blink: word & BLINK_BIT != 0,
        reverse: word & REVERSE_BIT != 0,
        strikethrough: word & STRIKETHROUGH_BIT != 0,
    }
}
