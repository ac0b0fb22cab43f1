// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte-level constants shared by [`crate::parser`] and [`crate::ops`].

/// Bell.
pub const BEL: u8 = 0x07;
/// Backspace.
pub const BS: u8 = 0x08;
/// Horizontal tab.
pub const HT: u8 = 0x09;
/// Line feed.
pub const LF: u8 = 0x0A;
/// Vertical tab (treated identically to LF, per ECMA-48 and the original's
/// `case 0x0B: // VT` falling through to the LF handler).
pub const VT: u8 = 0x0B;
/// Form feed (treated identically to LF).
pub const FF: u8 = 0x0C;
/// Carriage return.
pub const CR: u8 = 0x0D;
/// Shift-out (accepted, no charset-shift effect — see `SPEC_FULL.md` §4.H).
pub const SO: u8 = 0x0E;
/// Shift-in (accepted, no charset-shift effect).
pub const SI: u8 = 0x0F;
/// Escape.
pub const ESC: u8 = 0x1B;

/// First byte of the C1 control range (0x80..=0x9F).
pub const C1_RANGE_START: u8 = 0x80;
/// Last byte of the C1 control range.
pub const C1_RANGE_END: u8 = 0x9F;

/// C1 equivalent of ESC `D` (IND).
pub const C1_IND: u8 = 0x84;
/// C1 equivalent of ESC `E` (NEL).
pub const C1_NEL: u8 = 0x85;
/// C1 equivalent of ESC `H` (HTS).
pub const C1_HTS: u8 = 0x88;
/// C1 equivalent of ESC `M` (RI).
pub const C1_RI: u8 = 0x8D;
/// C1 equivalent of ESC `[` (CSI).
pub const C1_CSI: u8 = 0x9B;
/// C1 equivalent of ST (string terminator) — ends OSC/DCS/APC/PM strings.
pub const C1_ST: u8 = 0x9C;
/// C1 equivalent of ESC `]` (OSC).
pub const C1_OSC: u8 = 0x9D;

/// Parameters beyond this index are silently dropped (`if(S->paramPtr <
/// MAX_PARAMS)`), matching the original's fixed-size `params` array.
pub const MAX_PARAMS: usize = 16;

/// A single CSI parameter saturates here rather than overflowing
/// (`CAP_MAX(S->paramVal, 16383)`).
pub const PARAM_MAX: u16 = 16383;

/// OSC string accumulation is bounded so a terminator-less OSC can't grow
/// unbounded memory; the original has no such bound (a fixed-size C buffer
/// with unchecked writes), which is itself a bug this crate does not
/// reproduce (see `DESIGN.md`).
pub const OSC_BUF_MAX: usize = 4096;
