// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT-style terminal emulator engine.
//!
//! This crate is a byte-stream-driven state machine that consumes the output
//! of a child process (or anything emitting ECMA-48 / ANSI / xterm escape
//! sequences) and maintains an in-memory grid of attributed character cells.
//! It exposes that grid, the cursor, and mode state to a rendering layer, and
//! calls back out to a [`host::TerminalHost`] for bell/title/resize/reply
//! events.
//!
//! # Pipeline
//!
//! ```text
//! ╭─────────────────╮    ╭───────────────╮    ╭─────────────────╮    ╭──────────────╮
//! │ Byte producer   │───▶│ UTF-8 decoder │───▶│ Parser state    │───▶│ Operation    │
//! │ (pty, test, ...)│    │ (lenient)     │    │ machine         │    │ dispatcher   │
//! ╰─────────────────╯    ╰───────────────╯    ╰─────────────────╯    ╰──────────────╯
//!                                                                            │
//!                                                                            ▼
//!                                                                   ╭──────────────╮
//!                                                                   │ ScreenBuffer │
//!                                                                   │ + Cursor     │
//!                                                                   ╰──────────────╯
//! ```
//!
//! # Module Map
//!
//! - [`cell`] — packed character + attribute cell, the unit of screen storage.
//! - [`row`] — a line of cells plus dirty/wrapped flags.
//! - [`screen`] — the row grid: scroll region, fill/clear, row rotation.
//! - [`palette`] — the 258-entry default color table.
//! - [`cursor`] — cursor position/attribute/save-state and the `wrapnext` latch.
//! - [`modes`] — boolean terminal modes (IRM, LNM, DECOM, DECAWM, ...).
//! - [`utf8`] — stateful, lenient UTF-8 decoder.
//! - [`parser`] — the ESC/CSI/OSC byte-level state machine.
//! - [`ops`] — operation dispatcher: one module per operation family.
//! - [`host`] — the capability trait the core calls back out through.
//! - [`emulator`] — [`emulator::Emulator`], the crate's single public entry point.
//!
//! # Non-goals
//!
//! No alternate-screen buffer, no DCS/APC/PM sequences, no charset/G-set
//! shifting, no SS2/SS3, no smooth-scrolling animation, no bidirectional
//! text, no sixel/graphics, no scrollback, no terminfo database. See
//! `DESIGN.md` for the full list and rationale.

pub mod cell;
pub(crate) mod constants;
pub mod cursor;
pub mod emulator;
pub mod error;
pub mod host;
pub mod modes;
pub mod ops;
pub mod palette;
pub mod parser;
pub mod row;
pub mod screen;
pub mod units;
pub mod utf8;

pub use cell::{Cell, CellAttrs, EMPTY_FIELD};
pub use cursor::Cursor;
pub use emulator::Emulator;
pub use error::ResizeError;
pub use host::TerminalHost;
pub use modes::{Modes, MouseTracking};
pub use row::{Row, RowFlags};
pub use screen::ScreenBuffer;
pub use units::{ColIndex, RowIndex};
