// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The one fallible boundary this crate has.
//!
//! Everything parser/dispatch-side absorbs malformed input per spec §7;
//! [`ResizeError`] is the single exception, since a `0 x N` or `N x 0` grid
//! cannot satisfy the §3 invariants (`0 <= cRow < wRows`, `0 <= cCol <
//! wCols`) no matter how it's clamped.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResizeError {
    #[error("cannot resize to {rows} rows x {cols} cols: both dimensions must be non-zero")]
    ZeroDimension { rows: u16, cols: u16 },
}
