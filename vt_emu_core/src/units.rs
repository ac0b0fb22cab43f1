// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type-safe 0-based buffer coordinates.
//!
//! Terminal sequences (CSI `H`, `d`, `G`, ...) are 1-based; everything in
//! this crate's public grid API is 0-based. Converting a 1-based CSI
//! parameter to a [`RowIndex`]/[`ColIndex`] is done once, at the `ops`
//! boundary (see [`crate::ops::csi_param_to_index`]), so the rest of the
//! crate never has to reason about the off-by-one.

use std::fmt;

/// A 0-based row index into a [`crate::ScreenBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowIndex(usize);

/// A 0-based column index into a [`crate::Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColIndex(usize);

macro_rules! index_newtype {
    ($ty:ident, $ctor:ident) => {
        impl $ty {
            #[must_use]
            pub fn new(value: usize) -> Self { Self(value) }

            #[must_use]
            pub fn as_usize(self) -> usize { self.0 }

            /// Saturating add, used by cursor motion so a runaway parameter
            /// can never wrap `usize` before the caller clamps it.
            #[must_use]
            pub fn saturating_add(self, rhs: usize) -> Self { Self(self.0.saturating_add(rhs)) }

            /// Saturating sub, used by cursor motion moving toward zero.
            #[must_use]
            pub fn saturating_sub(self, rhs: usize) -> Self { Self(self.0.saturating_sub(rhs)) }

            /// Clamp into `[0, max_inclusive]`.
            #[must_use]
            pub fn clamp_to(self, max_inclusive: Self) -> Self { Self(self.0.min(max_inclusive.0)) }
        }

        #[must_use]
        pub fn $ctor(value: usize) -> $ty { $ty::new(value) }

        impl From<usize> for $ty {
            fn from(value: usize) -> Self { Self(value) }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
        }
    };
}

index_newtype!(RowIndex, row_index);
index_newtype!(ColIndex, col_index);
