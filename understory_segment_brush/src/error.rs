// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when configuring a segment brush.

use core::fmt;

/// Error returned when brush options cannot be used to build strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrushError {
    /// The brush size is not a finite, strictly positive number.
    InvalidBrushSize(f64),
    /// A tolerance or distance option is out of range.
    InvalidOption {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for BrushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBrushSize(size) => {
                write!(f, "brush size must be finite and positive, got {size}")
            }
            Self::InvalidOption { name, value } => {
                write!(f, "brush option `{name}` is out of range: {value}")
            }
        }
    }
}

impl core::error::Error for BrushError {}
