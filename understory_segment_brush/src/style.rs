// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill style carried by brush strokes.

use peniko::{Brush, Color, Fill};

/// How a finished stroke path should be filled.
///
/// The brush does not paint anything itself; it records the host's style at
/// stroke start so the caller can apply it when adopting the path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    /// Paint used to fill the stroke region.
    pub fill: Brush,
    /// Fill rule for the stroke region.
    pub fill_rule: Fill,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

impl PathStyle {
    /// A non-zero fill with a solid color.
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Brush::Solid(color),
            fill_rule: Fill::NonZero,
        }
    }
}
