// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush configuration and the tolerances derived from it.

use crate::BrushError;

/// Configuration for a [`SegmentBrush`](crate::SegmentBrush).
///
/// All distances are in the same units as the pointer positions fed to the
/// brush. Use [`BrushOptions::new`] to get validated defaults for a given
/// size, then adjust with the `with_*` builders; [`BrushOptions::validate`] is
/// run again when the options are handed to a brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushOptions {
    /// Stroke width, i.e. the diameter of the initial dab.
    pub brush_size: f64,
    /// Minimum pointer travel before the host reports another drag sample.
    pub min_distance: f64,
    /// Upper bound for the curve flattening tolerance.
    pub max_flatten_tolerance: f64,
    /// The flattening tolerance is `brush_size / flatten_divisor`, capped by
    /// [`max_flatten_tolerance`](Self::max_flatten_tolerance).
    pub flatten_divisor: f64,
    /// Tolerance of the simplification applied when the stroke ends.
    pub simplify_tolerance: f64,
}

impl Default for BrushOptions {
    fn default() -> Self {
        Self {
            brush_size: 10.0,
            min_distance: 1.0,
            max_flatten_tolerance: 5.0,
            flatten_divisor: 5.0,
            simplify_tolerance: 2.0,
        }
    }
}

impl BrushOptions {
    /// Default options for a brush of the given size.
    pub fn new(brush_size: f64) -> Result<Self, BrushError> {
        let mut options = Self::default();
        options.set_brush_size(brush_size)?;
        Ok(options)
    }

    /// Change the brush size, rejecting sizes that are not finite and positive.
    pub fn set_brush_size(&mut self, brush_size: f64) -> Result<(), BrushError> {
        if !(brush_size.is_finite() && brush_size > 0.0) {
            return Err(BrushError::InvalidBrushSize(brush_size));
        }
        self.brush_size = brush_size;
        Ok(())
    }

    /// Set [`min_distance`](Self::min_distance).
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Set [`max_flatten_tolerance`](Self::max_flatten_tolerance).
    #[must_use]
    pub fn with_max_flatten_tolerance(mut self, tolerance: f64) -> Self {
        self.max_flatten_tolerance = tolerance;
        self
    }

    /// Set [`flatten_divisor`](Self::flatten_divisor).
    #[must_use]
    pub fn with_flatten_divisor(mut self, divisor: f64) -> Self {
        self.flatten_divisor = divisor;
        self
    }

    /// Set [`simplify_tolerance`](Self::simplify_tolerance).
    #[must_use]
    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Self {
        self.simplify_tolerance = tolerance;
        self
    }

    /// Check every option, returning the first one that is out of range.
    pub fn validate(&self) -> Result<(), BrushError> {
        if !(self.brush_size.is_finite() && self.brush_size > 0.0) {
            return Err(BrushError::InvalidBrushSize(self.brush_size));
        }
        check_option("min_distance", self.min_distance, true)?;
        check_option("max_flatten_tolerance", self.max_flatten_tolerance, false)?;
        check_option("flatten_divisor", self.flatten_divisor, false)?;
        check_option("simplify_tolerance", self.simplify_tolerance, false)?;
        Ok(())
    }

    /// Half the brush size.
    pub fn radius(&self) -> f64 {
        self.brush_size / 2.0
    }

    /// Maximum pointer travel between two drag samples.
    ///
    /// Longer moves are split by the host so that consecutive segment quads
    /// never span more than one brush width.
    pub fn max_distance(&self) -> f64 {
        self.brush_size
    }

    /// Tolerance used to flatten each segment quad before it is merged.
    pub fn flatten_tolerance(&self) -> f64 {
        self.max_flatten_tolerance
            .min(self.brush_size / self.flatten_divisor)
    }
}

fn check_option(name: &'static str, value: f64, allow_zero: bool) -> Result<(), BrushError> {
    let in_range = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if in_range {
        Ok(())
    } else {
        Err(BrushError::InvalidOption { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = BrushOptions::default();
        assert_eq!(options.validate(), Ok(()));
        assert_eq!(options.radius(), 5.0);
        assert_eq!(options.max_distance(), 10.0);
        assert_eq!(options.min_distance, 1.0);
        assert_eq!(options.simplify_tolerance, 2.0);
    }

    #[test]
    fn rejects_degenerate_brush_sizes() {
        for size in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(
                BrushOptions::new(size).is_err(),
                "size {size} should be rejected"
            );
        }
        let mut options = BrushOptions::default();
        assert_eq!(
            options.set_brush_size(-1.0),
            Err(BrushError::InvalidBrushSize(-1.0))
        );
        assert_eq!(options.brush_size, 10.0, "failed update must not apply");
    }

    #[test]
    fn flatten_tolerance_scales_with_size_and_is_capped() {
        let small = BrushOptions::new(10.0).unwrap();
        assert_eq!(small.flatten_tolerance(), 2.0);

        let large = BrushOptions::new(100.0).unwrap();
        assert_eq!(large.flatten_tolerance(), 5.0);

        let custom = BrushOptions::new(100.0)
            .unwrap()
            .with_max_flatten_tolerance(50.0)
            .with_flatten_divisor(10.0);
        assert_eq!(custom.flatten_tolerance(), 10.0);
    }

    #[test]
    fn validate_reports_first_bad_option() {
        let options = BrushOptions::default()
            .with_min_distance(-1.0)
            .with_simplify_tolerance(0.0);
        assert_eq!(
            options.validate(),
            Err(BrushError::InvalidOption {
                name: "min_distance",
                value: -1.0,
            })
        );

        let options = BrushOptions::default().with_simplify_tolerance(0.0);
        assert_eq!(
            options.validate(),
            Err(BrushError::InvalidOption {
                name: "simplify_tolerance",
                value: 0.0,
            })
        );

        let zero_min = BrushOptions::default().with_min_distance(0.0);
        assert_eq!(zero_min.validate(), Ok(()));
    }
}
