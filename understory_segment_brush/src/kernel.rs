// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry service a segment brush builds its strokes with.

use kurbo::simplify::{SimplifyOptions, simplify_bezpath};
use kurbo::{BezPath, Circle, Point, Shape};

use crate::segment::{self, PathSegment};

/// Tolerance used when converting circles to Bezier paths.
pub const CIRCLE_TOLERANCE: f64 = 0.1;

/// Path construction and boolean operations used by a
/// [`SegmentBrush`](crate::SegmentBrush).
///
/// Only [`unite`](Self::unite) must be provided. The remaining operations
/// default to Kurbo. Tests can supply a deterministic kernel to exercise a
/// brush independently of any boolean-operation backend.
pub trait GeometryKernel {
    /// A closed circle path.
    fn circle(&self, center: Point, radius: f64) -> BezPath {
        Circle::new(center, radius).to_path(CIRCLE_TOLERANCE)
    }

    /// A path through anchor-and-handle segments.
    fn path_from_segments(&self, segments: &[PathSegment], closed: bool) -> BezPath {
        segment::path_from_segments(segments, closed)
    }

    /// Replace every curve in `path` by line segments within `tolerance`.
    fn flatten(&self, path: &BezPath, tolerance: f64) -> BezPath {
        let mut flat = BezPath::new();
        kurbo::flatten(path.iter(), tolerance, |el| flat.push(el));
        flat
    }

    /// Fit `path` with fewer segments, staying within `tolerance` of it.
    fn simplify(&self, path: &BezPath, tolerance: f64) -> BezPath {
        simplify_bezpath(path.iter(), tolerance, &SimplifyOptions::default())
    }

    /// The region covered by `a`, `b`, or both.
    fn unite(&self, a: &BezPath, b: &BezPath) -> BezPath;
}

impl<K: GeometryKernel + ?Sized> GeometryKernel for &K {
    fn circle(&self, center: Point, radius: f64) -> BezPath {
        (**self).circle(center, radius)
    }

    fn path_from_segments(&self, segments: &[PathSegment], closed: bool) -> BezPath {
        (**self).path_from_segments(segments, closed)
    }

    fn flatten(&self, path: &BezPath, tolerance: f64) -> BezPath {
        (**self).flatten(path, tolerance)
    }

    fn simplify(&self, path: &BezPath, tolerance: f64) -> BezPath {
        (**self).simplify(path, tolerance)
    }

    fn unite(&self, a: &BezPath, b: &BezPath) -> BezPath {
        (**self).unite(a, b)
    }
}
