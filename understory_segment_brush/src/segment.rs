// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-and-handle path segments and the rounded quad built per drag sample.
//!
//! A [`PathSegment`] is an anchor point with an incoming and an outgoing
//! handle, both relative to the anchor. Two consecutive segments are joined by
//! a straight line when the facing handles are both zero and by a cubic Bezier
//! otherwise.

use kurbo::{BezPath, Point, Vec2};

/// An anchor point with Bezier handles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathSegment {
    /// Anchor point on the path.
    pub point: Point,
    /// Handle controlling the curve arriving at `point`, relative to `point`.
    pub handle_in: Vec2,
    /// Handle controlling the curve leaving `point`, relative to `point`.
    pub handle_out: Vec2,
}

impl PathSegment {
    /// A corner segment without handles.
    pub const fn new(point: Point) -> Self {
        Self {
            point,
            handle_in: Vec2::ZERO,
            handle_out: Vec2::ZERO,
        }
    }

    /// A segment with explicit handles.
    pub const fn with_handles(point: Point, handle_in: Vec2, handle_out: Vec2) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }
}

impl From<Point> for PathSegment {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

/// Build a path through `segments`.
///
/// When `closed` is set, the last segment is joined back to the first one
/// (honoring their handles) and the subpath is closed.
pub fn path_from_segments(segments: &[PathSegment], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = segments.split_first() else {
        return path;
    };
    path.move_to(first.point);
    let mut prev = first;
    for segment in rest {
        push_curve(&mut path, prev, segment);
        prev = segment;
    }
    if closed {
        if prev.handle_out != Vec2::ZERO || first.handle_in != Vec2::ZERO {
            push_curve(&mut path, prev, first);
        }
        path.close_path();
    }
    path
}

fn push_curve(path: &mut BezPath, from: &PathSegment, to: &PathSegment) {
    if from.handle_out == Vec2::ZERO && to.handle_in == Vec2::ZERO {
        path.line_to(to.point);
    } else {
        path.curve_to(
            from.point + from.handle_out,
            to.point + to.handle_in,
            to.point,
        );
    }
}

/// Scale `v` to `length`, keeping its direction.
///
/// A zero vector stays zero instead of becoming NaN.
pub fn normalize_to(v: Vec2, length: f64) -> Vec2 {
    let current = v.hypot();
    if current == 0.0 {
        Vec2::ZERO
    } else {
        v * (length / current)
    }
}

/// The six segments of the rounded quad covering a drag from `from` to `to`.
///
/// The quad has straight sides at distance `radius` on both sides of the
/// `from`-`to` line and a rounded cap at each end. The cap behind `from` is
/// anchored at `cap_start`, which is normally equal to `from`; tools pass the
/// position they recorded for the previous sample here.
///
/// The returned segments are in path order, to be closed:
/// `to - perp`, `from - perp`, start cap, `from + perp`, `to + perp`, end cap,
/// where `perp` is the step direction turned by 90 degrees.
///
/// A stationary drag has no step direction. Its straight corners collapse
/// onto the endpoints, while the cap handles fall back to the +x axis turned
/// by 90 degrees so they keep length `radius`.
pub fn segment_quad(cap_start: Point, from: Point, to: Point, radius: f64) -> [PathSegment; 6] {
    let step = normalize_to(to - from, radius);
    let perp = step.turn_90();
    let handle = if step == Vec2::ZERO {
        Vec2::new(radius, 0.0).turn_90()
    } else {
        perp
    };
    [
        PathSegment::new(to - perp),
        PathSegment::new(from - perp),
        PathSegment::with_handles(cap_start - step, -handle, handle),
        PathSegment::new(from + perp),
        PathSegment::new(to + perp),
        PathSegment::with_handles(to + step, handle, -handle),
    ]
}
