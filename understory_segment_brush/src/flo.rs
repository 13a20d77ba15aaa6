// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`GeometryKernel`] whose boolean union is computed by `flo_curves`.

use alloc::vec::Vec;

use flo_curves::Coord2;
use flo_curves::bezier::path::{SimpleBezierPath, path_add};
use kurbo::{BezPath, PathEl, Point};

use crate::{GeometryKernel, covered_area, orient_by_nesting};

/// Default accuracy passed to `flo_curves` path arithmetic.
pub const DEFAULT_UNION_ACCURACY: f64 = 0.01;

/// Regions below this area are treated as empty by [`FloCurvesKernel::unite`].
const EMPTY_AREA: f64 = 1e-9;

/// Geometry kernel backed by Kurbo for construction and `flo_curves` for union.
///
/// Union works on curved input, but like most curve-aware boolean backends it
/// is most reliable on flattened operands. `flo_curves` does not keep outline
/// directions consistent, so results are reoriented with
/// [`orient_by_nesting`] before they are returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloCurvesKernel {
    accuracy: f64,
}

impl Default for FloCurvesKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl FloCurvesKernel {
    /// A kernel using [`DEFAULT_UNION_ACCURACY`].
    pub const fn new() -> Self {
        Self {
            accuracy: DEFAULT_UNION_ACCURACY,
        }
    }

    /// A kernel using a custom union accuracy.
    pub const fn with_accuracy(accuracy: f64) -> Self {
        Self { accuracy }
    }

    /// The accuracy passed to `flo_curves`.
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl GeometryKernel for FloCurvesKernel {
    fn unite(&self, a: &BezPath, b: &BezPath) -> BezPath {
        if covered_area(b) < EMPTY_AREA {
            return a.clone();
        }
        if covered_area(a) < EMPTY_AREA {
            return b.clone();
        }
        let merged =
            path_add::<SimpleBezierPath>(&to_flo_paths(a), &to_flo_paths(b), self.accuracy);
        from_flo_paths(&merged)
    }
}

fn coord(p: Point) -> Coord2 {
    Coord2(p.x, p.y)
}

fn point(c: Coord2) -> Point {
    Point::new(c.0, c.1)
}

/// Split a Kurbo path into closed `flo_curves` perimeters.
///
/// Every subpath is treated as closed; lines and quadratic curves are
/// converted to equivalent cubics.
fn to_flo_paths(path: &BezPath) -> Vec<SimpleBezierPath> {
    let mut out = Vec::new();
    let mut start = Point::ORIGIN;
    let mut current = Point::ORIGIN;
    let mut curves: Vec<(Coord2, Coord2, Coord2)> = Vec::new();

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                finish_perimeter(&mut out, start, current, &mut curves);
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                curves.push(line_curve(current, p));
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                let c1 = current.lerp(c, 2.0 / 3.0);
                let c2 = p.lerp(c, 2.0 / 3.0);
                curves.push((coord(c1), coord(c2), coord(p)));
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                curves.push((coord(c1), coord(c2), coord(p)));
                current = p;
            }
            PathEl::ClosePath => {
                finish_perimeter(&mut out, start, current, &mut curves);
                current = start;
            }
        }
    }
    finish_perimeter(&mut out, start, current, &mut curves);
    out
}

fn line_curve(from: Point, to: Point) -> (Coord2, Coord2, Coord2) {
    (
        coord(from.lerp(to, 1.0 / 3.0)),
        coord(from.lerp(to, 2.0 / 3.0)),
        coord(to),
    )
}

fn finish_perimeter(
    out: &mut Vec<SimpleBezierPath>,
    start: Point,
    current: Point,
    curves: &mut Vec<(Coord2, Coord2, Coord2)>,
) {
    if curves.is_empty() {
        return;
    }
    if current != start {
        curves.push(line_curve(current, start));
    }
    out.push((coord(start), core::mem::take(curves)));
}

fn from_flo_paths(paths: &[SimpleBezierPath]) -> BezPath {
    let mut path = BezPath::new();
    for (start, curves) in paths {
        if curves.is_empty() {
            continue;
        }
        path.move_to(point(*start));
        for &(c1, c2, end) in curves {
            path.curve_to(point(c1), point(c2), point(end));
        }
        path.close_path();
    }
    orient_by_nesting(&path)
}
