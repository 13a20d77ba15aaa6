// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline bookkeeping for multi-outline regions.
//!
//! A stroke that crosses itself is a region with holes: several closed
//! outlines, some nested inside others. Boolean backends do not always emit
//! those outlines with a consistent direction, which makes the non-zero fill
//! rule paint holes and makes the signed path area meaningless. The helpers
//! here classify outlines by nesting depth instead: even depth is an outer
//! edge, odd depth is a hole.

use alloc::vec::Vec;

use kurbo::{BezPath, ParamCurve, PathEl, PathSeg, Shape};

/// Split `path` into its closed outlines, one path per subpath.
pub fn outlines(path: &BezPath) -> Vec<BezPath> {
    let mut out = Vec::new();
    let mut current = BezPath::new();
    for el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !current.elements().is_empty() {
            out.push(core::mem::take(&mut current));
        }
        current.push(*el);
    }
    if !current.elements().is_empty() {
        out.push(current);
    }
    out
}

/// For each outline, how many of the other outlines enclose it.
///
/// Outlines of a boolean result never cross, so testing one point of each
/// outline against the others is enough.
fn nesting_depths(outlines: &[BezPath]) -> Vec<usize> {
    outlines
        .iter()
        .enumerate()
        .map(|(i, outline)| {
            let Some(sample) = outline.segments().next().map(|seg| seg.eval(0.5)) else {
                return 0;
            };
            outlines
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && other.winding(sample) != 0)
                .count()
        })
        .collect()
}

/// Area covered by `path`: outer outlines add, holes subtract.
///
/// Unlike the signed [`Shape::area`], this does not depend on the
/// direction each outline was emitted in.
pub fn covered_area(path: &BezPath) -> f64 {
    let outlines = outlines(path);
    let depths = nesting_depths(&outlines);
    outlines
        .iter()
        .zip(depths)
        .map(|(outline, depth)| {
            let area = outline.area().abs();
            if depth % 2 == 0 { area } else { -area }
        })
        .sum()
}

/// Rewrite `path` so outer outlines have positive area and holes negative.
///
/// The result fills the same region under both the non-zero and the
/// even-odd rule.
pub fn orient_by_nesting(path: &BezPath) -> BezPath {
    let outlines = outlines(path);
    let depths = nesting_depths(&outlines);
    let mut oriented = BezPath::new();
    for (outline, depth) in outlines.iter().zip(depths) {
        let want_positive = depth % 2 == 0;
        if (outline.area() > 0.0) == want_positive {
            oriented.extend(outline.iter());
        } else {
            oriented.extend(reversed(outline).iter());
        }
    }
    oriented
}

/// The same closed outline traversed in the opposite direction.
fn reversed(outline: &BezPath) -> BezPath {
    let segments: Vec<PathSeg> = outline.segments().collect();
    let mut path = BezPath::new();
    let Some(last) = segments.last() else {
        return path;
    };
    path.move_to(last.end());
    for seg in segments.iter().rev() {
        match *seg {
            PathSeg::Line(line) => path.line_to(line.p0),
            PathSeg::Quad(quad) => path.quad_to(quad.p1, quad.p0),
            PathSeg::Cubic(cubic) => path.curve_to(cubic.p2, cubic.p1, cubic.p0),
        }
    }
    path.close_path();
    path
}
