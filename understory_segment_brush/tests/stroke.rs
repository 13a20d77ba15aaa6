// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end strokes built with the `flo_curves` kernel.
//!
//! These drive a [`SegmentBrushTool`] through a [`BasicHost`] the way an
//! editor would and check the shape of the finished region.

#![cfg(feature = "flo_curves")]

use kurbo::{BezPath, Point, Shape};
use understory_segment_brush::{
    BasicHost, BrushOptions, BrushStroke, FloCurvesKernel, PathStyle, PointerButton,
    SegmentBrush, SegmentBrushTool, SegmentTool, covered_area,
};

fn tool(size: f64) -> SegmentBrushTool<FloCurvesKernel> {
    let options = BrushOptions::new(size).unwrap();
    SegmentBrushTool::new(SegmentBrush::new(FloCurvesKernel::new(), options).unwrap())
}

/// Press at the first point, drag through the rest, release at the last.
fn draw(tool: &mut SegmentBrushTool<FloCurvesKernel>, points: &[Point]) -> BrushStroke {
    let mut host = BasicHost::new(PathStyle::default());
    let press = host.press(points[0], PointerButton::Primary);
    tool.on_segment_mouse_down(&mut host, &press);
    for &point in &points[1..] {
        for event in host.drag(point) {
            tool.on_segment_mouse_drag(&event);
        }
    }
    let release = host.release(points[points.len() - 1]).unwrap();
    tool.on_segment_mouse_up(&release).unwrap()
}

/// Area the region covers, with holes subtracted.
fn region_area(path: &BezPath) -> f64 {
    covered_area(path)
}

/// A square loop that crosses its own start, enclosing an unpainted middle.
const LOOP: [Point; 5] = [
    Point::new(0.0, 0.0),
    Point::new(60.0, 0.0),
    Point::new(60.0, 60.0),
    Point::new(0.0, 60.0),
    Point::new(0.0, -10.0),
];

#[test]
fn vertical_drag_yields_stadium() {
    let mut tool = tool(10.0);
    let stroke = draw(&mut tool, &[Point::new(0.0, 0.0), Point::new(0.0, 20.0)]);

    assert_eq!(stroke.segment_count, 2);
    assert_eq!(stroke.style, PathStyle::default());

    // About 10 wide and 20 + 10 long, within the simplification tolerance.
    let bbox = stroke.path.bounding_box();
    assert!((bbox.width() - 10.0).abs() < 2.5, "width was {}", bbox.width());
    assert!((bbox.height() - 30.0).abs() < 2.5, "height was {}", bbox.height());
    assert!((bbox.center() - Point::new(0.0, 10.0)).hypot() < 2.5);

    // A 10 x 20 rectangle plus two round caps is about 280.
    let area = region_area(&stroke.path);
    assert!(area > 180.0 && area < 330.0, "area was {area}");
}

#[test]
fn each_drag_step_keeps_or_grows_the_region() {
    let mut tool = tool(8.0);
    let mut host = BasicHost::default();
    let press = host.press(Point::new(0.0, 0.0), PointerButton::Primary);
    tool.on_segment_mouse_down(&mut host, &press);

    let mut area = region_area(tool.session().unwrap().path());
    for point in [
        Point::new(6.0, 0.0),
        Point::new(12.0, 3.0),
        Point::new(17.0, 9.0),
        Point::new(20.0, 16.0),
    ] {
        for event in host.drag(point) {
            tool.on_segment_mouse_drag(&event);
            let next = region_area(tool.session().unwrap().path());
            assert!(next + 1e-6 >= area, "area shrank from {area} to {next}");
            area = next;
        }
    }
}

#[test]
fn looping_stroke_leaves_its_middle_unpainted() {
    let mut tool = tool(8.0);
    let stroke = draw(&mut tool, &LOOP);

    // Painted band on every side of the loop.
    for point in [
        Point::new(30.0, 0.0),
        Point::new(60.0, 30.0),
        Point::new(30.0, 60.0),
        Point::new(0.0, 30.0),
    ] {
        assert_ne!(stroke.path.winding(point), 0, "{point:?} is not painted");
    }
    // The enclosed middle is a hole under the non-zero rule.
    assert_eq!(stroke.path.winding(Point::new(30.0, 30.0)), 0);

    // Outlines are oriented, so the signed area already subtracts the hole.
    let covered = region_area(&stroke.path);
    assert!(
        (stroke.path.area() - covered).abs() < 1.0,
        "signed area {} differs from covered area {covered}",
        stroke.path.area()
    );
    // About four 8 wide sides of a 60 square, well below the filled square.
    assert!(covered > 1500.0 && covered < 2600.0, "area was {covered}");
}

#[test]
fn closing_a_loop_keeps_the_region_growing() {
    let mut tool = tool(8.0);
    let mut host = BasicHost::default();
    let press = host.press(LOOP[0], PointerButton::Primary);
    tool.on_segment_mouse_down(&mut host, &press);

    let mut area = region_area(tool.session().unwrap().path());
    for &point in &LOOP[1..] {
        for event in host.drag(point) {
            tool.on_segment_mouse_drag(&event);
            let next = region_area(tool.session().unwrap().path());
            assert!(next + 0.5 >= area, "area shrank from {area} to {next}");
            area = next;
        }
    }
    let path = tool.session().unwrap().path();
    assert_eq!(path.winding(Point::new(30.0, 30.0)), 0);
}

#[test]
fn press_and_release_leaves_a_dot() {
    let mut tool = tool(6.0);
    let stroke = draw(&mut tool, &[Point::new(5.0, 5.0)]);

    assert_eq!(stroke.segment_count, 0);
    let bbox = stroke.path.bounding_box();
    assert!((bbox.width() - 6.0).abs() < 2.0);
    assert!((bbox.center() - Point::new(5.0, 5.0)).hypot() < 1.0);
}

#[test]
fn secondary_button_draws_nothing() {
    let mut tool = tool(10.0);
    let mut host = BasicHost::default();
    let press = host.press(Point::new(0.0, 0.0), PointerButton::Secondary);
    tool.on_segment_mouse_down(&mut host, &press);
    for event in host.drag(Point::new(30.0, 0.0)) {
        tool.on_segment_mouse_drag(&event);
    }
    let release = host.release(Point::new(30.0, 0.0)).unwrap();

    assert!(tool.session().is_none());
    assert_eq!(tool.on_segment_mouse_up(&release), None);
}
