// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_segment_brush::{
    BasicHost, BrushOptions, FloCurvesKernel, GeometryKernel, PointerButton, SegmentBrush,
    SegmentBrushTool, SegmentEvent, SegmentTool,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// A wandering pointer path: `n` moves of up to `max_step` in each axis.
fn wander(n: usize, max_step: f64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut p = Point::ORIGIN;
    let mut points = vec![p];
    for _ in 0..n {
        p.x += (rng.next_unit() - 0.3) * max_step;
        p.y += (rng.next_unit() - 0.5) * max_step;
        points.push(p);
    }
    points
}

fn tool(size: f64) -> SegmentBrushTool<FloCurvesKernel> {
    let options = BrushOptions::new(size).expect("valid brush size");
    SegmentBrushTool::new(
        SegmentBrush::new(FloCurvesKernel::new(), options).expect("valid options"),
    )
}

fn bench_quad(c: &mut Criterion) {
    let brush = SegmentBrush::new(FloCurvesKernel::new(), BrushOptions::default())
        .expect("default options are valid");
    let event = SegmentEvent::new(
        Point::new(0.0, 0.0),
        Point::new(7.0, 3.0),
        PointerButton::Primary,
    );
    c.bench_function("segment_brush/quad_build_and_flatten", |b| {
        b.iter(|| {
            let quad = brush.segment_path(black_box(Point::ORIGIN), black_box(&event));
            black_box(brush.kernel().flatten(&quad, brush.options().flatten_tolerance()))
        });
    });
}

fn bench_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_brush/stroke");
    for &moves in &[8_usize, 32, 128] {
        let points = wander(moves, 12.0, 0x5eed);
        group.bench_function(format!("moves_{moves}"), |b| {
            b.iter_batched(
                || (tool(10.0), BasicHost::default()),
                |(mut tool, mut host)| {
                    let press = host.press(points[0], PointerButton::Primary);
                    tool.on_segment_mouse_down(&mut host, &press);
                    for &p in &points[1..] {
                        for event in host.drag(p) {
                            tool.on_segment_mouse_drag(&event);
                        }
                    }
                    let release = host
                        .release(points[points.len() - 1])
                        .expect("gesture is active");
                    black_box(tool.on_segment_mouse_up(&release))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quad, bench_stroke);
criterion_main!(benches);
