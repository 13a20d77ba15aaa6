// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The part of the host editor that a segment tool talks to.

use kurbo::Point;

use crate::{DragEvents, DragSampler, PathStyle, PointerButton, SegmentEvent};

/// Services a host editor provides to a segment tool.
pub trait ToolHost {
    /// Configure how the host samples pointer moves into drag events.
    ///
    /// Moves shorter than `min_distance` should be dropped and moves longer
    /// than `max_distance` split; see [`DragSampler`].
    fn set_distance_bounds(&mut self, min_distance: f64, max_distance: Option<f64>);

    /// The style new strokes should carry.
    fn stroke_style(&self) -> PathStyle;
}

/// A minimal [`ToolHost`]: a [`DragSampler`] plus a current stroke style.
///
/// Feed raw pointer input through [`press`](Self::press),
/// [`drag`](Self::drag) and [`release`](Self::release), and hand the
/// resulting events to a tool.
#[derive(Clone, Debug, Default)]
pub struct BasicHost {
    /// Sampler whose bounds the tool configures.
    pub sampler: DragSampler,
    /// Style handed to new strokes.
    pub style: PathStyle,
}

impl BasicHost {
    /// A host with an unbounded sampler and the given style.
    pub fn new(style: PathStyle) -> Self {
        Self {
            sampler: DragSampler::new(),
            style,
        }
    }

    /// See [`DragSampler::press`].
    pub fn press(&mut self, pos: Point, button: PointerButton) -> SegmentEvent {
        self.sampler.press(pos, button)
    }

    /// See [`DragSampler::drag`].
    pub fn drag(&mut self, pos: Point) -> DragEvents {
        self.sampler.drag(pos)
    }

    /// See [`DragSampler::release`].
    pub fn release(&mut self, pos: Point) -> Option<SegmentEvent> {
        self.sampler.release(pos)
    }
}

impl ToolHost for BasicHost {
    fn set_distance_bounds(&mut self, min_distance: f64, max_distance: Option<f64>) {
        self.sampler.set_distance_bounds(min_distance, max_distance);
    }

    fn stroke_style(&self) -> PathStyle {
        self.style.clone()
    }
}
