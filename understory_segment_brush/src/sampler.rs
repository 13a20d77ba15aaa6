// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sampling: turn raw pointer positions into [`SegmentEvent`]s.
//!
//! ## Usage
//!
//! 1) Call [`DragSampler::press`] with the initial position and button.
//! 2) On each pointer move, call [`DragSampler::drag`]. Moves shorter than the
//!    minimum distance are dropped; moves longer than the maximum distance are
//!    split into several events of exactly that length. A single move yields
//!    at most [`MAX_SAMPLES_PER_MOVE`] events; longer moves use a longer step.
//! 3) End the gesture with [`DragSampler::release`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_segment_brush::{DragSampler, PointerButton};
//!
//! let mut sampler = DragSampler::default();
//! sampler.set_distance_bounds(1.0, Some(10.0));
//!
//! sampler.press(Point::new(0.0, 0.0), PointerButton::Primary);
//! assert!(sampler.is_dragging());
//!
//! // A 25 unit move is reported as three samples: 10, 10, then 5.
//! let events = sampler.drag(Point::new(25.0, 0.0));
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[1].last_point, Point::new(10.0, 0.0));
//! assert_eq!(events[2].point, Point::new(25.0, 0.0));
//!
//! // Sub-minimum jitter is dropped.
//! assert!(sampler.drag(Point::new(25.5, 0.0)).is_empty());
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{PointerButton, SegmentEvent};

/// Events produced by a single call to [`DragSampler::drag`].
pub type DragEvents = SmallVec<[SegmentEvent; 4]>;

/// Upper bound on the events one [`DragSampler::drag`] call produces.
pub const MAX_SAMPLES_PER_MOVE: usize = 256;

/// Tracks a drag gesture and resamples it by distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSampler {
    min_distance: f64,
    max_distance: Option<f64>,
    button: Option<PointerButton>,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragSampler {
    /// A sampler that reports every non-zero move unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum and optional maximum distance between samples.
    ///
    /// A negative or non-finite minimum is treated as zero. A maximum that is
    /// not finite or not positive disables splitting, and a maximum below the
    /// minimum is raised to the minimum.
    pub fn set_distance_bounds(&mut self, min_distance: f64, max_distance: Option<f64>) {
        let min_distance = if min_distance.is_finite() {
            min_distance.max(0.0)
        } else {
            0.0
        };
        self.min_distance = min_distance;
        self.max_distance = max_distance
            .filter(|max| max.is_finite() && *max > 0.0)
            .map(|max| max.max(min_distance));
    }

    /// Current minimum distance between samples.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Current maximum distance between samples, if splitting is enabled.
    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// Start a gesture at `pos`, returning the press event.
    ///
    /// A press while a gesture is active restarts it.
    pub fn press(&mut self, pos: Point, button: PointerButton) -> SegmentEvent {
        self.button = Some(button);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        SegmentEvent::at(pos, button)
    }

    /// Feed a pointer move, returning the samples it produces.
    ///
    /// When the move would need more than [`MAX_SAMPLES_PER_MOVE`] steps of
    /// the maximum distance, the step grows so the move still ends in that
    /// many events. Returns no events when no gesture is active.
    pub fn drag(&mut self, pos: Point) -> DragEvents {
        let mut events = DragEvents::new();
        let (Some(mut last), Some(button)) = (self.last_pos, self.button) else {
            return events;
        };
        let floor = (pos - last).hypot() / MAX_SAMPLES_PER_MOVE as f64;
        let step = self.max_distance.map(|max| max.max(floor));
        loop {
            let vector = pos - last;
            let distance = vector.hypot();
            if distance == 0.0 || distance < self.min_distance {
                break;
            }
            let next = match step {
                Some(step) if distance > step && events.len() + 1 < MAX_SAMPLES_PER_MOVE => {
                    last + vector * (step / distance)
                }
                _ => pos,
            };
            events.push(SegmentEvent::new(last, next, button));
            last = next;
        }
        self.last_pos = Some(last);
        events
    }

    /// End the gesture at `pos`, returning the release event.
    ///
    /// The release event spans from the last reported sample to `pos`.
    /// Returns `None` when no gesture is active.
    pub fn release(&mut self, pos: Point) -> Option<SegmentEvent> {
        let last = self.last_pos?;
        let button = self.button?;
        self.end();
        Some(SegmentEvent::new(last, pos, button))
    }

    /// Abandon the current gesture without producing an event.
    pub fn end(&mut self) {
        self.button = None;
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Position of the last reported sample.
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Offset of `current_pos` from the gesture start.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }
}
