// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segment brush: per-sample rounded quads merged into one stroke region.
//!
//! [`SegmentBrush`] exposes the three handlers as pure functions over an
//! explicit [`StrokeSession`]: the session is created on press, moved through
//! every drag, and consumed on release. [`SegmentBrushTool`] wraps a brush and
//! its optional session behind the [`SegmentTool`] handler trait for hosts
//! that dispatch events to stateful tools.

use kurbo::{BezPath, Point};

use crate::segment::segment_quad;
use crate::{
    BrushError, BrushOptions, GeometryKernel, PathStyle, SegmentEvent, ToolHost, covered_area,
};

/// Area loss tolerated between union steps before it is reported.
const AREA_LOSS_TOLERANCE: f64 = 1e-6;

/// State of a stroke in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeSession {
    last_point: Point,
    path: BezPath,
    style: PathStyle,
    segment_count: usize,
}

impl StrokeSession {
    /// Pointer position of the last merged sample.
    pub fn last_point(&self) -> Point {
        self.last_point
    }

    /// The region accumulated so far.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Style recorded when the stroke started.
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Number of drag samples merged into the region.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}

/// A finished stroke, owned by the caller once released.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushStroke {
    /// The simplified stroke region.
    pub path: BezPath,
    /// Style recorded when the stroke started.
    pub style: PathStyle,
    /// Number of drag samples merged into the region.
    pub segment_count: usize,
}

/// Result of [`SegmentBrush::on_mouse_up`].
#[derive(Clone, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// The stroke ended and its path was finalized.
    Finished(BrushStroke),
    /// The event was not for this stroke; the session is handed back as is.
    Ignored(StrokeSession),
}

impl ReleaseOutcome {
    /// The finished stroke, if the release ended it.
    pub fn finished(self) -> Option<BrushStroke> {
        match self {
            Self::Finished(stroke) => Some(stroke),
            Self::Ignored(_) => None,
        }
    }
}

/// Builds broad-brush strokes by uniting a rounded quad per drag sample.
///
/// Each handler ignores events from any button but the primary one.
#[derive(Clone, Debug)]
pub struct SegmentBrush<K> {
    kernel: K,
    options: BrushOptions,
}

impl<K: GeometryKernel> SegmentBrush<K> {
    /// Create a brush, validating `options`.
    pub fn new(kernel: K, options: BrushOptions) -> Result<Self, BrushError> {
        options.validate()?;
        Ok(Self { kernel, options })
    }

    /// The geometry kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Current options.
    pub fn options(&self) -> &BrushOptions {
        &self.options
    }

    /// Replace the options. Invalid options are rejected and the old ones kept.
    pub fn set_options(&mut self, options: BrushOptions) -> Result<(), BrushError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Change only the brush size.
    pub fn set_brush_size(&mut self, brush_size: f64) -> Result<(), BrushError> {
        self.options.set_brush_size(brush_size)
    }

    /// Start a stroke.
    ///
    /// Configures the host's sampling distances, then returns a session whose
    /// region is a circle of diameter `brush_size` around the event point,
    /// styled with the host's current stroke style.
    pub fn on_mouse_down<H: ToolHost + ?Sized>(
        &self,
        host: &mut H,
        event: &SegmentEvent,
    ) -> Option<StrokeSession> {
        if !event.is_primary() {
            return None;
        }
        host.set_distance_bounds(self.options.min_distance, Some(self.options.max_distance()));
        let path = self.kernel.circle(event.point, self.options.radius());
        log::debug!(
            "segment brush stroke started at {:?} with size {}",
            event.point,
            self.options.brush_size
        );
        Some(StrokeSession {
            last_point: event.point,
            path,
            style: host.stroke_style(),
            segment_count: 0,
        })
    }

    /// Merge one drag sample into the stroke.
    pub fn on_mouse_drag(&self, mut session: StrokeSession, event: &SegmentEvent) -> StrokeSession {
        if !event.is_primary() {
            return session;
        }
        let quad = self.segment_path(session.last_point, event);
        // Union on curved operands is unreliable in boolean backends.
        let quad = self.kernel.flatten(&quad, self.options.flatten_tolerance());
        session.last_point = event.point;

        let merged = self.kernel.unite(&session.path, &quad);
        let previous_area = covered_area(&session.path);
        let merged_area = covered_area(&merged);
        if merged_area + AREA_LOSS_TOLERANCE < previous_area {
            log::warn!(
                "segment union lost area ({previous_area} -> {merged_area}) at {:?}",
                event.point
            );
        }
        session.path = merged;
        session.segment_count += 1;
        log::trace!(
            "merged segment {} ending at {:?}",
            session.segment_count,
            event.point
        );
        session
    }

    /// Finish the stroke, simplifying the accumulated region.
    pub fn on_mouse_up(&self, session: StrokeSession, event: &SegmentEvent) -> ReleaseOutcome {
        if !event.is_primary() {
            return ReleaseOutcome::Ignored(session);
        }
        let path = self
            .kernel
            .simplify(&session.path, self.options.simplify_tolerance);
        log::debug!(
            "segment brush stroke finished after {} segments",
            session.segment_count
        );
        ReleaseOutcome::Finished(BrushStroke {
            path,
            style: session.style,
            segment_count: session.segment_count,
        })
    }

    /// The unflattened rounded quad for a drag sample.
    ///
    /// `cap_start` anchors the cap behind the sample's previous point; pass
    /// the session's [`last_point`](StrokeSession::last_point).
    pub fn segment_path(&self, cap_start: Point, event: &SegmentEvent) -> BezPath {
        let segments = segment_quad(
            cap_start,
            event.last_point,
            event.point,
            self.options.radius(),
        );
        self.kernel.path_from_segments(&segments, true)
    }
}

/// Handlers a host installs for a segment-based drawing tool.
pub trait SegmentTool {
    /// Pointer pressed.
    fn on_segment_mouse_down(&mut self, host: &mut dyn ToolHost, event: &SegmentEvent);

    /// Pointer dragged, once per sample.
    fn on_segment_mouse_drag(&mut self, event: &SegmentEvent);

    /// Pointer released. Returns the finished path, if any.
    fn on_segment_mouse_up(&mut self, event: &SegmentEvent) -> Option<BrushStroke>;
}

/// A [`SegmentBrush`] together with the session of its current stroke.
#[derive(Clone, Debug)]
pub struct SegmentBrushTool<K> {
    brush: SegmentBrush<K>,
    session: Option<StrokeSession>,
}

impl<K: GeometryKernel> SegmentBrushTool<K> {
    /// A tool with no stroke in progress.
    pub fn new(brush: SegmentBrush<K>) -> Self {
        Self {
            brush,
            session: None,
        }
    }

    /// The wrapped brush.
    pub fn brush(&self) -> &SegmentBrush<K> {
        &self.brush
    }

    /// Mutable access to the wrapped brush, e.g. to change its size.
    pub fn brush_mut(&mut self) -> &mut SegmentBrush<K> {
        &mut self.brush
    }

    /// The stroke in progress, if any.
    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    /// Drop the stroke in progress without finishing it.
    pub fn cancel(&mut self) -> Option<StrokeSession> {
        self.session.take()
    }
}

impl<K: GeometryKernel> SegmentTool for SegmentBrushTool<K> {
    fn on_segment_mouse_down(&mut self, host: &mut dyn ToolHost, event: &SegmentEvent) {
        if let Some(session) = self.brush.on_mouse_down(host, event) {
            if self.session.is_some() {
                log::debug!("segment brush press replaced an unfinished stroke");
            }
            self.session = Some(session);
        }
    }

    fn on_segment_mouse_drag(&mut self, event: &SegmentEvent) {
        match self.session.take() {
            Some(session) => self.session = Some(self.brush.on_mouse_drag(session, event)),
            None => log::debug!("segment brush drag without an active stroke"),
        }
    }

    fn on_segment_mouse_up(&mut self, event: &SegmentEvent) -> Option<BrushStroke> {
        let Some(session) = self.session.take() else {
            log::debug!("segment brush release without an active stroke");
            return None;
        };
        match self.brush.on_mouse_up(session, event) {
            ReleaseOutcome::Finished(stroke) => Some(stroke),
            ReleaseOutcome::Ignored(session) => {
                self.session = Some(session);
                None
            }
        }
    }
}
