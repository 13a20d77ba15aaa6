// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_segment_brush --heading-base-level=0

//! Understory Segment Brush: a broad-brush stroke tool for vector editors.
//!
//! A segment brush turns a pointer drag into a single filled region. The
//! press stamps a circle as wide as the brush. Every drag sample then adds a
//! rounded quad spanning the previous and current pointer positions, and the
//! quad is merged into the accumulated region with a boolean union. On
//! release the region is simplified and handed to the caller.
//!
//! Unlike stroking a polyline, the result never self-intersects and sharp
//! reversals still get rounded tips.
//!
//! ## Pieces
//!
//! - [`SegmentBrush`]: the three handlers, as functions over an explicit
//!   [`StrokeSession`] that is created on press and consumed on release.
//! - [`SegmentBrushTool`]: a brush plus its session behind the
//!   [`SegmentTool`] handler trait.
//! - [`GeometryKernel`]: the geometry service a brush builds with. Circles,
//!   flattening and simplification default to Kurbo; union is supplied by the
//!   kernel, e.g. `FloCurvesKernel` (feature `flo_curves`).
//! - [`ToolHost`], [`DragSampler`], [`BasicHost`]: the host side, which
//!   samples raw pointer input into [`SegmentEvent`]s and provides the style
//!   of new strokes.
//!
//! ## Minimal example
//!
//! ```rust
//! # #[cfg(feature = "flo_curves")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_segment_brush::{
//!     BasicHost, BrushOptions, FloCurvesKernel, PathStyle, PointerButton, SegmentBrush,
//! };
//!
//! let options = BrushOptions::new(10.0).unwrap();
//! let brush = SegmentBrush::new(FloCurvesKernel::new(), options).unwrap();
//! let mut host = BasicHost::new(PathStyle::default());
//!
//! let press = host.press(Point::new(0.0, 0.0), PointerButton::Primary);
//! let mut session = brush.on_mouse_down(&mut host, &press).unwrap();
//!
//! // The press limited the host's sample spacing to one brush width.
//! for event in host.drag(Point::new(0.0, 20.0)) {
//!     session = brush.on_mouse_drag(session, &event);
//! }
//!
//! let release = host.release(Point::new(0.0, 20.0)).unwrap();
//! let stroke = brush.on_mouse_up(session, &release).finished().unwrap();
//! assert_eq!(stroke.segment_count, 2);
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Peniko with the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `flo_curves` (default): enable `FloCurvesKernel`. Requires `std`.
//!
//! Without `flo_curves` this crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod brush;
mod error;
mod event;
mod host;
mod kernel;
mod options;
mod outline;
mod sampler;
mod style;

#[cfg(feature = "flo_curves")]
mod flo;

pub mod segment;

pub use brush::{BrushStroke, ReleaseOutcome, SegmentBrush, SegmentBrushTool, SegmentTool, StrokeSession};
pub use error::BrushError;
pub use event::{PointerButton, SegmentEvent};
pub use host::{BasicHost, ToolHost};
pub use kernel::{CIRCLE_TOLERANCE, GeometryKernel};
pub use options::BrushOptions;
pub use outline::{covered_area, orient_by_nesting, outlines};
pub use sampler::{DragEvents, DragSampler, MAX_SAMPLES_PER_MOVE};
pub use segment::PathSegment;
pub use style::PathStyle;

#[cfg(feature = "flo_curves")]
pub use flo::{DEFAULT_UNION_ACCURACY, FloCurvesKernel};
