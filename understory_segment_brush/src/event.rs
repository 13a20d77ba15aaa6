// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events delivered to segment tools.

use kurbo::{Point, Vec2};

/// Which pointer button produced an event.
///
/// Mirrors the DOM `MouseEvent.button` index: `0` is the primary button and
/// every other index is ignored by the segment brush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button, a pen tip or a touch.
    #[default]
    Primary,
    /// Auxiliary button, usually the wheel or middle button.
    Auxiliary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Any further button, by its raw index.
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style button index to a [`PointerButton`].
    pub const fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// The DOM-style button index.
    pub const fn index(self) -> u16 {
        match self {
            Self::Primary => 0,
            Self::Auxiliary => 1,
            Self::Secondary => 2,
            Self::Other(index) => index,
        }
    }

    /// Returns `true` for [`PointerButton::Primary`].
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// A sampled pointer event as seen by a segment tool.
///
/// `last_point` is the position of the previous sample of the same gesture and
/// `delta` is always `point - last_point`. For a press, both points coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentEvent {
    /// Current pointer position.
    pub point: Point,
    /// Pointer position of the previous sample.
    pub last_point: Point,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Button that drives the gesture.
    pub button: PointerButton,
}

impl SegmentEvent {
    /// An event moving from `last_point` to `point`.
    pub fn new(last_point: Point, point: Point, button: PointerButton) -> Self {
        Self {
            point,
            last_point,
            delta: point - last_point,
            button,
        }
    }

    /// An event without movement, as delivered on press.
    pub fn at(point: Point, button: PointerButton) -> Self {
        Self::new(point, point, button)
    }

    /// Returns `true` when the event was produced by the primary button.
    pub fn is_primary(&self) -> bool {
        self.button.is_primary()
    }
}
