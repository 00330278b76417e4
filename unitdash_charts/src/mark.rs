// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-neutral marks.
//!
//! A [`Mark`] is one painted primitive with a stable id and a z-index. Renderers sort by
//! `(z_index, id)` for a deterministic paint order.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

use crate::reveal::Reveal;

/// Stable mark identity within a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the text.
    #[default]
    Middle,
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is the top of the text.
    Hanging,
}

/// A filled rectangle, optionally with rounded corners.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Final geometry.
    pub rect: Rect,
    /// Corner radius (`0` for square corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Geometry before the reveal transition, if the rect is revealed.
    pub grow_from: Option<Rect>,
}

/// A stroked circle, optionally dashed to show a single arc segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RingPayload {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// `(dash, gap)` lengths, or `None` for a solid ring.
    pub dash: Option<(f64, f64)>,
    /// `stroke-dashoffset`.
    pub dash_offset: f64,
    /// Rotation of the ring origin in degrees, around `center`.
    pub rotation_deg: f64,
    /// Whether dash ends are rounded.
    pub round_caps: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// An arbitrary path (polygons and rules).
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width (`0` disables the stroke).
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Position before the reveal transition, if the text is revealed.
    pub slide_from: Option<Point>,
}

/// Mark geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Filled rectangle.
    Rect(RectPayload),
    /// Stroked (possibly dashed) circle.
    Ring(RingPayload),
    /// Path.
    Path(PathPayload),
    /// Text.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the geometric bounds, ignoring text (which needs a measurer).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Ring(r) => {
                let half = r.stroke_width * 0.5;
                let extent = r.radius + half;
                Some(Rect::new(
                    r.center.x - extent,
                    r.center.y - extent,
                    r.center.x + extent,
                    r.center.y + extent,
                ))
            }
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A painted primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint.
    pub z_index: i32,
    /// Geometry and paint.
    pub payload: MarkPayload,
    /// Hover text.
    pub tooltip: Option<String>,
    /// Timing of the reveal transition, for marks with `grow_from`/`slide_from` set.
    pub reveal: Option<Reveal>,
}

impl Mark {
    /// Creates a mark without tooltip or reveal.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
            tooltip: None,
            reveal: None,
        }
    }

    /// Attaches hover text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Returns the rect payload, if this is a rect.
    pub fn as_rect(&self) -> Option<&RectPayload> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the ring payload, if this is a ring.
    pub fn as_ring(&self) -> Option<&RingPayload> {
        match &self.payload {
            MarkPayload::Ring(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the text payload, if this is text.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path.
    pub fn as_path(&self) -> Option<&PathPayload> {
        match &self.payload {
            MarkPayload::Path(p) => Some(p),
            _ => None,
        }
    }
}
