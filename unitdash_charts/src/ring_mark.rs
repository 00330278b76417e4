// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring (stroked circle) mark generation.
//!
//! Donut charts are drawn as one stroked circle per segment. Each circle's dash pattern shows
//! a single dash (see [`unitdash_core::ArcSegmenter`]); the whole ring is rotated so the
//! pattern starts at the desired angle (-90 degrees is 12 o'clock).

use kurbo::Point;
use peniko::Brush;
use unitdash_core::ArcSegment;

use crate::mark::{Mark, MarkId, MarkPayload, RingPayload};
use crate::z_order;

/// A ring mark spec.
#[derive(Clone, Debug)]
pub struct RingMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in panel coordinates.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// `(dash, gap)`, or `None` for a full ring.
    pub dash: Option<(f64, f64)>,
    /// `stroke-dashoffset`.
    pub dash_offset: f64,
    /// Rotation of the ring origin in degrees.
    pub rotation_deg: f64,
    /// Rounded dash ends.
    pub round_caps: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RingMarkSpec {
    /// Creates a full (undashed) ring, suitable as a background track.
    pub fn track(id: MarkId, center: Point, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            stroke: Brush::default(),
            stroke_width: 1.0,
            dash: None,
            dash_offset: 0.0,
            rotation_deg: 0.0,
            round_caps: false,
            opacity: 1.0,
            z_index: z_order::PANEL_BACKGROUND,
        }
    }

    /// Creates a ring showing one arc segment.
    pub fn segment(id: MarkId, center: Point, radius: f64, arc: &ArcSegment) -> Self {
        Self {
            stroke: Brush::Solid(arc.color),
            dash: Some((arc.dash, arc.gap)),
            dash_offset: arc.dash_offset(),
            z_index: z_order::SERIES_STROKE,
            ..Self::track(id, center, radius)
        }
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets only the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the ring rotation in degrees.
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Rounds dash ends.
    pub fn with_round_caps(mut self) -> Self {
        self.round_caps = true;
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Ring(RingPayload {
                center: self.center,
                radius: self.radius,
                stroke: self.stroke.clone(),
                stroke_width: self.stroke_width,
                dash: self.dash,
                dash_offset: self.dash_offset,
                rotation_deg: self.rotation_deg,
                round_caps: self.round_caps,
                opacity: self.opacity,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use unitdash_core::{ArcSegmenter, Segment};

    use super::*;

    #[test]
    fn segment_rings_carry_dash_geometry() {
        let arcs = ArcSegmenter::new(80.0).segments(&[
            Segment::new("Plains", 60.0, css::ORANGE),
            Segment::new("Mountains", 40.0, css::GRAY),
        ]);
        let mark = RingMarkSpec::segment(MarkId::from_raw(2), Point::new(100.0, 100.0), 80.0, &arcs[1])
            .with_stroke_width(18.0)
            .with_rotation(-90.0)
            .mark();

        let ring = mark.as_ring().expect("ring payload");
        assert_eq!(ring.dash, Some((arcs[1].dash, arcs[1].gap)));
        assert_eq!(ring.dash_offset, -arcs[0].dash);
        assert_eq!(ring.rotation_deg, -90.0);
        assert_eq!(ring.stroke, Brush::Solid(css::GRAY));
        assert_eq!(mark.z_index, z_order::SERIES_STROKE);
    }

    #[test]
    fn tracks_are_undashed_background_rings() {
        let mark = RingMarkSpec::track(MarkId::from_raw(1), Point::ZERO, 45.0).mark();
        let ring = mark.as_ring().expect("ring payload");
        assert_eq!(ring.dash, None);
        assert_eq!(mark.z_index, z_order::PANEL_BACKGROUND);
    }
}
