// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resident share donut.

extern crate alloc;

use kurbo::{Point, Rect};
use unitdash_core::{ArcSegmenter, Segment};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::palette;
use crate::panel::{Panel, Size};
use crate::ring_mark::RingMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A single-segment donut with the share printed in its hole.
#[derive(Clone, Copy, Debug)]
pub struct ResidentDonutSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Resident share in percent.
    pub percentage: f64,
    /// Ring radius.
    pub radius: f64,
    /// Ring stroke width.
    pub stroke_width: f64,
}

impl ResidentDonutSpec {
    const VIEW: f64 = 100.0;

    /// Creates a donut with the default geometry (`r = 45`, width `8`).
    pub fn new(id_base: u64, percentage: f64) -> Self {
        Self {
            id_base,
            percentage,
            radius: 45.0,
            stroke_width: 8.0,
        }
    }

    /// Builds the panel.
    pub fn panel(&self) -> Panel {
        let view = Rect::new(0.0, 0.0, Self::VIEW, Self::VIEW);
        let mut panel = Panel::new(view)
            .with_title("Resident Share")
            .with_display(Size::new(224.0, 224.0));
        let center = view.center();
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        panel.push(
            RingMarkSpec::track(id(0), center, self.radius)
                .with_stroke(palette::TRACK_DARK, self.stroke_width)
                .mark(),
        );
        let arcs = ArcSegmenter::new(self.radius).segments(&[Segment::new(
            "Resident",
            self.percentage,
            palette::BLUE_500,
        )]);
        for arc in &arcs {
            panel.push(
                RingMarkSpec::segment(id(1), center, self.radius, arc)
                    .with_stroke_width(self.stroke_width)
                    .with_rotation(-90.0)
                    .with_round_caps()
                    .mark(),
            );
        }

        panel.push(
            TextMarkSpec::new(
                id(2),
                Point::new(center.x, center.y - 3.0),
                alloc::format!("{}%", self.percentage),
            )
            .with_font_size(16.0)
            .bold()
            .with_fill(palette::BLUE_700)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::VALUE_LABELS)
            .mark(),
        );
        panel.push(
            TextMarkSpec::new(id(3), Point::new(center.x, center.y + 4.0), "Resident")
                .with_font_size(6.0)
                .bold()
                .with_fill(palette::BODY_TEXT)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Hanging)
                .mark(),
        );
        panel
    }
}
