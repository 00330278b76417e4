// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Land and forest distribution rings.
//!
//! Two concentric rings with independent budgets: the outer ring splits the unit by land
//! type (shares meant to sum to 100%), the inner ring shows forest cover on its own 0-100%
//! scale with its own rotation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use unitdash_core::{ArcSegmenter, Segment};

use crate::legend::{LegendItem, LegendRowSpec};
use crate::mark::MarkId;
use crate::measure::TextMeasurer;
use crate::palette;
use crate::panel::Panel;
use crate::ring_mark::RingMarkSpec;

/// Land split specification.
#[derive(Clone, Debug)]
pub struct LandSplitSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Outer ring shares (e.g. plains, mountains).
    pub land: Vec<Segment>,
    /// Inner ring overlay (e.g. forest).
    pub overlay: Segment,
    /// Outer ring radius.
    pub outer_radius: f64,
    /// Inner ring radius.
    pub inner_radius: f64,
    /// Outer ring stroke width.
    pub outer_width: f64,
    /// Inner ring stroke width.
    pub inner_width: f64,
    /// Outer ring origin in degrees (-90 is 12 o'clock).
    pub outer_rotation: f64,
    /// Inner ring origin in degrees.
    pub inner_rotation: f64,
}

impl LandSplitSpec {
    const SIZE: f64 = 200.0;
    const LEGEND_HEIGHT: f64 = 30.0;

    /// Creates a spec with the default ring geometry.
    pub fn new(id_base: u64, land: Vec<Segment>, overlay: Segment) -> Self {
        Self {
            id_base,
            land,
            overlay,
            outer_radius: 80.0,
            inner_radius: 65.0,
            outer_width: 18.0,
            inner_width: 6.0,
            outer_rotation: -90.0,
            inner_rotation: -80.0,
        }
    }

    /// Builds the panel.
    pub fn panel(&self, measurer: &dyn TextMeasurer) -> Panel {
        let view = Rect::new(0.0, 0.0, Self::SIZE, Self::SIZE + Self::LEGEND_HEIGHT);
        let mut panel = Panel::new(view).with_title("Land & Forest Distribution");
        let center = Point::new(Self::SIZE * 0.5, Self::SIZE * 0.5);
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        panel.push(
            RingMarkSpec::track(id(0), center, self.outer_radius)
                .with_stroke(palette::TRACK, 12.0)
                .with_opacity(0.5)
                .mark(),
        );
        let outer = ArcSegmenter::new(self.outer_radius).segments(&self.land);
        for (i, arc) in outer.iter().enumerate() {
            panel.push(
                RingMarkSpec::segment(id(10 + i as u64), center, self.outer_radius, arc)
                    .with_stroke_width(self.outer_width)
                    .with_rotation(self.outer_rotation)
                    .with_round_caps()
                    .mark(),
            );
        }

        panel.push(
            RingMarkSpec::track(id(1), center, self.inner_radius)
                .with_stroke(palette::TRACK, self.inner_width)
                .with_opacity(0.4)
                .mark(),
        );
        let inner = ArcSegmenter::new(self.inner_radius).segments(core::slice::from_ref(&self.overlay));
        for arc in &inner {
            panel.push(
                RingMarkSpec::segment(id(2), center, self.inner_radius, arc)
                    .with_stroke_width(self.inner_width)
                    .with_rotation(self.inner_rotation)
                    .with_round_caps()
                    .mark(),
            );
        }

        let items = self
            .land
            .iter()
            .chain(core::iter::once(&self.overlay))
            .map(|s| {
                LegendItem::solid(s.label.clone(), s.color)
                    .with_value(alloc::format!("{}%", s.percentage))
            })
            .collect();
        panel.extend(LegendRowSpec::new(self.id_base + 100, items).marks(
            measurer,
            Point::new(Self::SIZE * 0.5, Self::SIZE + Self::LEGEND_HEIGHT * 0.5),
        ));

        panel
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::Brush;
    use peniko::color::palette::css;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn spec() -> LandSplitSpec {
        LandSplitSpec::new(
            0,
            vec![
                Segment::new("Plains", 60.0, css::ORANGE),
                Segment::new("Mountains", 40.0, css::GRAY),
            ],
            Segment::new("Forest", 45.0, css::SEA_GREEN),
        )
    }

    #[test]
    fn outer_segments_are_contiguous_and_rotated_to_twelve_o_clock() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let plains = panel.mark(MarkId::from_raw(10)).expect("plains").as_ring().expect("ring");
        let mountains = panel.mark(MarkId::from_raw(11)).expect("mountains").as_ring().expect("ring");
        let (plains_dash, _) = plains.dash.expect("dashed");
        assert_eq!(plains.dash_offset, 0.0);
        assert!((mountains.dash_offset + plains_dash).abs() < 1e-9);
        assert_eq!(plains.rotation_deg, -90.0);
        assert_eq!(plains.stroke, Brush::Solid(css::ORANGE));
    }

    #[test]
    fn overlay_ring_has_its_own_budget_and_rotation() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let forest = panel.mark(MarkId::from_raw(2)).expect("forest").as_ring().expect("ring");
        let (dash, gap) = forest.dash.expect("dashed");
        let c = core::f64::consts::TAU * 65.0;
        assert!((dash - 0.45 * c).abs() < 1e-9);
        assert!((dash + gap - c).abs() < 1e-9);
        assert_eq!(forest.dash_offset, 0.0);
        assert_eq!(forest.rotation_deg, -80.0);
    }

    #[test]
    fn legend_lists_every_share_with_its_percentage() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let values: Vec<&str> = panel
            .marks
            .iter()
            .filter_map(|m| m.as_text())
            .filter(|t| t.bold)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(values, ["60%", "40%", "45%"]);
    }
}
