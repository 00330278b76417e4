// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elevation range chart.
//!
//! A vertical gauge from `0` to the maximum elevation with the unit's elevation band
//! highlighted. The y axis is inverted: higher elevations sit closer to the top.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use unitdash_core::{ProportionMapper, ValueRange, group_thousands};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::palette;
use crate::panel::{Panel, Size};
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Elevation gauge specification.
#[derive(Clone, Debug)]
pub struct ElevationChartSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Top of the gauge in feet.
    pub max_elevation: u32,
    /// Lowest point of the unit in feet.
    pub low: u32,
    /// Highest point of the unit in feet.
    pub high: u32,
    /// Tick elevations in feet, in display order.
    pub ticks: Vec<u32>,
    /// Gauge height in panel units.
    pub plot_height: f64,
}

impl ElevationChartSpec {
    const LABEL_COLUMN: f64 = 64.0;
    const BAR_WIDTH: f64 = 40.0;
    const PAD: f64 = 6.0;

    /// Creates a gauge with ticks every 2,000 ft plus the maximum.
    pub fn new(id_base: u64, max_elevation: u32, low: u32, high: u32) -> Self {
        let mut ticks = alloc::vec![max_elevation];
        ticks.extend((0..=max_elevation / 2_000).rev().map(|i| i * 2_000));
        ticks.dedup();
        Self {
            id_base,
            max_elevation,
            low,
            high,
            ticks,
            plot_height: 160.0,
        }
    }

    /// Replaces the tick elevations.
    pub fn with_ticks(mut self, ticks: Vec<u32>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Returns the y coordinate of an elevation.
    pub fn y(&self, elevation: u32) -> f64 {
        ProportionMapper::inverted(f64::from(self.max_elevation), self.plot_height)
            .map(f64::from(elevation))
    }

    /// Builds the panel.
    pub fn panel(&self) -> Panel {
        let bar_x0 = Self::LABEL_COLUMN + Self::PAD;
        let bar_x1 = bar_x0 + Self::BAR_WIDTH;
        let view = Rect::new(
            0.0,
            -Self::PAD,
            bar_x1 + Self::PAD,
            self.plot_height + Self::PAD,
        );
        let mut panel = Panel::new(view)
            .with_title("Elevation Range")
            .with_display(Size::new(view.width() * 1.4, view.height() * 1.4));
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        panel.push(
            RectMarkSpec::new(id(0), Rect::new(bar_x0, 0.0, bar_x1, self.plot_height))
                .with_corner_radius(6.0)
                .with_fill(palette::TRACK)
                .with_z_index(z_order::PANEL_BACKGROUND)
                .mark(),
        );

        let y = ProportionMapper::inverted(f64::from(self.max_elevation), self.plot_height);
        let (top, height) = y.span(ValueRange::new(f64::from(self.low), f64::from(self.high)));
        panel.push(
            RectMarkSpec::new(id(1), Rect::new(bar_x0, top, bar_x1, top + height))
                .with_corner_radius(6.0)
                .with_fill(palette::BLUE_500)
                .mark(),
        );

        for (i, tick) in self.ticks.iter().copied().enumerate() {
            let i = i as u64;
            let ty = self.y(tick);
            panel.push(
                RuleMarkSpec::horizontal(id(100 + i), ty, bar_x0 - 8.0, bar_x1 - 8.0)
                    .with_stroke(css::WHITE, 0.8)
                    .with_opacity(0.4)
                    .with_z_index(z_order::SERIES_STROKE)
                    .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(200 + i),
                    Point::new(Self::LABEL_COLUMN, ty),
                    alloc::format!("{} ft", group_thousands(u64::from(tick))),
                )
                .with_font_size(7.0)
                .with_fill(palette::MUTED_TEXT)
                .with_anchor(TextAnchor::End)
                .mark(),
            );
        }

        let label_x = bar_x1 - 4.0;
        panel.push(
            TextMarkSpec::new(
                id(2),
                Point::new(label_x, top + 6.0),
                alloc::format!("{} ft", group_thousands(u64::from(self.high))),
            )
            .with_font_size(7.0)
            .bold()
            .with_fill(css::WHITE)
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Hanging)
            .with_z_index(z_order::VALUE_LABELS)
            .mark(),
        );
        panel.push(
            TextMarkSpec::new(
                id(3),
                Point::new(label_x, top + height - 4.0),
                alloc::format!("{} ft", group_thousands(u64::from(self.low))),
            )
            .with_font_size(7.0)
            .bold()
            .with_fill(css::WHITE)
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::VALUE_LABELS)
            .mark(),
        );

        panel
    }
}
