// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preference points ranges.
//!
//! One track per applicant category. The highlighted bar runs from the fewest points that drew
//! a tag to the most points spent, positioned on a fixed point scale.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use unitdash_core::{ProportionMapper, ValueRange};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::palette;
use crate::panel::Panel;
use crate::rect_mark::RectMarkSpec;
use crate::reveal::{Reveal, RevealState};
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// The point range of one applicant category.
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceRange {
    /// Applicant category (e.g. `"Resident"`).
    pub category: String,
    /// `min` is the fewest points that drew, `max` the most points spent.
    pub range: ValueRange,
    /// Bar color.
    pub color: Color,
}

impl PreferenceRange {
    /// Creates a new range.
    pub fn new(category: impl Into<String>, min: f64, max: f64, color: Color) -> Self {
        Self {
            category: category.into(),
            range: ValueRange::new(min, max),
            color,
        }
    }
}

/// Preference points panel specification.
#[derive(Clone, Debug)]
pub struct PreferencePanelSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Ranges, one row each.
    pub ranges: Vec<PreferenceRange>,
    /// Points at the right edge of the track.
    pub scale: u32,
    /// Number of background grid cells.
    pub grid_cells: u32,
    /// Distance between scale ticks.
    pub tick_step: u32,
    /// Reveal timing.
    pub reveal: Reveal,
    /// Reveal state to draw.
    pub state: RevealState,
}

impl PreferencePanelSpec {
    const X0: f64 = 10.0;
    const TRACK_WIDTH: f64 = 280.0;
    const ROW_HEIGHT: f64 = 58.0;
    const TRACK_HEIGHT: f64 = 28.0;

    // Row marks use `row * 10 + 0..=4`; the other marks live in their own bands above.
    const GRID_IDS: u64 = 1 << 32;
    const TICK_IDS: u64 = 2 << 32;
    const SCALE_TRACK_ID: u64 = 3 << 32;

    /// Creates a panel on a 30-point scale with six grid cells.
    pub fn new(id_base: u64, ranges: Vec<PreferenceRange>) -> Self {
        Self {
            id_base,
            ranges,
            scale: 30,
            grid_cells: 6,
            tick_step: 5,
            reveal: Reveal::default(),
            state: RevealState::Revealed,
        }
    }

    /// Sets the point scale.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the reveal timing and the state to draw.
    pub fn with_reveal(mut self, reveal: Reveal, state: RevealState) -> Self {
        self.reveal = reveal;
        self.state = state;
        self
    }

    /// Returns the scale tick values (`0, 5, ..., scale`).
    pub fn ticks(&self) -> Vec<u32> {
        (0..=self.scale).step_by(self.tick_step.max(1) as usize).collect()
    }

    /// Builds the panel.
    pub fn panel(&self) -> Panel {
        #[allow(clippy::cast_precision_loss, reason = "a handful of rows")]
        let rows_height = self.ranges.len() as f64 * Self::ROW_HEIGHT;
        let view = Rect::new(0.0, 0.0, Self::X0 * 2.0 + Self::TRACK_WIDTH, rows_height + 32.0);
        let mut panel = Panel::new(view).with_title("Preference Points Range");
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);
        let x = ProportionMapper::direct(f64::from(self.scale), Self::TRACK_WIDTH);
        let x1 = Self::X0 + Self::TRACK_WIDTH;

        for (r, item) in self.ranges.iter().enumerate() {
            #[allow(clippy::cast_precision_loss, reason = "a handful of rows")]
            let y0 = r as f64 * Self::ROW_HEIGHT;
            let row = r as u64;
            let r = row * 10;
            let top = y0 + 20.0;
            let bottom = top + Self::TRACK_HEIGHT;

            panel.push(
                TextMarkSpec::new(id(r), Point::new(Self::X0, y0 + 8.0), item.category.clone())
                    .with_font_size(13.0)
                    .bold()
                    .with_fill(palette::STRONG_TEXT)
                    .mark(),
            );
            panel.push(
                RectMarkSpec::new(id(r + 1), Rect::new(Self::X0, top, x1, bottom))
                    .with_corner_radius(8.0)
                    .with_fill(palette::TRACK_DARK)
                    .with_z_index(z_order::PANEL_BACKGROUND)
                    .mark(),
            );
            let cell = Self::TRACK_WIDTH / f64::from(self.grid_cells.max(1));
            let grid_base = Self::GRID_IDS + row * u64::from(self.grid_cells);
            for j in 1..self.grid_cells {
                let gx = Self::X0 + cell * f64::from(j);
                panel.push(
                    RuleMarkSpec::vertical(id(grid_base + u64::from(j)), gx, top, bottom)
                        .with_stroke(palette::MUTED_TEXT, 0.5)
                        .with_opacity(0.6)
                        .mark(),
                );
            }

            let (start, extent) = x.span(item.range);
            let bar_x0 = Self::X0 + start;
            let bar_x1 = bar_x0 + extent;
            panel.push(
                RectMarkSpec::new(id(r + 2), Rect::new(bar_x0, top, bar_x1, bottom))
                    .with_corner_radius(8.0)
                    .with_fill(item.color)
                    .with_opacity(0.9)
                    .with_reveal(Rect::new(bar_x0, top, bar_x0, bottom), self.reveal, self.state)
                    .mark(),
            );

            let mid = (top + bottom) * 0.5;
            panel.push(
                TextMarkSpec::new(
                    id(r + 3),
                    Point::new(bar_x0 + 8.0, mid),
                    alloc::format!("{}", item.range.min),
                )
                .with_font_size(11.0)
                .bold()
                .with_fill(css::WHITE)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(r + 4),
                    Point::new(bar_x1 - 8.0, mid),
                    alloc::format!("{}", item.range.max),
                )
                .with_font_size(11.0)
                .bold()
                .with_fill(css::WHITE)
                .with_anchor(TextAnchor::End)
                .with_reveal(Point::new(bar_x0 + 8.0, mid), self.reveal, self.state)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
        }

        let tick_y = rows_height + 10.0;
        for (i, tick) in self.ticks().into_iter().enumerate() {
            let tx = Self::X0 + x.map(f64::from(tick));
            panel.push(
                TextMarkSpec::new(id(Self::TICK_IDS + i as u64), Point::new(tx, tick_y), alloc::format!("{tick}"))
                    .with_font_size(9.0)
                    .bold()
                    .with_fill(palette::MUTED_TEXT)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .mark(),
            );
        }
        panel.push(
            RectMarkSpec::new(id(Self::SCALE_TRACK_ID), Rect::new(Self::X0, tick_y + 10.0, x1, tick_y + 14.0))
                .with_corner_radius(2.0)
                .with_fill(palette::MUTED_TEXT)
                .with_z_index(z_order::PANEL_BACKGROUND)
                .mark(),
        );

        panel
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::collections::BTreeSet;
    use alloc::vec;

    use super::*;

    fn spec() -> PreferencePanelSpec {
        PreferencePanelSpec::new(
            0,
            vec![
                PreferenceRange::new("Resident", 7.0, 15.0, palette::BLUE_400),
                PreferenceRange::new("Non-resident", 10.0, 22.0, palette::BLUE_600),
            ],
        )
    }

    #[test]
    fn bars_span_min_to_max_on_the_point_scale() {
        let panel = spec().panel();
        let resident = panel.mark(MarkId::from_raw(2)).expect("bar").as_rect().expect("rect");
        assert!((resident.rect.x0 - (10.0 + 7.0 / 30.0 * 280.0)).abs() < 1e-9);
        assert!((resident.rect.width() - 8.0 / 30.0 * 280.0).abs() < 1e-9);

        let nonresident = panel.mark(MarkId::from_raw(12)).expect("bar").as_rect().expect("rect");
        assert!((nonresident.rect.x1 - (10.0 + 22.0 / 30.0 * 280.0)).abs() < 1e-9);
    }

    #[test]
    fn range_ends_are_labelled_inside_the_bar() {
        let panel = spec().panel();
        let min = panel.mark(MarkId::from_raw(3)).expect("min").as_text().expect("text");
        let max = panel.mark(MarkId::from_raw(4)).expect("max").as_text().expect("text");
        assert_eq!(min.text, "7");
        assert_eq!(max.text, "15");
        assert!(min.pos.x < max.pos.x);
    }

    #[test]
    fn scale_has_ticks_every_five_points_and_six_cells() {
        let s = spec();
        assert_eq!(s.ticks(), [0, 5, 10, 15, 20, 25, 30]);
        let dividers = s
            .panel()
            .marks
            .iter()
            .filter(|m| {
                (PreferencePanelSpec::GRID_IDS..PreferencePanelSpec::GRID_IDS + 6).contains(&m.id.0)
            })
            .count();
        assert_eq!(dividers, 5);
    }

    #[test]
    fn mark_ids_stay_unique_with_dense_grids_and_ticks() {
        let mut s = spec().with_scale(150);
        s.grid_cells = 12;
        s.tick_step = 1;
        let panel = s.panel();
        let ids: BTreeSet<u64> = panel.marks.iter().map(|m| m.id.0).collect();
        // Two rows of five marks and eleven rules, 151 tick labels and the scale track.
        assert_eq!(panel.marks.len(), 2 * (5 + 11) + 151 + 1);
        assert_eq!(ids.len(), panel.marks.len(), "duplicate mark ids");
    }

    #[test]
    fn hidden_frame_collapses_bars_to_their_start() {
        let panel = spec()
            .with_reveal(Reveal::default(), RevealState::Hidden)
            .panel();
        let bar = panel.mark(MarkId::from_raw(2)).expect("bar").as_rect().expect("rect");
        assert_eq!(bar.rect.width(), 0.0);
    }
}
