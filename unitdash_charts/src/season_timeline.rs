// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Season timeline with odds badges.
//!
//! Each row shows the odds badge, the season title, the season bar projected onto the
//! timeline window, and the date range. The header carries one label per month that starts
//! inside the window, centered over that month's share of the track.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use unitdash_core::{
    OddsClassifier, ProportionMapper, TimelineItem, TimelineWindow, format_date_range, odds_badge,
};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::measure::{TextMeasurer, truncate_to_width};
use crate::palette;
use crate::panel::Panel;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Season timeline specification.
#[derive(Clone, Debug)]
pub struct SeasonTimelineSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Calendar window the track spans.
    pub window: TimelineWindow,
    /// Seasons, one row each.
    pub items: Vec<TimelineItem>,
    /// Badge and bar colors.
    pub classifier: OddsClassifier,
    /// Width of the season title column; longer titles are truncated.
    pub title_width: f64,
}

impl SeasonTimelineSpec {
    const WIDTH: f64 = 600.0;
    const BADGE_WIDTH: f64 = 48.0;
    const TITLE_X: f64 = 56.0;
    const DATES_WIDTH: f64 = 104.0;
    const GAP: f64 = 8.0;
    const HEADER_HEIGHT: f64 = 24.0;
    const ROW_HEIGHT: f64 = 36.0;
    const TRACK_HEIGHT: f64 = 12.0;
    const FONT_SIZE: f64 = 12.0;

    /// Creates a timeline with the default classifier.
    pub fn new(id_base: u64, window: TimelineWindow, items: Vec<TimelineItem>) -> Self {
        Self {
            id_base,
            window,
            items,
            classifier: OddsClassifier::default(),
            title_width: 120.0,
        }
    }

    /// Replaces the classifier.
    pub fn with_classifier(mut self, classifier: OddsClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Sets the title column width.
    pub fn with_title_width(mut self, title_width: f64) -> Self {
        self.title_width = title_width.max(0.0);
        self
    }

    fn track_x0(&self) -> f64 {
        Self::TITLE_X + self.title_width + Self::GAP
    }

    fn track_x1(&self) -> f64 {
        Self::WIDTH - Self::DATES_WIDTH - Self::GAP
    }

    /// Builds the panel.
    pub fn panel(&self, measurer: &dyn TextMeasurer) -> Panel {
        #[allow(clippy::cast_precision_loss, reason = "a handful of seasons")]
        let height = Self::HEADER_HEIGHT + self.items.len() as f64 * Self::ROW_HEIGHT;
        let mut panel =
            Panel::new(Rect::new(0.0, 0.0, Self::WIDTH, height)).with_title("Seasons and Odds");
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        let track_x0 = self.track_x0();
        let track_x1 = self.track_x1();
        let x = ProportionMapper::direct(100.0, track_x1 - track_x0);
        let header_y = Self::HEADER_HEIGHT * 0.5;

        let header = |offset: u64, pos: Point, text: &str, anchor: TextAnchor| {
            TextMarkSpec::new(id(offset), pos, String::from(text))
                .with_font_size(10.0)
                .with_fill(palette::GRAY_400)
                .with_anchor(anchor)
                .mark()
        };
        panel.push(header(
            0,
            Point::new(Self::BADGE_WIDTH * 0.5, header_y),
            "Odds",
            TextAnchor::Middle,
        ));
        panel.push(header(1, Point::new(Self::TITLE_X, header_y), "Season", TextAnchor::Start));
        panel.push(header(
            2,
            Point::new(Self::WIDTH - Self::GAP, header_y),
            "Dates",
            TextAnchor::End,
        ));
        let months = self.window.month_markers();
        for (i, month) in months.iter().enumerate() {
            let next = months.get(i + 1).map_or(100.0, |m| m.left_pct);
            let center = (month.left_pct + next) * 0.5;
            panel.push(header(
                10 + i as u64,
                Point::new(track_x0 + x.map(center), header_y),
                &month.label,
                TextAnchor::Middle,
            ));
        }

        for (r, item) in self.items.iter().enumerate() {
            #[allow(clippy::cast_precision_loss, reason = "a handful of seasons")]
            let cy = Self::HEADER_HEIGHT + (r as f64 + 0.5) * Self::ROW_HEIGHT;
            let r = 100 + r as u64 * 10;
            let color = self.classifier.classify(&item.info, &item.label);

            panel.push(
                RectMarkSpec::new(
                    id(r),
                    Rect::new(0.0, cy - 9.0, Self::BADGE_WIDTH, cy + 9.0),
                )
                .with_corner_radius(4.0)
                .with_fill(color)
                .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(r + 1),
                    Point::new(Self::BADGE_WIDTH * 0.5, cy),
                    odds_badge(&item.info),
                )
                .with_font_size(10.0)
                .bold()
                .with_fill(css::WHITE)
                .with_anchor(TextAnchor::Middle)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(r + 2),
                    Point::new(Self::TITLE_X, cy),
                    truncate_to_width(measurer, &item.label, Self::FONT_SIZE, self.title_width),
                )
                .with_font_size(Self::FONT_SIZE)
                .with_fill(palette::STRONG_TEXT)
                .mark()
                .with_tooltip(item.label.clone()),
            );

            let half = Self::TRACK_HEIGHT * 0.5;
            panel.push(
                RectMarkSpec::new(id(r + 3), Rect::new(track_x0, cy - half, track_x1, cy + half))
                    .with_corner_radius(half)
                    .with_fill(palette::TRACK)
                    .with_z_index(z_order::PANEL_BACKGROUND)
                    .mark(),
            );
            let projection = self.window.project(&item.range);
            log::debug!(
                "season {:?}: left {:.3}% width {:.3}%",
                item.label,
                projection.left_pct,
                projection.width_pct
            );
            let bar_x0 = track_x0 + x.map(projection.left_pct);
            let bar_x1 = track_x0 + x.map(projection.right_pct());
            panel.push(
                RectMarkSpec::new(id(r + 4), Rect::new(bar_x0, cy - half, bar_x1, cy + half))
                    .with_corner_radius(half)
                    .with_fill(color)
                    .mark()
                    .with_tooltip(item.info.clone()),
            );

            panel.push(
                TextMarkSpec::new(
                    id(r + 5),
                    Point::new(Self::WIDTH - Self::GAP, cy),
                    format_date_range(&item.range),
                )
                .with_font_size(10.0)
                .with_fill(palette::BODY_TEXT)
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .mark(),
            );
        }

        panel
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chrono::NaiveDate;
    use peniko::Brush;
    use unitdash_core::DateRange;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).expect("valid date")
    }

    fn spec() -> SeasonTimelineSpec {
        SeasonTimelineSpec::new(
            0,
            TimelineWindow::new(date(9, 1), date(12, 31)),
            vec![
                TimelineItem::new("Archery", DateRange::new(date(9, 2), date(9, 30)), "Tag odds 35%"),
                TimelineItem::new("1st Rifle", DateRange::new(date(10, 15), date(10, 19)), "Tag odds 12%"),
                TimelineItem::new("2nd Rifle", DateRange::new(date(10, 25), date(11, 2)), "OTC"),
                TimelineItem::new("Late", DateRange::new(date(12, 1), date(12, 31)), "Tag odds 98%"),
            ],
        )
    }

    #[test]
    fn bars_are_projected_onto_the_track() {
        let s = spec();
        let panel = s.panel(&HeuristicTextMeasurer);
        let width = s.track_x1() - s.track_x0();
        let archery = panel.mark(MarkId::from_raw(104)).expect("bar").as_rect().expect("rect");
        assert!((archery.rect.x0 - (s.track_x0() + width / 121.0)).abs() < 1e-9);
        assert!((archery.rect.width() - width * 28.0 / 121.0).abs() < 1e-9);

        let late = panel.mark(MarkId::from_raw(134)).expect("bar").as_rect().expect("rect");
        assert!((late.rect.x1 - s.track_x1()).abs() < 1e-9, "late ends at the window end");
    }

    #[test]
    fn badges_use_the_classifier_and_the_first_percentage() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let badge = |r: u64| panel.mark(MarkId::from_raw(100 + r * 10)).expect("badge");
        let text = |r: u64| {
            panel
                .mark(MarkId::from_raw(101 + r * 10))
                .and_then(|m| m.as_text())
                .map(|t| t.text.clone())
                .expect("badge text")
        };
        assert_eq!(text(0), "35%");
        assert_eq!(text(2), "OTC");
        assert_eq!(
            badge(1).as_rect().expect("rect").fill,
            Brush::Solid(OddsClassifier::BAND_C)
        );
        assert_eq!(
            badge(2).as_rect().expect("rect").fill,
            Brush::Solid(OddsClassifier::UNLIMITED)
        );
        assert_eq!(
            badge(3).as_rect().expect("rect").fill,
            Brush::Solid(OddsClassifier::BAND_A)
        );
    }

    #[test]
    fn bars_carry_the_descriptor_as_tooltip_and_rows_end_with_dates() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let bar = panel.mark(MarkId::from_raw(104)).expect("bar");
        assert_eq!(bar.tooltip.as_deref(), Some("Tag odds 35%"));
        let dates = panel.mark(MarkId::from_raw(105)).expect("dates").as_text().expect("text");
        assert_eq!(dates.text, "Sep 2 \u{2013} Sep 30");
    }

    #[test]
    fn header_has_one_label_per_month() {
        let panel = spec().panel(&HeuristicTextMeasurer);
        let months: Vec<&str> = (10..14)
            .filter_map(|i| panel.mark(MarkId::from_raw(i)))
            .filter_map(|m| m.as_text())
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(months, ["Sep", "Oct", "Nov", "Dec"]);
    }

    #[test]
    fn long_titles_are_truncated_to_the_column() {
        let panel = spec().with_title_width(30.0).panel(&HeuristicTextMeasurer);
        let title = panel.mark(MarkId::from_raw(102)).expect("title");
        assert_eq!(title.as_text().expect("text").text, "Arc\u{2026}");
        assert_eq!(title.tooltip.as_deref(), Some("Archery"));
    }
}
