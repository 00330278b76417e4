// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status-colored season gantt.
//!
//! An alternative to the odds timeline: bars are colored by whether the season is open,
//! coming up or over, and each row is tagged with a species marker.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use unitdash_core::{DateRange, ProportionMapper, TimelineWindow, format_date_range};

use crate::mark::{MarkId, TextAnchor};
use crate::measure::{TextMeasurer, truncate_to_width};
use crate::palette;
use crate::panel::Panel;
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Where a season is relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonStatus {
    /// Open now.
    Active,
    /// Not open yet.
    Upcoming,
    /// Over.
    Closed,
}

impl SeasonStatus {
    /// Bar color for this status.
    pub fn color(self) -> Color {
        match self {
            Self::Active => palette::GREEN_500,
            Self::Upcoming => palette::BLUE_500,
            Self::Closed => palette::GRAY_400,
        }
    }

    /// Parses `"active"`, `"upcoming"` or `"closed"`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Active, Self::Upcoming, Self::Closed]
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Closed => "closed",
        }
    }
}

/// Returns the row marker for a species name: deer, elk, or a generic target.
pub fn species_marker(species: &str) -> &'static str {
    let species = species.to_lowercase();
    if species.contains("deer") {
        "\u{1f98c}"
    } else if species.contains("elk") {
        "\u{1face}"
    } else {
        "\u{1f3af}"
    }
}

/// One gantt row.
#[derive(Clone, Debug, PartialEq)]
pub struct GanttSeason {
    /// Species name, used for the row marker.
    pub species: String,
    /// Season name.
    pub name: String,
    /// Season dates.
    pub range: DateRange,
    /// Season status.
    pub status: SeasonStatus,
}

impl GanttSeason {
    /// Creates a new row.
    pub fn new(
        species: impl Into<String>,
        name: impl Into<String>,
        range: DateRange,
        status: SeasonStatus,
    ) -> Self {
        Self {
            species: species.into(),
            name: name.into(),
            range,
            status,
        }
    }
}

/// Season gantt specification.
#[derive(Clone, Debug)]
pub struct SeasonGanttSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Calendar window the track spans.
    pub window: TimelineWindow,
    /// Rows.
    pub seasons: Vec<GanttSeason>,
}

impl SeasonGanttSpec {
    const WIDTH: f64 = 600.0;
    const HEADER_HEIGHT: f64 = 26.0;
    const ROW_HEIGHT: f64 = 50.0;
    const NAME_WIDTH: f64 = 128.0;

    /// Creates a new gantt spec.
    pub fn new(id_base: u64, window: TimelineWindow, seasons: Vec<GanttSeason>) -> Self {
        Self {
            id_base,
            window,
            seasons,
        }
    }

    /// Builds the panel.
    pub fn panel(&self, measurer: &dyn TextMeasurer) -> Panel {
        #[allow(clippy::cast_precision_loss, reason = "a handful of seasons")]
        let height = Self::HEADER_HEIGHT + self.seasons.len() as f64 * Self::ROW_HEIGHT;
        let mut panel =
            Panel::new(Rect::new(0.0, 0.0, Self::WIDTH, height)).with_title("Season Timeline");
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);
        let x = ProportionMapper::direct(100.0, Self::WIDTH);

        let months = self.window.month_markers();
        for (i, month) in months.iter().enumerate() {
            let next = months.get(i + 1).map_or(100.0, |m| m.left_pct);
            panel.push(
                TextMarkSpec::new(
                    id(i as u64),
                    Point::new(x.map((month.left_pct + next) * 0.5), 10.0),
                    month.label.clone(),
                )
                .with_font_size(11.0)
                .with_fill(palette::BODY_TEXT)
                .with_anchor(TextAnchor::Middle)
                .mark(),
            );
        }
        panel.push(
            RuleMarkSpec::horizontal(id(20), Self::HEADER_HEIGHT - 4.0, 0.0, Self::WIDTH)
                .with_stroke(palette::TRACK, 1.0)
                .mark(),
        );

        for (r, season) in self.seasons.iter().enumerate() {
            #[allow(clippy::cast_precision_loss, reason = "a handful of seasons")]
            let y0 = Self::HEADER_HEIGHT + r as f64 * Self::ROW_HEIGHT;
            let r = 100 + r as u64 * 10;

            panel.push(
                TextMarkSpec::new(id(r), Point::new(0.0, y0 + 8.0), species_marker(&season.species))
                    .with_font_size(13.0)
                    .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(r + 1),
                    Point::new(22.0, y0 + 8.0),
                    truncate_to_width(measurer, &season.name, 11.0, Self::NAME_WIDTH),
                )
                .with_font_size(11.0)
                .bold()
                .with_fill(palette::BODY_TEXT)
                .mark(),
            );

            let top = y0 + 18.0;
            let bottom = top + 16.0;
            panel.push(
                RectMarkSpec::new(id(r + 2), Rect::new(0.0, top, Self::WIDTH, bottom))
                    .with_corner_radius(8.0)
                    .with_fill(palette::TRACK)
                    .with_z_index(z_order::PANEL_BACKGROUND)
                    .mark(),
            );
            let projection = self.window.project(&season.range);
            panel.push(
                RectMarkSpec::new(
                    id(r + 3),
                    Rect::new(
                        x.map(projection.left_pct),
                        top,
                        x.map(projection.right_pct()),
                        bottom,
                    ),
                )
                .with_corner_radius(8.0)
                .with_fill(season.status.color())
                .mark()
                .with_tooltip(alloc::format!("{} ({})", season.name, season.status.name())),
            );
            panel.push(
                TextMarkSpec::new(
                    id(r + 4),
                    Point::new(0.0, bottom + 8.0),
                    format_date_range(&season.range),
                )
                .with_font_size(9.0)
                .with_fill(palette::MUTED_TEXT)
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

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).expect("valid date")
    }

    #[test]
    fn species_markers_match_by_substring() {
        assert_eq!(species_marker("Mule Deer"), "\u{1f98c}");
        assert_eq!(species_marker("ELK"), "\u{1face}");
        assert_eq!(species_marker("Pronghorn"), "\u{1f3af}");
    }

    #[test]
    fn status_names_round_trip() {
        for s in [SeasonStatus::Active, SeasonStatus::Upcoming, SeasonStatus::Closed] {
            assert_eq!(SeasonStatus::from_name(s.name()), Some(s));
        }
        assert_eq!(SeasonStatus::from_name("Active"), Some(SeasonStatus::Active));
        assert_eq!(SeasonStatus::from_name("open"), None);
    }

    #[test]
    fn bars_are_colored_by_status() {
        let spec = SeasonGanttSpec::new(
            0,
            TimelineWindow::new(date(9, 1), date(12, 31)),
            vec![
                GanttSeason::new("Elk", "Archery", DateRange::new(date(9, 2), date(9, 30)), SeasonStatus::Closed),
                GanttSeason::new("Elk", "2nd Rifle", DateRange::new(date(10, 25), date(11, 2)), SeasonStatus::Active),
            ],
        );
        let panel = spec.panel(&HeuristicTextMeasurer);
        let closed = panel.mark(MarkId::from_raw(103)).expect("bar").as_rect().expect("rect");
        let active = panel.mark(MarkId::from_raw(113)).expect("bar").as_rect().expect("rect");
        assert_eq!(closed.fill, Brush::Solid(palette::GRAY_400));
        assert_eq!(active.fill, Brush::Solid(palette::GREEN_500));
        assert!(closed.rect.x1 < active.rect.x0);
        assert!((closed.rect.x0 - 600.0 / 121.0).abs() < 1e-9);
    }
}
