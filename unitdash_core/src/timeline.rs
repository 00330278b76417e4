// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar timeline projection.
//!
//! Season date ranges are positioned inside a fixed [`TimelineWindow`] as CSS-style
//! `left`/`width` percentages. Dates are whole days at midnight UTC, so every computation is
//! exact in milliseconds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, Months, NaiveDate};

/// An inclusive-looking `[start, end]` date range. `start <= end` is expected but not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    /// First day.
    pub start: NaiveDate,
    /// Last day (the range ends at midnight at the start of this day).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `end - start` in milliseconds (negative for reversed ranges).
    pub fn duration_ms(&self) -> f64 {
        millis_between(self.start, self.end)
    }
}

/// A labelled season on the timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineItem {
    /// Season title (e.g. `"1st Rifle"`).
    pub label: String,
    /// Season dates.
    pub range: DateRange,
    /// Free-text odds descriptor, also used as tooltip text (e.g. `"Tag odds 12%"`, `"OTC"`).
    pub info: String,
}

impl TimelineItem {
    /// Creates a new item.
    pub fn new(label: impl Into<String>, range: DateRange, info: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            range,
            info: info.into(),
        }
    }
}

/// Horizontal placement of an item, in percent of the window width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineProjection {
    /// Offset of the item start from the window start.
    pub left_pct: f64,
    /// Item duration relative to the window duration.
    pub width_pct: f64,
}

impl TimelineProjection {
    /// Returns `left_pct + width_pct`.
    pub fn right_pct(&self) -> f64 {
        self.left_pct + self.width_pct
    }
}

/// A month boundary inside a window.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthMarker {
    /// First day of the month.
    pub date: NaiveDate,
    /// Abbreviated month name (`"Sep"`).
    pub label: String,
    /// Position of the first day, in percent of the window width.
    pub left_pct: f64,
}

/// The fixed calendar period that all timeline items are projected against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineWindow {
    /// Window start (maps to 0%).
    pub start: NaiveDate,
    /// Window end (maps to 100%). Expected to be after `start`.
    pub end: NaiveDate,
}

impl TimelineWindow {
    /// Creates a new window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the window length in milliseconds.
    pub fn total_ms(&self) -> f64 {
        millis_between(self.start, self.end)
    }

    /// Returns `true` if `range` lies fully inside the window.
    pub fn contains(&self, range: &DateRange) -> bool {
        self.start <= range.start && range.end <= self.end
    }

    /// Projects a date range onto the window.
    ///
    /// Ranges outside the window are not clamped: they produce a negative `left_pct` or a
    /// `right_pct` past 100.
    pub fn project(&self, range: &DateRange) -> TimelineProjection {
        let total = self.total_ms();
        let left_pct = millis_between(self.start, range.start) / total * 100.0;
        let width_pct = range.duration_ms() / total * 100.0;
        if !self.contains(range) {
            log::warn!(
                "range {}..{} lies outside timeline window {}..{}",
                range.start,
                range.end,
                self.start,
                self.end
            );
        }
        TimelineProjection {
            left_pct,
            width_pct,
        }
    }

    /// Returns a marker for every month that begins inside the window.
    pub fn month_markers(&self) -> Vec<MonthMarker> {
        let mut out = Vec::new();
        let Some(mut month) = NaiveDate::from_ymd_opt(self.start.year(), self.start.month(), 1)
        else {
            return out;
        };
        if month < self.start {
            match month.checked_add_months(Months::new(1)) {
                Some(next) => month = next,
                None => return out,
            }
        }
        let total = self.total_ms();
        while month <= self.end {
            out.push(MonthMarker {
                date: month,
                label: alloc::format!("{}", month.format("%b")),
                left_pct: millis_between(self.start, month) / total * 100.0,
            });
            match month.checked_add_months(Months::new(1)) {
                Some(next) => month = next,
                None => break,
            }
        }
        out
    }
}

/// Formats a range as `"Sep 2 – Sep 30"`.
pub fn format_date_range(range: &DateRange) -> String {
    alloc::format!(
        "{} \u{2013} {}",
        range.start.format("%b %-d"),
        range.end.format("%b %-d")
    )
}

#[allow(
    clippy::cast_precision_loss,
    reason = "calendar spans in milliseconds are far below 2^53"
)]
fn millis_between(from: NaiveDate, to: NaiveDate) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64
}
