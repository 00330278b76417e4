// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odds descriptor classification.
//!
//! Season odds arrive as free text (`"Tag odds 35%"`, `"OTC"`). [`OddsClassifier`] turns a
//! descriptor plus its season category into a severity color. Rules are tried in order and the
//! first match wins:
//!
//! 1. the category names the high-intensity hunting method, if one is configured;
//! 2. the descriptor carries the unlimited-availability marker (`OTC`);
//! 3. the first `<digits>%` in the descriptor falls into a threshold band;
//! 4. otherwise the fallback color.
//!
//! Matching is case-insensitive. Every input maps to exactly one color.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A threshold band: percentages `>= threshold_percent` classify as `color`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBand {
    /// Inclusive lower bound in percent.
    pub threshold_percent: f64,
    /// Band color.
    pub color: Color,
}

impl ColorBand {
    /// Creates a new band.
    pub const fn new(threshold_percent: f64, color: Color) -> Self {
        Self {
            threshold_percent,
            color,
        }
    }
}

/// Classifies odds descriptors into colors.
#[derive(Clone, Debug, PartialEq)]
pub struct OddsClassifier {
    /// Category keyword that forces [`Self::high_intensity`], regardless of odds.
    pub high_intensity_keyword: Option<String>,
    /// Color for categories matching `high_intensity_keyword`.
    pub high_intensity: Color,
    /// Descriptor token marking unlimited availability.
    pub unlimited_marker: String,
    /// Color for unlimited-availability descriptors.
    pub unlimited: Color,
    /// Threshold bands. Tried highest threshold first regardless of order here.
    pub bands: Vec<ColorBand>,
    /// Color when no band threshold is met.
    pub below_bands: Color,
    /// Color when the descriptor has neither a marker nor a percentage.
    pub fallback: Color,
}

impl OddsClassifier {
    /// Band A: odds of 75% and up.
    pub const BAND_A: Color = Color::from_rgb8(0xf8, 0x71, 0x71);
    /// Band B: odds of 40% and up.
    pub const BAND_B: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    /// Band C: odds below 40%.
    pub const BAND_C: Color = Color::from_rgb8(0x78, 0x35, 0x0f);
    /// Unlimited availability (`OTC`).
    pub const UNLIMITED: Color = Color::from_rgb8(0xa8, 0xa2, 0x9e);
    /// High-intensity hunting method.
    pub const HIGH_INTENSITY: Color = Color::from_rgb8(0xb9, 0x1c, 0x1c);
    /// No marker and no percentage.
    pub const FALLBACK: Color = Color::from_rgb8(0xa1, 0x62, 0x07);

    /// Sets the high-intensity category keyword.
    pub fn with_high_intensity_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.high_intensity_keyword = Some(keyword.into());
        self
    }

    /// Replaces the threshold bands.
    pub fn with_bands(mut self, bands: Vec<ColorBand>) -> Self {
        self.bands = bands;
        self
    }

    /// Returns the color for an odds `descriptor` of a season in `category`.
    pub fn classify(&self, descriptor: &str, category: &str) -> Color {
        if let Some(keyword) = &self.high_intensity_keyword {
            if !keyword.is_empty() && contains_ignore_case(category, keyword) {
                return self.high_intensity;
            }
        }

        if contains_ignore_case(descriptor, &self.unlimited_marker) {
            return self.unlimited;
        }

        match first_percentage(descriptor) {
            Some(percent) => self.band_for(percent),
            None => self.fallback,
        }
    }

    /// Returns the band color for a percentage, trying the highest threshold first.
    pub fn band_for(&self, percent: f64) -> Color {
        self.bands
            .iter()
            .filter(|band| percent >= band.threshold_percent)
            .max_by(|a, b| a.threshold_percent.total_cmp(&b.threshold_percent))
            .map_or(self.below_bands, |band| band.color)
    }
}

impl Default for OddsClassifier {
    fn default() -> Self {
        Self {
            high_intensity_keyword: None,
            high_intensity: Self::HIGH_INTENSITY,
            unlimited_marker: String::from("OTC"),
            unlimited: Self::UNLIMITED,
            bands: alloc::vec![
                ColorBand::new(75.0, Self::BAND_A),
                ColorBand::new(40.0, Self::BAND_B),
            ],
            below_bands: Self::BAND_C,
            fallback: Self::FALLBACK,
        }
    }
}

/// Returns the first run of ASCII digits directly followed by `%`, as a number.
///
/// `"Tag odds 35%"` yields `35`; `"5 points, 12%"` yields `12`; `"OTC"` yields `None`.
pub fn first_percentage(descriptor: &str) -> Option<f64> {
    first_percentage_span(descriptor).map(|(start, end)| {
        descriptor[start..end]
            .bytes()
            .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'))
    })
}

/// Returns the short badge text for a descriptor: the first `"<digits>%"`, else the whole text.
pub fn odds_badge(descriptor: &str) -> &str {
    match first_percentage_span(descriptor) {
        Some((start, end)) => &descriptor[start..=end],
        None => descriptor,
    }
}

// Byte span of the digits (exclusive of the `%`).
fn first_percentage_span(descriptor: &str) -> Option<(usize, usize)> {
    let bytes = descriptor.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if bytes.get(i) == Some(&b'%') {
                return Some((start, i));
            }
        } else {
            i += 1;
        }
    }
    None
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    haystack.contains(needle.as_str())
}
