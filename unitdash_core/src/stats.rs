// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw statistics derived from raw counts.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::proportion::ProportionMapper;

/// Raw draw counts for a hunting unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawCounts {
    /// Licenses available.
    pub quota: u32,
    /// Applicants who drew a license.
    pub winners: u32,
    /// Total applicants.
    pub applicants: u32,
}

impl DrawCounts {
    /// Creates a new set of counts.
    pub fn new(quota: u32, winners: u32, applicants: u32) -> Self {
        Self {
            quota,
            winners,
            applicants,
        }
    }

    /// Derives the ratios shown on the dashboard.
    ///
    /// Zero `winners` or `applicants` are not guarded: the affected ratio is infinite or `NaN`.
    pub fn derive(&self) -> DerivedStats {
        if self.winners == 0 || self.applicants == 0 {
            log::warn!(
                "draw ratio over a zero count (winners {}, applicants {})",
                self.winners,
                self.applicants
            );
        }
        let winners = f64::from(self.winners);
        let applicants = f64::from(self.applicants);
        DerivedStats {
            oversubscription: applicants / winners,
            draw_odds_percent: winners / applicants * 100.0,
        }
    }
}

/// Ratios derived from [`DrawCounts`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedStats {
    /// `applicants / winners`.
    pub oversubscription: f64,
    /// `winners / applicants * 100`, unrounded.
    pub draw_odds_percent: f64,
}

impl DerivedStats {
    /// Oversubscription with one decimal (`"6.4"`).
    pub fn oversubscription_label(&self) -> String {
        alloc::format!("{:.1}", self.oversubscription)
    }

    /// Draw odds rounded to a whole percent, without the sign (`"16"`).
    pub fn draw_odds_label(&self) -> String {
        alloc::format!("{}", self.draw_odds_percent.round())
    }
}

/// A value drawn against a reference maximum (bar heights).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatPair {
    /// Displayed value.
    pub value: f64,
    /// Value that maps to the full bar height.
    pub max_value: f64,
}

impl StatPair {
    /// Creates a new pair.
    pub fn new(value: f64, max_value: f64) -> Self {
        Self { value, max_value }
    }

    /// Returns the bar extent for a bar whose full height is `full`.
    pub fn extent(&self, full: f64) -> f64 {
        ProportionMapper::direct(self.max_value, full).map(self.value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn gmu_551_counts_derive_the_published_figures() {
        let stats = DrawCounts::new(45, 45, 286).derive();
        assert_eq!(stats.oversubscription_label(), "6.4");
        assert_eq!(stats.draw_odds_label(), "16");
    }

    #[test]
    fn derivation_is_idempotent() {
        let counts = DrawCounts::new(10, 7, 93);
        assert_eq!(counts.derive(), counts.derive());
    }

    #[test]
    fn zero_counts_are_not_guarded() {
        let stats = DrawCounts::new(0, 0, 50).derive();
        assert!(stats.oversubscription.is_infinite());
        assert_eq!(stats.draw_odds_label(), "0");

        let none = DrawCounts::new(0, 0, 0).derive();
        assert!(none.oversubscription.is_nan());
        assert_eq!(none.oversubscription_label(), "NaN");
    }

    #[test]
    fn stat_pair_extent_scales_to_full_height() {
        assert_eq!(StatPair::new(286.0, 286.0).extent(112.0), 112.0);
        let quota = StatPair::new(45.0, 286.0).extent(112.0);
        assert!((quota - 17.622_377_622_377_62).abs() < 1e-9, "quota {quota}");
    }
}
