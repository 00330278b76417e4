// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear proportion mapping.
//!
//! A [`ProportionMapper`] maps a value in `[0, domain_max]` onto `[0, range_max]`. It is the
//! building block for bar heights, the elevation band, preference-point ranges and the
//! harvest-rate fill.
//!
//! The mapping never clamps. A value outside `[0, domain_max]` maps outside `[0, range_max]`,
//! which renders outside the chart's viewbox.

/// Direction of a proportional axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// `0` maps to `0`, `domain_max` maps to `range_max` (bar heights, horizontal offsets).
    #[default]
    Direct,
    /// `0` maps to `range_max`, `domain_max` maps to `0` (top-down SVG y coordinates).
    Inverted,
}

/// Maps a value within `[0, domain_max]` to an offset within `[0, range_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionMapper {
    /// Upper end of the input domain. Expected to be `> 0`.
    pub domain_max: f64,
    /// Upper end of the output range (pixels, viewbox units or percent).
    pub range_max: f64,
    /// Axis direction.
    pub axis: Axis,
}

impl ProportionMapper {
    /// Creates a direct mapper: `value / domain_max * range_max`.
    pub fn direct(domain_max: f64, range_max: f64) -> Self {
        Self {
            domain_max,
            range_max,
            axis: Axis::Direct,
        }
    }

    /// Creates an inverted mapper: `(1 - value / domain_max) * range_max`.
    pub fn inverted(domain_max: f64, range_max: f64) -> Self {
        Self {
            domain_max,
            range_max,
            axis: Axis::Inverted,
        }
    }

    /// Creates a direct mapper onto percentages (`range_max = 100`).
    pub fn percent(domain_max: f64) -> Self {
        Self::direct(domain_max, 100.0)
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, value: f64) -> f64 {
        let t = value / self.domain_max;
        match self.axis {
            Axis::Direct => t * self.range_max,
            Axis::Inverted => (1.0 - t) * self.range_max,
        }
    }

    /// Maps a numeric range to `(start, extent)` in range space.
    ///
    /// For a direct axis this is `(map(min), map(max) - map(min))`, i.e. a CSS-style
    /// `left`/`width` pair. For an inverted axis the start is `map(max)` (the top edge) and the
    /// extent is `map(min) - map(max)`, i.e. an SVG `y`/`height` pair.
    pub fn span(&self, range: ValueRange) -> (f64, f64) {
        let a = self.map(range.min);
        let b = self.map(range.max);
        match self.axis {
            Axis::Direct => (a, b - a),
            Axis::Inverted => (b, a - b),
        }
    }
}

/// A numeric `[min, max]` range. `min <= max` is expected but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Creates a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn direct_mapping_matches_bar_height_formula() {
        let m = ProportionMapper::direct(286.0, 112.0);
        assert_eq!(m.map(286.0), 112.0);
        assert_eq!(m.map(0.0), 0.0);
        let quota = m.map(45.0);
        assert!((quota - 45.0 / 286.0 * 112.0).abs() < 1e-12, "got {quota}");
    }

    #[test]
    fn inverted_mapping_is_top_down() {
        let y = ProportionMapper::inverted(14_500.0, 160.0);
        assert_eq!(y.map(14_500.0), 0.0);
        assert_eq!(y.map(0.0), 160.0);
        assert!(y.map(14_100.0) < y.map(6_600.0), "higher elevations sit higher up");
    }

    #[test]
    fn mappings_are_monotonic_over_the_domain() {
        let direct = ProportionMapper::direct(30.0, 100.0);
        let inverted = ProportionMapper::inverted(30.0, 100.0);
        let mut prev_direct = f64::NEG_INFINITY;
        let mut prev_inverted = f64::INFINITY;
        for i in 0..=300 {
            let v = f64::from(i) * 0.1;
            let d = direct.map(v);
            let inv = inverted.map(v);
            assert!(d > prev_direct, "direct mapping must increase at {v}");
            assert!(inv < prev_inverted, "inverted mapping must decrease at {v}");
            prev_direct = d;
            prev_inverted = inv;
        }
    }

    #[test]
    fn out_of_domain_values_are_not_clamped() {
        let m = ProportionMapper::direct(10.0, 100.0);
        assert_eq!(m.map(20.0), 200.0);
        assert_eq!(m.map(-5.0), -50.0);
        let inv = ProportionMapper::inverted(10.0, 100.0);
        assert_eq!(inv.map(20.0), -100.0);
    }

    #[test]
    fn span_yields_left_width_and_y_height_pairs() {
        let pct = ProportionMapper::percent(30.0);
        let (left, width) = pct.span(ValueRange::new(7.0, 15.0));
        assert!((left - 7.0 / 30.0 * 100.0).abs() < 1e-9, "left {left}");
        assert!((width - 8.0 / 30.0 * 100.0).abs() < 1e-9, "width {width}");

        let y = ProportionMapper::inverted(14_500.0, 160.0);
        let (top, height) = y.span(ValueRange::new(6_600.0, 14_100.0));
        assert_eq!(top, y.map(14_100.0));
        assert!((height - (y.map(6_600.0) - y.map(14_100.0))).abs() < 1e-12);
        assert!(height > 0.0, "band height should be positive");
    }
}
