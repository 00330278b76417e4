// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and classification calculators for hunting-unit dashboards.
//!
//! Everything in this crate is a pure mapping from plain input values to plain output values:
//! - **Proportions** map a value in `[0, max]` onto a pixel extent (bars, elevation bands).
//! - **Arcs** split a circle circumference into contiguous `stroke-dasharray` segments.
//! - **Timelines** project calendar ranges onto percentage offsets within a fixed window.
//! - **Odds** classify free-text odds descriptors into severity colors.
//! - **Stats** derive oversubscription and draw-odds figures from raw counts.
//! - **Geo** derives a map center and a flat projection for a unit boundary polygon.
//!
//! None of the calculators validate their input. Out-of-domain values produce geometry that lands
//! outside the intended viewbox rather than an error; callers decide whether that matters.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arc;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geo;
mod odds;
mod proportion;
mod stats;
mod timeline;

pub use arc::{ArcSegment, ArcSegmenter, Segment};
pub use format::group_thousands;
pub use geo::{FlatProjection, GeoBounds, LatLng, centroid};
pub use odds::{ColorBand, OddsClassifier, first_percentage, odds_badge};
pub use proportion::{Axis, ProportionMapper, ValueRange};
pub use stats::{DerivedStats, DrawCounts, StatPair};
pub use timeline::{
    DateRange, MonthMarker, TimelineItem, TimelineProjection, TimelineWindow, format_date_range,
};
