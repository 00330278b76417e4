// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard panels for `unitdash_core`.
//!
//! This crate turns calculator output into renderer-neutral [`Mark`]s:
//! - **Mark specs** (rect, ring, rule, text, polygon) wrap one primitive each.
//! - **Panels** (elevation, land split, resident donut, popularity, preference points, season
//!   timeline and gantt, stat tiles, map overlay) compose mark specs into a [`Panel`] with a fixed viewbox.
//! - [`DashboardSpec`] assembles every panel of a unit into cards and sections.
//!
//! Painting is out of scope: a renderer walks the marks of each panel in `(z_index, MarkId)`
//! order and serializes them (the demo crate writes SVG).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dashboard;
mod elevation;
mod land_split;
mod legend;
mod map_overlay;
mod mark;
mod measure;
mod palette;
mod panel;
mod polygon_mark;
mod popularity;
mod preference;
mod rect_mark;
mod resident_donut;
mod reveal;
mod ring_mark;
mod rule_mark;
mod season_gantt;
mod season_timeline;
mod stat_tile;
mod text_mark;
mod z_order;

pub use dashboard::{BadgeGroup, Card, Dashboard, DashboardSpec, Section, UnitHeader};
pub use elevation::ElevationChartSpec;
pub use land_split::LandSplitSpec;
pub use legend::{LegendItem, LegendRowSpec};
pub use map_overlay::{LoggingClickHandler, MapEventHandler, MapOverlaySpec, MapView};
pub use mark::{
    Mark, MarkId, MarkPayload, PathPayload, RectPayload, RingPayload, TextAnchor, TextBaseline,
    TextPayload,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, truncate_to_width};
pub use panel::{Panel, Size};
pub use polygon_mark::PolygonMarkSpec;
pub use popularity::PopularitySpec;
pub use preference::{PreferencePanelSpec, PreferenceRange};
pub use rect_mark::RectMarkSpec;
pub use resident_donut::ResidentDonutSpec;
pub use reveal::{Reveal, RevealState};
pub use ring_mark::RingMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use season_gantt::{GanttSeason, SeasonGanttSpec, SeasonStatus, species_marker};
pub use season_timeline::SeasonTimelineSpec;
pub use stat_tile::StatTileSpec;
pub use text_mark::TextMarkSpec;
pub use z_order::*;
