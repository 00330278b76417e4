// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for panel marks.
//!
//! Panels set z-indexes consistently so paint order never depends on the order marks were
//! generated in. Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Panel background fills and track rings.
pub const PANEL_BACKGROUND: i32 = -100;
/// Grid cells and tick rules drawn behind data.
pub const GRID_LINES: i32 = -50;

/// Filled data marks (bars, bands, polygons).
pub const SERIES_FILL: i32 = 0;
/// Stroked data marks (ring segments, rules over bars).
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above strokes.
pub const SERIES_POINTS: i32 = 20;

/// Value labels drawn on or next to data marks.
pub const VALUE_LABELS: i32 = 40;
/// Axis and row labels.
pub const AXIS_LABELS: i32 = 45;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Panel-level titles and annotations.
pub const TITLES: i32 = 80;
