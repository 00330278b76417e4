// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit boundary map overlay.
//!
//! Tiles are the map collaborator's business; this module only decides what is handed to it
//! (center, zoom, tile URL template) and draws the boundary polygon into a panel with a local
//! projection. Clicks on the panel are turned back into coordinates and dispatched to a
//! [`MapEventHandler`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use unitdash_core::{FlatProjection, GeoBounds, LatLng, centroid};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::palette;
use crate::panel::{Panel, Size};
use crate::polygon_mark::PolygonMarkSpec;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Receives map interaction events.
pub trait MapEventHandler {
    /// Called with the coordinate under a click.
    fn on_click(&mut self, at: LatLng);
}

/// The default handler: logs the clicked coordinate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingClickHandler;

impl MapEventHandler for LoggingClickHandler {
    fn on_click(&mut self, at: LatLng) {
        log::info!("map clicked at {:.5}, {:.5}", at.lat, at.lng);
    }
}

/// Map overlay specification.
#[derive(Clone, Debug)]
pub struct MapOverlaySpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Boundary vertices, in order.
    pub polygon: Vec<LatLng>,
    /// Tile zoom level.
    pub zoom: u8,
    /// Tile URL template (`{s}`, `{z}`, `{x}`, `{y}` placeholders).
    pub tile_url: String,
    /// Tile attribution text.
    pub attribution: String,
    /// Boundary outline color.
    pub outline: Color,
    /// Boundary fill color.
    pub fill: Color,
    /// Panel size.
    pub size: Size,
}

impl MapOverlaySpec {
    const PADDING: f64 = 32.0;

    /// Creates an overlay with OpenStreetMap tiles at zoom 12.
    pub fn new(id_base: u64, polygon: Vec<LatLng>) -> Self {
        Self {
            id_base,
            polygon,
            zoom: 12,
            tile_url: String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
            attribution: String::from("\u{a9} OSM contributors"),
            outline: css::RED,
            fill: css::RED.with_alpha(0.3),
            size: Size::new(480.0, 384.0),
        }
    }

    /// Sets the zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the tile URL template and attribution.
    pub fn with_tiles(mut self, tile_url: impl Into<String>, attribution: impl Into<String>) -> Self {
        self.tile_url = tile_url.into();
        self.attribution = attribution.into();
        self
    }

    /// Builds the map view.
    pub fn view(&self) -> MapView {
        let view = Rect::new(0.0, 0.0, self.size.width, self.size.height);
        let mut panel = Panel::new(view).with_title("Map");
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        panel.push(
            RectMarkSpec::new(id(0), view)
                .with_corner_radius(12.0)
                .with_fill(palette::TRACK_DARK)
                .with_z_index(z_order::PANEL_BACKGROUND)
                .mark(),
        );

        let center = centroid(&self.polygon);
        let projection = GeoBounds::of(&self.polygon)
            .map(|bounds| FlatProjection::fit(bounds, view, Self::PADDING));
        if let (Some(projection), Some(center)) = (projection, center) {
            panel.push(
                PolygonMarkSpec::new(id(1), projection.polygon(&self.polygon))
                    .with_fill(self.fill)
                    .with_stroke(self.outline, 3.0)
                    .mark()
                    .with_tooltip(alloc::format!("{} vertices", self.polygon.len())),
            );
            let c = projection.project(center);
            panel.push(
                RectMarkSpec::new(id(2), Rect::from_center_size(c, (8.0, 8.0)))
                    .with_corner_radius(4.0)
                    .with_fill(palette::BLUE_600)
                    .with_z_index(z_order::SERIES_POINTS)
                    .mark()
                    .with_tooltip(alloc::format!("{:.3}, {:.3}", center.lat, center.lng)),
            );
        } else {
            log::warn!("map overlay has no boundary vertices");
        }

        panel.push(
            TextMarkSpec::new(
                id(3),
                Point::new(view.x1 - 6.0, view.y1 - 6.0),
                self.attribution.clone(),
            )
            .with_font_size(9.0)
            .with_fill(palette::BODY_TEXT)
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::TITLES)
            .mark(),
        );

        MapView {
            panel,
            projection,
            center,
            zoom: self.zoom,
            tile_url: self.tile_url.clone(),
        }
    }
}

/// What the map collaborator receives, plus the drawn overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    /// Overlay panel.
    pub panel: Panel,
    /// Panel projection, `None` without vertices.
    pub projection: Option<FlatProjection>,
    /// Map center: the mean of the boundary vertices.
    pub center: Option<LatLng>,
    /// Tile zoom level.
    pub zoom: u8,
    /// Tile URL template.
    pub tile_url: String,
}

impl MapView {
    /// Dispatches a click at a panel point; returns the coordinate passed to the handler.
    pub fn dispatch_click(
        &self,
        at: Point,
        handler: &mut dyn MapEventHandler,
    ) -> Option<LatLng> {
        let coordinate = self.projection?.unproject(at);
        handler.on_click(coordinate);
        Some(coordinate)
    }
}
