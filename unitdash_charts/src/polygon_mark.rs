// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled, outlined path marks (boundary polygons).

use kurbo::BezPath;
use peniko::Brush;

use crate::mark::{Mark, MarkId, MarkPayload, PathPayload};
use crate::z_order;

/// A filled and stroked path.
#[derive(Clone, Debug)]
pub struct PolygonMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Closed outline.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width (`0` disables the outline).
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PolygonMarkSpec {
    /// Creates a polygon with a default fill and no outline.
    pub fn new(id: MarkId, path: BezPath) -> Self {
        Self {
            id,
            path,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 0.0,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Path(PathPayload {
                path: self.path.clone(),
                fill: self.fill.clone(),
                stroke: self.stroke.clone(),
                stroke_width: self.stroke_width,
                opacity: 1.0,
            }),
        )
    }
}
