// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight stroked segment: tick lines, grid separators and baselines.

use kurbo::BezPath;
use peniko::{Brush, Color};

use crate::mark::{Mark, MarkId, MarkPayload, PathPayload};
use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point x.
    pub x0: f64,
    /// Start point y.
    pub y0: f64,
    /// End point x.
    pub x1: f64,
    /// End point y.
    pub y1: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            id,
            x0,
            y0,
            x1,
            y1,
            stroke: Brush::default(),
            stroke_width: 1.0,
            opacity: 1.0,
            z_index: z_order::GRID_LINES,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to((self.x0, self.y0));
        p.line_to((self.x1, self.y1));
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Path(PathPayload {
                path: p,
                fill: Color::TRANSPARENT.into(),
                stroke: self.stroke.clone(),
                stroke_width: self.stroke_width,
                opacity: self.opacity,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn vertical_rule_is_a_two_point_stroked_path() {
        let mark = RuleMarkSpec::vertical(MarkId::from_raw(7), 40.0, 10.0, 38.0)
            .with_stroke(css::GRAY, 0.5)
            .mark();
        let path = mark.as_path().expect("path payload");
        assert_eq!(path.stroke_width, 0.5);
        assert_eq!(path.path.elements().len(), 2);

        let bounds = mark.payload.bounds().expect("bounds");
        assert_eq!((bounds.x0, bounds.x1), (40.0, 40.0));
        assert_eq!((bounds.y0, bounds.y1), (10.0, 38.0));
    }
}
