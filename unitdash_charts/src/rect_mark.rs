// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use peniko::Brush;

use crate::mark::{Mark, MarkId, MarkPayload, RectPayload};
use crate::reveal::{Reveal, RevealState};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in panel coordinates.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Collapsed geometry and timing, for rects that grow in.
    pub reveal: Option<(Rect, Reveal, RevealState)>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            corner_radius: 0.0,
            fill: Brush::default(),
            opacity: 1.0,
            reveal: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Makes the rect grow in from `collapsed`.
    pub fn with_reveal(mut self, collapsed: Rect, reveal: Reveal, state: RevealState) -> Self {
        self.reveal = Some((collapsed, reveal, state));
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let (rect, grow_from, timing) = match self.reveal {
            Some((collapsed, reveal, state)) => {
                let (rect, from) = Reveal::rect(state, self.rect, collapsed);
                (rect, from, from.map(|_| reveal))
            }
            None => (self.rect, None, None),
        };
        let mut mark = Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Rect(RectPayload {
                rect,
                corner_radius: self.corner_radius,
                fill: self.fill.clone(),
                opacity: self.opacity,
                grow_from,
            }),
        );
        mark.reveal = timing;
        mark
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn revealed_rects_remember_their_collapsed_geometry() {
        let target = Rect::new(0.0, 20.0, 10.0, 100.0);
        let collapsed = Rect::new(0.0, 100.0, 10.0, 100.0);
        let spec = RectMarkSpec::new(MarkId::from_raw(7), target)
            .with_fill(css::STEEL_BLUE)
            .with_reveal(collapsed, Reveal::default(), RevealState::Revealed);

        let mark = spec.mark();
        let rect = mark.as_rect().expect("rect payload");
        assert_eq!(rect.rect, target);
        assert_eq!(rect.grow_from, Some(collapsed));
        assert_eq!(mark.reveal, Some(Reveal::default()));

        let hidden = spec
            .with_reveal(collapsed, Reveal::default(), RevealState::Hidden)
            .mark();
        assert_eq!(hidden.as_rect().expect("rect payload").rect, collapsed);
        assert_eq!(hidden.reveal, None);
    }
}
