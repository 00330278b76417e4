// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-figure stat tiles (harvest rate, total hunters, area, public land).

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Color;
use unitdash_core::ProportionMapper;

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::panel::Panel;
use crate::rect_mark::RectMarkSpec;
use crate::reveal::{Reveal, RevealState};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A stat tile: a large value over a caption, tinted with an accent color.
///
/// With [`Self::with_fill`] the tile background doubles as a percentage bar.
#[derive(Clone, Debug)]
pub struct StatTileSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Headline value, already formatted.
    pub value: String,
    /// Caption under the value.
    pub caption: String,
    /// Accent color for text, border and fill.
    pub accent: Color,
    /// Share of the tile width to fill, in percent.
    pub fill_percent: Option<f64>,
    /// Reveal timing.
    pub reveal: Reveal,
    /// Reveal state to draw.
    pub state: RevealState,
}

impl StatTileSpec {
    const WIDTH: f64 = 240.0;
    const HEIGHT: f64 = 72.0;

    /// Creates a tile without a fill bar.
    pub fn new(
        id_base: u64,
        value: impl Into<String>,
        caption: impl Into<String>,
        accent: Color,
    ) -> Self {
        Self {
            id_base,
            value: value.into(),
            caption: caption.into(),
            accent,
            fill_percent: None,
            reveal: Reveal::default(),
            state: RevealState::Revealed,
        }
    }

    /// Fills `percent` of the tile width.
    pub fn with_fill(mut self, percent: f64) -> Self {
        self.fill_percent = Some(percent);
        self
    }

    /// Sets the reveal timing and the state to draw.
    pub fn with_reveal(mut self, reveal: Reveal, state: RevealState) -> Self {
        self.reveal = reveal;
        self.state = state;
        self
    }

    /// Builds the panel.
    pub fn panel(&self) -> Panel {
        let view = Rect::new(0.0, 0.0, Self::WIDTH, Self::HEIGHT);
        let mut panel = Panel::new(view);
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        panel.push(
            RectMarkSpec::new(id(0), view)
                .with_corner_radius(14.0)
                .with_fill(self.accent)
                .with_opacity(0.12)
                .with_z_index(z_order::PANEL_BACKGROUND)
                .mark(),
        );
        panel.push(
            RectMarkSpec::new(id(1), Rect::new(0.0, 0.0, 4.0, Self::HEIGHT))
                .with_corner_radius(2.0)
                .with_fill(self.accent)
                .with_z_index(z_order::SERIES_STROKE)
                .mark(),
        );
        if let Some(percent) = self.fill_percent {
            let width = ProportionMapper::direct(100.0, Self::WIDTH).map(percent);
            panel.push(
                RectMarkSpec::new(id(2), Rect::new(0.0, 0.0, width, Self::HEIGHT))
                    .with_corner_radius(14.0)
                    .with_fill(self.accent)
                    .with_opacity(0.3)
                    .with_reveal(
                        Rect::new(0.0, 0.0, 0.0, Self::HEIGHT),
                        self.reveal,
                        self.state,
                    )
                    .mark(),
            );
        }

        let cx = Self::WIDTH * 0.5;
        panel.push(
            TextMarkSpec::new(id(3), Point::new(cx, 38.0), self.value.clone())
                .with_font_size(26.0)
                .bold()
                .with_fill(self.accent)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
        );
        panel.push(
            TextMarkSpec::new(id(4), Point::new(cx, 54.0), self.caption.clone())
                .with_font_size(12.0)
                .bold()
                .with_fill(self.accent)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
        );
        panel
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn fill_covers_the_percentage_of_the_tile() {
        let panel = StatTileSpec::new(0, "22%", "Harvest Rate", css::ROYAL_BLUE)
            .with_fill(22.0)
            .panel();
        let fill = panel.mark(MarkId::from_raw(2)).expect("fill").as_rect().expect("rect");
        assert!((fill.rect.width() - 0.22 * 240.0).abs() < 1e-9);
        assert_eq!(fill.grow_from.map(|r| r.width()), Some(0.0));
    }

    #[test]
    fn plain_tiles_have_no_fill() {
        let panel = StatTileSpec::new(0, "894", "Total Hunters", css::DARK_ORANGE).panel();
        assert!(panel.mark(MarkId::from_raw(2)).is_none());
        let value = panel.mark(MarkId::from_raw(3)).expect("value").as_text().expect("text");
        assert_eq!(value.text, "894");
    }
}
