// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit popularity bars.
//!
//! Quota, winners and applicants as three bars scaled against the applicant count, with the
//! oversubscription ratio and draw odds as callouts underneath.

extern crate alloc;

use alloc::string::ToString;

use kurbo::{Point, Rect};
use peniko::Color;
use unitdash_core::{DrawCounts, StatPair};

use crate::mark::{MarkId, TextAnchor, TextBaseline};
use crate::palette;
use crate::panel::Panel;
use crate::rect_mark::RectMarkSpec;
use crate::reveal::{Reveal, RevealState};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Popularity panel specification.
#[derive(Clone, Copy, Debug)]
pub struct PopularitySpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Raw draw counts.
    pub counts: DrawCounts,
    /// Height of a bar whose value equals the applicant count.
    pub full_height: f64,
    /// Reveal timing.
    pub reveal: Reveal,
    /// Reveal state to draw.
    pub state: RevealState,
}

impl PopularitySpec {
    const WIDTH: f64 = 240.0;
    const BASELINE: f64 = 130.0;
    const BAR_WIDTH: f64 = 48.0;
    const LABEL_GAP: f64 = 8.0;

    /// Creates a popularity panel spec with a 112-unit full bar height.
    pub fn new(id_base: u64, counts: DrawCounts) -> Self {
        Self {
            id_base,
            counts,
            full_height: 112.0,
            reveal: Reveal::default(),
            state: RevealState::Revealed,
        }
    }

    /// Sets the reveal timing and the state to draw.
    pub fn with_reveal(mut self, reveal: Reveal, state: RevealState) -> Self {
        self.reveal = reveal;
        self.state = state;
        self
    }

    fn bars(&self) -> [(&'static str, u32, Color); 3] {
        [
            ("Quota", self.counts.quota, palette::BLUE_400),
            ("Winners", self.counts.winners, palette::BLUE_500),
            ("Applicants", self.counts.applicants, palette::BLUE_600),
        ]
    }

    /// Builds the panel.
    pub fn panel(&self) -> Panel {
        let view = Rect::new(0.0, 0.0, Self::WIDTH, 210.0);
        let mut panel = Panel::new(view).with_title("Unit Popularity");
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);
        let column = Self::WIDTH / 3.0;
        let max_value = f64::from(self.counts.applicants);

        for (i, (label, value, color)) in self.bars().into_iter().enumerate() {
            let i = i as u64;
            #[allow(clippy::cast_precision_loss, reason = "three columns")]
            let cx = column * (i as f64 + 0.5);
            let height = StatPair::new(f64::from(value), max_value).extent(self.full_height);
            let x0 = cx - Self::BAR_WIDTH * 0.5;
            let x1 = cx + Self::BAR_WIDTH * 0.5;

            panel.push(
                RectMarkSpec::new(id(i), Rect::new(x0, Self::BASELINE - height, x1, Self::BASELINE))
                    .with_corner_radius(8.0)
                    .with_fill(color)
                    .with_reveal(
                        Rect::new(x0, Self::BASELINE, x1, Self::BASELINE),
                        self.reveal,
                        self.state,
                    )
                    .mark(),
            );
            panel.push(
                TextMarkSpec::new(
                    id(10 + i),
                    Point::new(cx, Self::BASELINE - height - Self::LABEL_GAP),
                    value.to_string(),
                )
                .with_font_size(18.0)
                .with_fill(palette::STRONG_TEXT)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_reveal(Point::new(cx, Self::BASELINE), self.reveal, self.state)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
            panel.push(
                TextMarkSpec::new(id(20 + i), Point::new(cx, Self::BASELINE + 16.0), label)
                    .with_font_size(11.0)
                    .bold()
                    .with_fill(palette::BODY_TEXT)
                    .with_anchor(TextAnchor::Middle)
                    .mark(),
            );
        }

        let stats = self.counts.derive();
        let callouts = [
            (
                alloc::format!("{}x", stats.oversubscription_label()),
                "Oversubscription Ratio",
            ),
            (
                alloc::format!("{}%", stats.draw_odds_label()),
                "Draw Odds",
            ),
        ];
        for (i, (value, caption)) in callouts.into_iter().enumerate() {
            let i = i as u64;
            #[allow(clippy::cast_precision_loss, reason = "two callouts")]
            let cx = Self::WIDTH * (0.25 + 0.5 * i as f64);
            panel.push(
                TextMarkSpec::new(id(30 + i), Point::new(cx, 182.0), value)
                    .with_font_size(22.0)
                    .bold()
                    .with_fill(palette::TEAL_700)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Alphabetic)
                    .with_z_index(z_order::VALUE_LABELS)
                    .mark(),
            );
            panel.push(
                TextMarkSpec::new(id(40 + i), Point::new(cx, 198.0), caption)
                    .with_font_size(10.0)
                    .bold()
                    .with_fill(palette::TEAL_700)
                    .with_anchor(TextAnchor::Middle)
                    .mark(),
            );
        }

        panel
    }
}
