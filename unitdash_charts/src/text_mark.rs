// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;

use crate::mark::{Mark, MarkId, MarkPayload, TextAnchor, TextBaseline, TextPayload};
use crate::reveal::{Reveal, RevealState};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in panel coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Collapsed position and timing, for labels that follow a growing bar.
    pub reveal: Option<(Point, Reveal, RevealState)>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            bold: false,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
            reveal: None,
            z_index: crate::z_order::AXIS_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Uses a bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Makes the label slide in from `collapsed`.
    pub fn with_reveal(mut self, collapsed: Point, reveal: Reveal, state: RevealState) -> Self {
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
        let (pos, slide_from, timing) = match self.reveal {
            Some((collapsed, reveal, state)) => {
                let (pos, from) = Reveal::point(state, self.pos, collapsed);
                (pos, from, from.map(|_| reveal))
            }
            None => (self.pos, None, None),
        };
        let mut mark = Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Text(TextPayload {
                pos,
                text: self.text.clone(),
                font_size: self.font_size,
                bold: self.bold,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
                slide_from,
            }),
        );
        mark.reveal = timing;
        mark
    }
}
