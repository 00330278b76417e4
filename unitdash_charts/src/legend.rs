// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A legend row is a horizontal run of `swatch label value` items, e.g. `● Plains 60%`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::mark::{Mark, MarkId, TextAnchor, TextBaseline};
use crate::measure::TextMeasurer;
use crate::panel::Size;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A legend item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// Label shown next to the swatch.
    pub label: String,
    /// Emphasized value shown after the label.
    pub value: Option<String>,
    /// Swatch paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            value: None,
            fill: Brush::Solid(color),
        }
    }

    /// Sets the emphasized value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A horizontal legend row, centered on a point.
#[derive(Clone, Debug)]
pub struct LegendRowSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Round swatch diameter.
    pub swatch_size: f64,
    /// Gap between swatch, label and value.
    pub label_dx: f64,
    /// Gap between items.
    pub item_gap: f64,
    /// Font size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
    /// Value paint.
    pub value_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendRowSpec {
    /// Creates a legend row with defaults.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_size: 8.0,
            label_dx: 5.0,
            item_gap: 12.0,
            font_size: 10.0,
            text_fill: css::DIM_GRAY.into(),
            value_fill: css::BLACK.into(),
            items,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the gap between items.
    pub fn with_item_gap(mut self, item_gap: f64) -> Self {
        self.item_gap = item_gap.max(0.0);
        self
    }

    fn item_width(&self, measurer: &dyn TextMeasurer, item: &LegendItem) -> f64 {
        let (label_w, _) = measurer.measure(&item.label, self.font_size);
        let value_w = item
            .value
            .as_deref()
            .map_or(0.0, |v| self.label_dx + measurer.measure(v, self.font_size).0);
        self.swatch_size + self.label_dx + label_w + value_w
    }

    /// Measures the row.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let items: f64 = self
            .items
            .iter()
            .map(|item| self.item_width(measurer, item))
            .sum();
        #[allow(clippy::cast_precision_loss, reason = "legends have a handful of items")]
        let gaps = self.items.len().saturating_sub(1) as f64 * self.item_gap;
        Size::new(items + gaps, self.swatch_size.max(self.font_size))
    }

    /// Returns the row bounds when centered on `center`.
    pub fn bounds(&self, measurer: &dyn TextMeasurer, center: Point) -> Rect {
        let size = self.measure(measurer);
        Rect::from_center_size(center, (size.width, size.height))
    }

    /// Generates marks (swatch, label and value per item) centered on `center`.
    pub fn marks(&self, measurer: &dyn TextMeasurer, center: Point) -> Vec<Mark> {
        let mut out = Vec::new();
        let bounds = self.bounds(measurer, center);
        let mut x = bounds.x0;
        let y = center.y;

        for (i, item) in self.items.iter().enumerate() {
            let i = i as u64;
            let half = self.swatch_size * 0.5;

            // Swatch.
            out.push(
                RectMarkSpec::new(
                    MarkId::from_raw(self.id_base + i),
                    Rect::new(x, y - half, x + self.swatch_size, y + half),
                )
                .with_corner_radius(half)
                .with_fill(item.fill.clone())
                .with_z_index(z_order::LEGEND_SWATCHES)
                .mark(),
            );
            x += self.swatch_size + self.label_dx;

            // Label.
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i),
                    Point::new(x, y),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
            x += measurer.measure(&item.label, self.font_size).0;

            if let Some(value) = &item.value {
                x += self.label_dx;
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 2000 + i),
                        Point::new(x, y),
                        value.clone(),
                    )
                    .with_font_size(self.font_size)
                    .bold()
                    .with_fill(self.value_fill.clone())
                    .with_baseline(TextBaseline::Middle)
                    .with_z_index(z_order::LEGEND_LABELS)
                    .mark(),
                );
                x += measurer.measure(value, self.font_size).0;
            }
            x += self.item_gap;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn row_is_centered_and_values_follow_labels() {
        let measurer = HeuristicTextMeasurer;
        let spec = LegendRowSpec::new(
            10,
            vec![
                LegendItem::solid("Plains", css::ORANGE).with_value("60%"),
                LegendItem::solid("Forest", css::SEA_GREEN).with_value("45%"),
            ],
        );
        let center = Point::new(100.0, 180.0);
        let bounds = spec.bounds(&measurer, center);
        assert!((bounds.center().x - 100.0).abs() < 1e-9);

        let marks = spec.marks(&measurer, center);
        assert_eq!(marks.len(), 6);
        let first_swatch = marks[0].as_rect().expect("swatch");
        assert!((first_swatch.rect.x0 - bounds.x0).abs() < 1e-9);

        let label = marks[1].as_text().expect("label");
        let value = marks[2].as_text().expect("value");
        assert_eq!(value.text, "60%");
        assert!(value.bold);
        assert!(value.pos.x > label.pos.x);
    }

    #[test]
    fn measure_grows_with_items() {
        let measurer = HeuristicTextMeasurer;
        let one = LegendRowSpec::new(1, vec![LegendItem::solid("A", css::BLACK)]);
        let two = LegendRowSpec::new(
            1,
            vec![
                LegendItem::solid("A", css::BLACK),
                LegendItem::solid("BB", css::BLACK),
            ],
        );
        assert!(two.measure(&measurer).width > one.measure(&measurer).width);
    }
}
