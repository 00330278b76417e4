// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring (donut) segmentation via `stroke-dasharray`.
//!
//! A ring is a stroked circle. Each segment is drawn as its own circle whose dash pattern shows
//! exactly one dash of length `pct / 100 * C` followed by a gap covering the rest of the
//! circumference `C`. Shifting the pattern by the sum of the previous dashes makes consecutive
//! segments sit end to end around the ring.
//!
//! The starting angle is not part of the segmentation: renderers rotate the whole ring (for
//! example by -90 degrees to start at 12 o'clock).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// One labelled share of a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Display label.
    pub label: String,
    /// Share of the whole in percent. Expected within `[0, 100]`.
    pub percentage: f64,
    /// Stroke color.
    pub color: Color,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(label: impl Into<String>, percentage: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            percentage,
            color,
        }
    }
}

/// Dash geometry for one segment of a ring.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Display label (copied from the input segment).
    pub label: String,
    /// Share of the whole in percent (copied from the input segment).
    pub percentage: f64,
    /// Stroke color (copied from the input segment).
    pub color: Color,
    /// Visible dash length along the circumference.
    pub dash: f64,
    /// Gap length: `circumference - dash`.
    pub gap: f64,
    /// Sum of the dash lengths of all previous segments.
    pub offset: f64,
}

impl ArcSegment {
    /// Returns the SVG `stroke-dashoffset` value for this segment.
    ///
    /// The offset is negated so the dash starts `offset` units after the ring origin.
    pub fn dash_offset(&self) -> f64 {
        -self.offset
    }

    /// Returns the end position of the dash along the circumference.
    pub fn end(&self) -> f64 {
        self.offset + self.dash
    }
}

/// Splits a circle circumference into contiguous dash segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegmenter {
    /// Ring radius.
    pub radius: f64,
}

impl ArcSegmenter {
    /// Creates a segmenter for a ring of the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Returns `2 * PI * radius`.
    pub fn circumference(&self) -> f64 {
        core::f64::consts::TAU * self.radius
    }

    /// Returns the dash length for a percentage of the circumference.
    pub fn dash_length(&self, percentage: f64) -> f64 {
        percentage / 100.0 * self.circumference()
    }

    /// Computes dash geometry for `segments`, in input order.
    ///
    /// Offsets accumulate across the slice only; nothing carries over between calls. Shares that
    /// sum past 100% are not renormalized, so trailing segments wrap around and overlap the
    /// leading ones.
    pub fn segments(&self, segments: &[Segment]) -> Vec<ArcSegment> {
        let circumference = self.circumference();
        let total: f64 = segments.iter().map(|s| s.percentage).sum();
        if total > 100.0 {
            log::warn!("ring segments sum to {total}%, later segments will overlap");
        }

        let out: Vec<ArcSegment> = segments
            .iter()
            .scan(0.0_f64, |offset, segment| {
                let dash = self.dash_length(segment.percentage);
                let arc = ArcSegment {
                    label: segment.label.clone(),
                    percentage: segment.percentage,
                    color: segment.color,
                    dash,
                    gap: circumference - dash,
                    offset: *offset,
                };
                *offset += dash;
                Some(arc)
            })
            .collect();

        log::debug!(
            "segmented {} shares over circumference {circumference:.3}",
            out.len()
        );
        out
    }
}
