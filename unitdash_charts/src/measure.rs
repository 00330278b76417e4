// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! Shaping is left to the renderer, so panels only need rough text extents: to size legends
//! and to truncate row labels that would run into the timeline track.

extern crate alloc;

use alloc::string::String;

/// A minimal text measurement interface used by panel layout.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A heuristic text measurer assuming an average glyph width of ~0.6em and a height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        #[allow(clippy::cast_precision_loss, reason = "label lengths are small")]
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Truncates `text` with a trailing ellipsis so it fits in `max_width`.
///
/// Text that already fits is returned unchanged.
pub fn truncate_to_width(
    measurer: &dyn TextMeasurer,
    text: &str,
    font_size: f64,
    max_width: f64,
) -> String {
    if measurer.measure(text, font_size).0 <= max_width {
        return String::from(text);
    }
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        out.push('\u{2026}');
        let fits = measurer.measure(&out, font_size).0 <= max_width;
        out.pop();
        if !fits {
            out.pop();
            break;
        }
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        let m = HeuristicTextMeasurer;
        assert_eq!(truncate_to_width(&m, "Late", 10.0, 100.0), "Late");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        let m = HeuristicTextMeasurer;
        // 6 units per glyph: 5 glyphs including the ellipsis fit in 30.
        let out = truncate_to_width(&m, "Muzzleloader", 10.0, 30.0);
        assert_eq!(out, "Muzz\u{2026}");
        assert!(m.measure(&out, 10.0).0 <= 30.0);
    }
}
