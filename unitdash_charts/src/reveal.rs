// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grow-in animation for bars and fills.
//!
//! Bars are first shown collapsed and grow to their final extent once a fixed delay has
//! passed. Panels take the current [`RevealState`]: a hidden frame draws collapsed geometry,
//! a revealed frame draws final geometry and records the collapsed geometry on the mark so a
//! renderer can animate between the two, starting after [`Reveal::delay_ms`].

use kurbo::{Point, Rect};

/// Whether the reveal delay has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Before the delay: bars and fills are collapsed.
    Hidden,
    /// After the delay: bars and fills have their final extent.
    #[default]
    Revealed,
}

/// Reveal timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Delay before the transition starts.
    pub delay_ms: u32,
    /// Transition length.
    pub duration_ms: u32,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            duration_ms: 1200,
        }
    }
}

impl Reveal {
    /// Resolves a rect for `state`: `(drawn geometry, geometry to grow from)`.
    pub(crate) fn rect(state: RevealState, target: Rect, collapsed: Rect) -> (Rect, Option<Rect>) {
        match state {
            RevealState::Hidden => (collapsed, None),
            RevealState::Revealed => (target, Some(collapsed)),
        }
    }

    /// Resolves a text position for `state`: `(drawn position, position to slide from)`.
    pub(crate) fn point(
        state: RevealState,
        target: Point,
        collapsed: Point,
    ) -> (Point, Option<Point>) {
        match state {
            RevealState::Hidden => (collapsed, None),
            RevealState::Revealed => (target, Some(collapsed)),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn hidden_frames_draw_collapsed_geometry() {
        let target = Rect::new(0.0, 10.0, 20.0, 100.0);
        let collapsed = Rect::new(0.0, 100.0, 20.0, 100.0);
        assert_eq!(
            Reveal::rect(RevealState::Hidden, target, collapsed),
            (collapsed, None)
        );
        assert_eq!(
            Reveal::rect(RevealState::Revealed, target, collapsed),
            (target, Some(collapsed))
        );
    }

    #[test]
    fn default_timing_waits_half_a_second() {
        assert_eq!(Reveal::default().delay_ms, 500);
    }
}
