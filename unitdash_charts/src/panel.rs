// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panels: a viewbox plus the marks painted inside it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::mark::{Mark, MarkId};

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A self-contained chart: marks in a fixed coordinate system.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Heading shown above the chart.
    pub title: Option<String>,
    /// Viewbox in mark coordinates.
    pub view: Rect,
    /// Preferred display size; the renderer scales `view` into it.
    pub display: Size,
    /// Marks, in generation order.
    pub marks: Vec<Mark>,
}

impl Panel {
    /// Creates an empty panel whose display size equals its viewbox size.
    pub fn new(view: Rect) -> Self {
        Self {
            title: None,
            view,
            display: Size::new(view.width(), view.height()),
            marks: Vec::new(),
        }
    }

    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the display size.
    pub fn with_display(mut self, display: Size) -> Self {
        self.display = display;
        self
    }

    /// Appends marks.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Appends one mark.
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Returns the marks sorted by `(z_index, id)`.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Looks up a mark by id.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.iter().find(|m| m.id == id)
    }
}
