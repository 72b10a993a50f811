//! Layout output types and pixel engine configuration.

use serde::Serialize;
use tessel_common::{Rect, TabId};

/// A normalized rectangle in the unit square for one leaf of a layout tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBox {
    pub id: TabId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn from_rect(id: TabId, rect: Rect) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f64, f64) {
        self.rect().center()
    }
}

/// Configuration for laying a tree out in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between sibling panes.
    pub gap: u32,
    /// Padding in pixels around the whole tiling area.
    pub outer_padding: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 4,
            outer_padding: 0,
        }
    }
}
