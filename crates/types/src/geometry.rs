//! Page geometry primitives. The word-processor format addresses the page
//! in twips (1/20 pt), so twips are the canonical unit here; renderers that
//! think in points convert at the edge.

use serde::{Deserialize, Serialize};

/// Per-side page margins, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn all(value: u32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn top_pt(&self) -> f32 {
        self.top as f32 / 20.0
    }

    pub fn right_pt(&self) -> f32 {
        self.right as f32 / 20.0
    }

    pub fn bottom_pt(&self) -> f32 {
        self.bottom as f32 / 20.0
    }

    pub fn left_pt(&self) -> f32 {
        self.left as f32 / 20.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Portrait dimensions in twips (width, height).
    pub fn dimensions_twips(&self) -> (u32, u32) {
        match self {
            PageSize::A4 => (11906, 16838),
            PageSize::Letter => (12240, 15840),
            PageSize::Legal => (12240, 20160),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Applies the orientation to a portrait page size, in twips.
    pub fn apply(&self, size: PageSize) -> (u32, u32) {
        let (w, h) = size.dimensions_twips();
        match self {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_a4_swaps_dimensions() {
        let (w, h) = Orientation::Landscape.apply(PageSize::A4);
        assert_eq!((w, h), (16838, 11906));
    }

    #[test]
    fn test_margins_twip_to_pt() {
        let m = Margins { top: 1440, right: 1080, bottom: 1440, left: 1080 };
        assert_eq!(m.top_pt(), 72.0);
        assert_eq!(m.left_pt(), 54.0);
    }
}
