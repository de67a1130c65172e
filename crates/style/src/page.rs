use pardoc_types::{Margins, Orientation, PageSize};

/// Fixed page setup. The template is landscape A4 with asymmetric margins;
/// content length never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageGeometry {
    /// Oriented page dimensions in twips (width, height).
    pub fn dimensions_twips(&self) -> (u32, u32) {
        self.orientation.apply(self.size)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Landscape,
            margins: Margins { top: 1440, right: 1080, bottom: 1440, left: 1080 },
        }
    }
}
