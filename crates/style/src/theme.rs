//! The top-level theme object tying every styling concern together.

use crate::page::PageGeometry;
use crate::palette::Palette;
use crate::sections::SectionKey;
use crate::tables::{ColumnSpec, TableKind, TableStyle};
use crate::typography::Typography;
use once_cell::sync::Lazy;
use pardoc_types::Locale;

/// The theme version shipped with this release. Bump it whenever any
/// styling constant changes, so exported documents can be traced back to
/// the configuration that produced them.
pub const THEME_VERSION: &str = "1.2.5";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub version: String,
    pub page: PageGeometry,
    pub typography: Typography,
    pub palette: Palette,
    pub table: TableStyle,
}

static BUILTIN: Lazy<Theme> = Lazy::new(|| Theme {
    name: format!("par_theme_v{THEME_VERSION}"),
    version: THEME_VERSION.to_string(),
    page: PageGeometry::default(),
    typography: Typography::default(),
    palette: Palette::default(),
    table: TableStyle::default(),
});

impl Theme {
    /// The built-in template theme. Every renderer reads this one static
    /// instance, so lookups are byte-identical across output formats.
    pub fn builtin() -> &'static Theme {
        &BUILTIN
    }

    pub fn colors(&self) -> &Palette {
        &self.palette
    }

    pub fn typography(&self, locale: Locale) -> &crate::typography::BaseTypography {
        self.typography.base(locale)
    }

    pub fn section_title(&self, key: SectionKey, locale: Locale) -> &'static str {
        key.title(locale)
    }

    pub fn table_columns(&self, kind: TableKind, _locale: Locale) -> &'static [ColumnSpec] {
        kind.columns()
    }
}
