use pardoc_types::{Color, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn rank(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Body text settings for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseTypography {
    pub font: &'static str,
    pub size_pt: f32,
    pub color: Color,
    pub rtl: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub font_en: &'static str,
    pub font_ar: &'static str,
    pub size_pt: f32,
    pub bold: bool,
    pub color: Color,
    pub spacing_before_pt: f32,
    pub spacing_after_pt: f32,
}

impl HeadingStyle {
    pub fn font(&self, locale: Locale) -> &'static str {
        if locale.is_rtl() { self.font_ar } else { self.font_en }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub line_spacing: f32,
    pub spacing_before_pt: f32,
    pub spacing_after_pt: f32,
    pub justify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStyle {
    pub indent_twips: u32,
    pub spacing_after_pt: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub base_en: BaseTypography,
    pub base_ar: BaseTypography,
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub paragraph: ParagraphStyle,
    pub bullet: ListStyle,
}

impl Typography {
    pub fn base(&self, locale: Locale) -> &BaseTypography {
        if locale.is_rtl() { &self.base_ar } else { &self.base_en }
    }

    pub fn heading(&self, level: HeadingLevel) -> &HeadingStyle {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        let primary = Color::rgb(0x1F, 0x49, 0x7D);
        let secondary = Color::rgb(0x4F, 0x81, 0xBD);
        Self {
            base_en: BaseTypography {
                font: "Calibri",
                size_pt: 11.0,
                color: Color::default(),
                rtl: false,
            },
            base_ar: BaseTypography {
                font: "Tahoma",
                size_pt: 11.0,
                color: Color::default(),
                rtl: true,
            },
            h1: HeadingStyle {
                font_en: "Calibri Light",
                font_ar: "Tahoma",
                size_pt: 20.0,
                bold: true,
                color: primary,
                spacing_before_pt: 12.0,
                spacing_after_pt: 6.0,
            },
            h2: HeadingStyle {
                font_en: "Calibri",
                font_ar: "Tahoma",
                size_pt: 14.0,
                bold: true,
                color: primary,
                spacing_before_pt: 10.0,
                spacing_after_pt: 4.0,
            },
            h3: HeadingStyle {
                font_en: "Calibri",
                font_ar: "Tahoma",
                size_pt: 12.0,
                bold: true,
                color: secondary,
                spacing_before_pt: 8.0,
                spacing_after_pt: 4.0,
            },
            paragraph: ParagraphStyle {
                line_spacing: 1.15,
                spacing_before_pt: 0.0,
                spacing_after_pt: 6.0,
                justify: true,
            },
            bullet: ListStyle { indent_twips: 720, spacing_after_pt: 2.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_swaps_base_font() {
        let typography = Typography::default();
        assert_eq!(typography.base(Locale::En).font, "Calibri");
        assert_eq!(typography.base(Locale::Ar).font, "Tahoma");
        assert!(typography.base(Locale::Ar).rtl);
    }

    #[test]
    fn test_heading_scale() {
        let typography = Typography::default();
        assert_eq!(typography.heading(HeadingLevel::H1).size_pt, 20.0);
        assert_eq!(typography.heading(HeadingLevel::H2).size_pt, 14.0);
        assert_eq!(typography.heading(HeadingLevel::H3).size_pt, 12.0);
        assert_eq!(typography.heading(HeadingLevel::H3).color.hex(), "#4F81BD");
    }
}
