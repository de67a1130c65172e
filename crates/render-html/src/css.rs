//! Generates the embedded stylesheet from the theme. Everything the CSS
//! says about colors, fonts, and geometry is a theme lookup; the literals
//! here are only structural.

use pardoc_style::Theme;
use pardoc_types::Locale;

pub fn stylesheet(theme: &Theme, locale: Locale) -> String {
    let palette = theme.colors();
    let base = theme.typography.base(locale);
    let paragraph = theme.typography.paragraph;
    let margins = theme.page.margins;

    format!(
        r#"        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: '{base_font}', Arial, sans-serif;
            font-size: {base_size}pt;
            line-height: {line_spacing};
            color: {text};
            background: white;
        }}

        @page {{
            size: A4 landscape;
            margin: {margin_top}pt {margin_right}pt {margin_bottom}pt {margin_left}pt;
        }}

        .cover-page {{
            width: 100%;
            height: 100vh;
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            text-align: center;
            position: relative;
            page-break-after: always;
        }}

        .header-bar {{
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 8px;
            background: linear-gradient(90deg, {primary} 0%, {secondary} 100%);
        }}

        .cover-title {{
            font-size: 24pt;
            font-weight: bold;
            color: {secondary};
            margin-bottom: 16pt;
            letter-spacing: 1px;
        }}

        .cover-subtitle {{
            font-size: 16pt;
            font-weight: 300;
            color: {muted};
            margin-bottom: 64pt;
        }}

        .abstract-section {{
            text-align: start;
            max-width: 500pt;
            margin: 0 auto;
        }}

        .abstract-title {{
            font-size: 14pt;
            font-weight: bold;
            color: {secondary};
            margin-bottom: 16pt;
        }}

        .abstract-text {{
            font-size: {base_size}pt;
            color: {text};
            font-style: italic;
            line-height: 1.4;
        }}

        .content-page {{
            width: 100%;
            min-height: 100vh;
            padding: 12pt;
        }}

        .section-title {{
            font-size: 14pt;
            font-weight: bold;
            color: {primary};
            margin: 8pt 0 8pt 0;
            padding-bottom: 2pt;
            border-bottom: 1px solid {primary}40;
        }}

        .subsection-title {{
            font-size: 12pt;
            font-weight: bold;
            color: {secondary};
            margin: 8pt 0 4pt 0;
        }}

        .paragraph {{
            margin-bottom: {para_after}pt;
            text-align: justify;
        }}

        .attachment-note {{
            color: {muted};
            margin-bottom: {para_after}pt;
        }}

        .bullet-list {{
            margin: 4pt 0;
            padding-inline-start: 20pt;
        }}

        .bullet-list li {{
            margin-bottom: 2pt;
            list-style-type: disc;
        }}

        .table {{
            width: 100%;
            border-collapse: collapse;
            margin: 8pt 0;
            font-size: 10pt;
        }}

        .table th {{
            background-color: {header_bg};
            color: {header_text};
            font-weight: bold;
            padding: 4pt;
            text-align: center;
            border: 1px solid {border};
        }}

        .table td {{
            padding: 3pt;
            border: 1px solid {border};
            vertical-align: top;
        }}

        .table tr:nth-child(even) {{
            background-color: {alt_row};
        }}

        .page-break {{
            page-break-before: always;
        }}

        [dir="rtl"] {{
            text-align: right;
        }}

        [dir="rtl"] .table th,
        [dir="rtl"] .table td {{
            text-align: right;
        }}

        @media print {{
            .cover-page {{
                height: 100vh;
            }}

            .content-page {{
                min-height: 100vh;
            }}

            .page-break {{
                page-break-before: always;
            }}

            @page {{
                margin: 0.6in;
                @top-left {{ content: ""; }}
                @top-center {{ content: ""; }}
                @top-right {{ content: ""; }}
                @bottom-left {{ content: ""; }}
                @bottom-center {{ content: ""; }}
                @bottom-right {{ content: ""; }}
            }}

            nav, .navbar, .command-bar, .tabs, .tablist, .tabpanel,
            button, .button, .btn, input, textarea, select,
            .form-controls, .wizard-controls, .step-navigation,
            .export-buttons, .action-buttons {{
                display: none !important;
            }}

            body {{
                margin: 0;
                padding: 0;
                background: white !important;
            }}

            * {{
                box-shadow: none !important;
                text-shadow: none !important;
            }}
        }}"#,
        base_font = base.font,
        base_size = base.size_pt,
        line_spacing = paragraph.line_spacing,
        para_after = paragraph.spacing_after_pt,
        text = palette.text.hex(),
        primary = palette.primary.hex(),
        secondary = palette.secondary.hex(),
        muted = palette.muted_text.hex(),
        header_bg = palette.table_header_bg.hex(),
        header_text = palette.table_header_text.hex(),
        alt_row = palette.table_alt_row_bg.hex(),
        border = palette.table_border.hex(),
        margin_top = margins.top_pt(),
        margin_right = margins.right_pt(),
        margin_bottom = margins.bottom_pt(),
        margin_left = margins.left_pt(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_embeds_theme_values() {
        let css = stylesheet(Theme::builtin(), Locale::En);
        assert!(css.contains("'Calibri'"));
        assert!(css.contains("#1F497D"));
        assert!(css.contains("#D9E1F2"));
        assert!(css.contains("size: A4 landscape;"));
    }

    #[test]
    fn test_css_swaps_font_for_arabic() {
        let css = stylesheet(Theme::builtin(), Locale::Ar);
        assert!(css.contains("'Tahoma'"));
    }

    #[test]
    fn test_css_hides_controls_when_printing() {
        let css = stylesheet(Theme::builtin(), Locale::En);
        assert!(css.contains("@media print"));
        assert!(css.contains("display: none !important;"));
    }
}
