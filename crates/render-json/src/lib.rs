//! Raw-data renderer. Unlike the document formats it serializes the
//! validated record itself, not the block sequence, so its output parses
//! straight back through the validator.

use pardoc_idf::Block;
use pardoc_record::ParRecord;
use pardoc_render_core::{DocumentRenderer, OutputFormat, RenderError};
use pardoc_style::Theme;
use pardoc_types::Locale;

#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(
        &self,
        record: &ParRecord,
        _blocks: &[Block],
        _theme: &Theme,
        _locale: Locale,
    ) -> Result<Vec<u8>, RenderError> {
        let mut bytes = serde_json::to_vec_pretty(record)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
