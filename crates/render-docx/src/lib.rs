//! OOXML renderer: maps the block sequence onto WordprocessingML and
//! packs the parts into an OPC (ZIP) container.

pub mod document;
pub mod opc;
pub mod renderer;
pub mod styles;

pub use renderer::DocxRenderer;
