//! Mathpanel Convert - LaTeX from saved math-panel HTML
//!
//! This crate turns the HTML of a saved chat panel, with KaTeX-rendered math
//! widgets, into LaTeX source. Parsing builds an owned [`Document`], the
//! emitter walks it into raw LaTeX and a set of cleanup passes tidy the
//! result. Problems with individual elements never abort a conversion; they
//! are returned as [`Warning`]s next to the text.

pub mod config;
pub mod converters;
pub mod document;
pub mod error;
pub mod fs;
pub mod tree;
pub mod types;

pub use config::ConversionConfig;
pub use converters::{LatexEmitter, emit_latex, post_process};
pub use document::{LATEX_POSTAMBLE, LATEX_PREAMBLE, wrap_document};
pub use error::{ConvertError, Result};
pub use tree::{Document, Element, Node};
pub use types::{Conversion, Diagnostics, Warning};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Convert the content element of a page: emit, clean up and, when
/// `standalone` is set, wrap in the article preamble.
pub fn convert_element(element: &Element, config: &ConversionConfig) -> Conversion {
    let mut emitter = LatexEmitter::new(config);
    let mut latex = String::new();
    emitter.emit_element(element, &mut latex);
    let conversion = Conversion::new(latex, emitter.finish()).map_latex(post_process);
    if config.standalone {
        conversion.map_latex(wrap_document)
    } else {
        conversion
    }
}

/// Locate the content container of a parsed page and convert it.
pub fn convert_document(document: &Document, config: &ConversionConfig) -> Result<Conversion> {
    let root = document.content_root(&config.container_class)?;
    tracing::debug!("converting content root {}", root);
    Ok(convert_element(root, config))
}

/// Convenience function to convert HTML to LaTeX with default settings
pub fn convert_html_to_latex(html: &str) -> Result<Conversion> {
    convert_html_to_latex_with_config(html, &ConversionConfig::default())
}

/// Convenience function to convert HTML to LaTeX with custom configuration
pub fn convert_html_to_latex_with_config(
    html: &str,
    config: &ConversionConfig,
) -> Result<Conversion> {
    convert_document(&Document::parse(html), config)
}
