//! Translate HTML-like markup into Go source for the vecty component API.
//!
//! The pipeline runs in one direction:
//!
//! markup text → [`Tokenizer`] → [`build_document`] → [`emit`] → Go source
//!
//! Each attribute is classified (style, class, data, property or plain
//! attribute) and each tag resolved to an `elem` constructor, falling back
//! to `vecty.Tag` for unknown names.
//!
//! # Example
//!
//! ```ignore
//! use html2vecty_codegen::translate;
//!
//! let code = translate(r#"<p class="lead">Hello</p>"#)?;
//! assert!(code.contains("elem.Paragraph("));
//! ```

pub mod builder;
pub mod classify;
pub mod emit;
pub mod go;
pub mod options;
pub mod resolve;
pub mod tables;

pub use builder::{build_document, build_document_with_limit};
pub use classify::{classify, classify_all};
pub use emit::{build_file, emit};
pub use go::{Code, GoFile};
pub use options::{TranslateOptions, DEFAULT_MAX_DEPTH};
pub use resolve::{resolve_tag, ResolvedTag};

pub use html2vecty_core::{Document, ErrorKind, TranslateError};
pub use html2vecty_parser::Tokenizer;

use tracing::debug;

/// Result type alias for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translate markup into Go source with default options.
pub fn translate(markup: &str) -> Result<String> {
    translate_with_options(markup, &TranslateOptions::default())
}

/// Translate markup into Go source.
///
/// Any error aborts the whole translation; no partial output is produced.
pub fn translate_with_options(markup: &str, options: &TranslateOptions) -> Result<String> {
    debug!(bytes = markup.len(), "translating markup");
    let document = parse_markup_with_options(markup, options)?;
    let source = emit(&document, options)?;
    debug!(
        roots = document.roots.len(),
        output_bytes = source.len(),
        "translation complete"
    );
    Ok(source)
}

/// Parse markup into the call-expression tree without emitting code.
pub fn parse_markup(markup: &str) -> Result<Document> {
    parse_markup_with_options(markup, &TranslateOptions::default())
}

fn parse_markup_with_options(markup: &str, options: &TranslateOptions) -> Result<Document> {
    build_document_with_limit(Tokenizer::new(markup), options.max_depth)
}
