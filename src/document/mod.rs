//! Parse, annotate and serialize whole HTML documents.
//!
//! This is the in-memory entry point: bytes or text in, annotated text
//! out. File handling lives in [`crate::rewrite`].

mod parse;
mod repair;
mod serialize;

pub use parse::parse_html;
pub use repair::repair_comment_markers;
pub use serialize::serialize_document;

use serde::Serialize;
use tracing::info;

use crate::annotator::{AnnotationReport, TableAnnotator};
use crate::config::AnnotateConfig;
use crate::dom::RcDomTree;
use crate::error::AnnotateResult;

/// Annotated document text plus what the pass did
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedHtml {
    pub html: String,
    pub report: AnnotationReport,
}

/// Annotate every table in an HTML document held in memory
///
/// The document is parsed leniently, annotated in one pass, serialized,
/// and finally run through [`repair_comment_markers`].
///
/// # Errors
///
/// Returns an error only if serialization fails. Malformed markup is not
/// an error.
pub fn annotate_html(html: &str, config: &AnnotateConfig) -> AnnotateResult<AnnotatedHtml> {
    annotate_bytes(html.as_bytes(), config)
}

/// Same as [`annotate_html`] for raw bytes; invalid UTF-8 is replaced, not rejected
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub fn annotate_bytes(bytes: &[u8], config: &AnnotateConfig) -> AnnotateResult<AnnotatedHtml> {
    let mut tree = RcDomTree::new(parse_html(bytes)?);
    let report = TableAnnotator::new(config).annotate(&mut tree);

    let serialized = serialize_document(tree.dom())?;
    let html = repair_comment_markers(&serialized);

    info!(
        "Annotated {} tables ({} captions inserted)",
        report.tables, report.captions
    );
    Ok(AnnotatedHtml { html, report })
}
