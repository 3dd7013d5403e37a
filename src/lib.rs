pub mod annotator;
pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod rewrite;
pub mod utils;

pub use annotator::{AnnotationReport, TableAnnotator};
pub use config::{AnnotateConfig, AnnotateConfigBuilder, IdScheme};
pub use document::{
    AnnotatedHtml, annotate_bytes, annotate_html, parse_html, repair_comment_markers,
    serialize_document,
};
pub use dom::{RcDomTree, TableDom};
pub use error::{AnnotateError, AnnotateResult};
pub use rewrite::{RewriteSummary, default_output_path, rewrite_html_tables};
