use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::RcDom;
use tracing::debug;

use crate::error::{AnnotateError, AnnotateResult};

/// Parse an HTML document with html5ever's error-recovering tree builder
///
/// Input is decoded as UTF-8 with replacement characters for invalid
/// sequences. Markup errors are recovered from and only logged.
///
/// # Errors
///
/// Only if the in-memory reader fails, which does not happen for byte
/// slices in practice.
pub fn parse_html(bytes: &[u8]) -> AnnotateResult<RcDom> {
    let mut reader = bytes;
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut reader)
        .map_err(|e| AnnotateError::Other(format!("Failed to read HTML for parsing: {e}")))?;

    let recovered = dom.errors.borrow().len();
    if recovered > 0 {
        debug!("HTML parser recovered from {recovered} markup errors");
    }
    Ok(dom)
}
