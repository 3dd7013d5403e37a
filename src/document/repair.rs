/// Restore comment markers that the serializer escaped inside text
///
/// Text nodes holding `<!--` or `-->` come out of serialization as
/// `&lt;!--` and `--&gt;`. Must run exactly once, over the complete
/// serialized document, after all DOM edits.
#[must_use]
pub fn repair_comment_markers(html: &str) -> String {
    html.replace("&lt;!--", "<!--").replace("--&gt;", "-->")
}
