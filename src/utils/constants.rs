//! Shared configuration constants for tablenav
//!
//! This module contains default values used throughout the codebase to
//! ensure consistency and avoid magic strings.

/// Placeholder text for inserted `<caption>` elements
///
/// Meant to be searched for and replaced by a human editor after the
/// rewrite, so it is deliberately loud.
pub const DEFAULT_CAPTION_TEXT: &str = "PLACEHOLDER TEXT FOR TABLE CAPTION";

/// Maximum input size: 10 MB
///
/// Documents are parsed fully into memory before the table pass runs.
/// Anything larger than this is almost certainly not a hand-authored page.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Suffix appended to the input file stem when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_2";

/// Extension of generated output files
pub const OUTPUT_EXTENSION: &str = "html";
