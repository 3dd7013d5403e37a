//! File-to-file table rewriting.
//!
//! Reads one HTML file, annotates its tables and writes the result to a
//! second file. The output is written to a temporary file next to the
//! target and renamed into place, so a failed run never leaves a
//! half-written output behind. The output keeps the mode of the file it
//! replaces; a new output is world-readable.

use std::fs::{File, Permissions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::Builder;
use tracing::{debug, info};

use crate::annotator::AnnotationReport;
use crate::config::AnnotateConfig;
use crate::document::annotate_bytes;
use crate::error::{AnnotateError, AnnotateResult};
use crate::utils::{DEFAULT_OUTPUT_SUFFIX, OUTPUT_EXTENSION};

/// Outcome of a successful [`rewrite_html_tables`] run
#[derive(Debug, Clone, Serialize)]
pub struct RewriteSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_written: usize,
    pub report: AnnotationReport,
}

/// Rewrite every table in `input` and write the document to `output`
///
/// `output` is overwritten if it exists. The written text always ends
/// with a newline.
///
/// # Errors
///
/// - `AnnotateError::InputRead` if `input` is missing or unreadable
/// - `AnnotateError::InputTooLarge` if it exceeds `config.max_input_bytes()`
/// - `AnnotateError::OutputWrite` if `output` cannot be written
pub fn rewrite_html_tables(
    input: &Path,
    output: &Path,
    config: &AnnotateConfig,
) -> AnnotateResult<RewriteSummary> {
    info!("Rewriting tables in {}", input.display());

    let bytes = read_input(input, config.max_input_bytes())?;
    let annotated = annotate_bytes(&bytes, config)?;

    let mut html = annotated.html;
    if !html.ends_with('\n') {
        html.push('\n');
    }
    write_atomically(output, html.as_bytes())?;

    info!("Output is in {}", output.display());
    Ok(RewriteSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes_written: html.len(),
        report: annotated.report,
    })
}

/// Output path used when none is given: `<stem>_2.html` beside the input
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}"))
}

fn read_input(path: &Path, limit: usize) -> AnnotateResult<Vec<u8>> {
    let input_error = |source| AnnotateError::InputRead {
        path: path.to_path_buf(),
        source,
    };
    let too_large = |size| AnnotateError::InputTooLarge {
        path: path.to_path_buf(),
        size,
        limit,
    };

    let file = File::open(path).map_err(input_error)?;
    let size = file.metadata().map_err(input_error)?.len();
    if size > limit as u64 {
        return Err(too_large(size));
    }

    // The file may grow after the metadata check; never read past the limit.
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(limit));
    file.take(limit as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(input_error)?;
    if bytes.len() > limit {
        return Err(too_large(bytes.len() as u64));
    }

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

fn write_atomically(path: &Path, content: &[u8]) -> AnnotateResult<()> {
    let output_error = |source| AnnotateError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    if let Some(permissions) = output_permissions(path) {
        builder.permissions(permissions);
    }
    let mut temp_file = builder.tempfile_in(parent_dir).map_err(output_error)?;
    temp_file.write_all(content).map_err(output_error)?;

    // Atomic rename to final path
    temp_file
        .persist(path)
        .map_err(|persist_error| output_error(persist_error.error))?;
    Ok(())
}

/// Mode for the output: that of the file being replaced, else 0o644 on unix
fn output_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
