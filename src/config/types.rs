//! Core configuration types for table annotation
//!
//! `AnnotateConfig` is serde-friendly so a run can be driven from a JSON
//! file; every field has a default and may be omitted there.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AnnotateError, AnnotateResult};
use crate::utils::{DEFAULT_CAPTION_TEXT, DEFAULT_MAX_INPUT_BYTES};

/// Naming scheme for the generated table, column and row ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// `_table_1`, `_table_1_col_2`, `_table_1_row_3`
    #[default]
    Verbose,
    /// `_t_1`, `_t_1_c_2`, `_t_1_r_3`
    Compact,
}

/// Main configuration struct for table annotation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    /// Insert a `<caption>` with placeholder text before each table's first row
    pub(crate) insert_placeholder_caption: bool,

    /// Re-tag the first cell of every data row from `td` to `th`.
    ///
    /// When disabled the cell keeps its `td` tag but still receives the
    /// row `id` and `scope="row"`.
    pub(crate) convert_row_header_cell_tag: bool,

    /// Treat cells that are already `<th>` as table cells too.
    ///
    /// Off by default: only `<td>` elements count as cells. Turning it on
    /// gives authored header cells ids and makes re-running the pass on its
    /// own output a no-op.
    pub(crate) match_existing_header_cells: bool,

    /// Text placed inside inserted captions
    pub(crate) caption_text: String,

    pub(crate) id_scheme: IdScheme,

    /// Inputs larger than this are rejected before parsing
    pub(crate) max_input_bytes: usize,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            insert_placeholder_caption: true,
            convert_row_header_cell_tag: true,
            match_existing_header_cells: false,
            caption_text: DEFAULT_CAPTION_TEXT.to_string(),
            id_scheme: IdScheme::Verbose,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl AnnotateConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing fields take their defaults. The loaded values go through the
    /// same validation as [`AnnotateConfigBuilder::build`](super::AnnotateConfigBuilder::build).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values that fail validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AnnotateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnnotateConfig =
            serde_json::from_str(&raw).map_err(|source| AnnotateError::ConfigFile {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!("Loaded annotation config from {}", path.display());
        Ok(config)
    }

    pub(crate) fn validate(&self) -> AnnotateResult<()> {
        if self.insert_placeholder_caption && self.caption_text.trim().is_empty() {
            return Err(AnnotateError::InvalidConfig(
                "caption_text must not be empty when caption insertion is enabled".to_string(),
            ));
        }
        if self.max_input_bytes == 0 {
            return Err(AnnotateError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
