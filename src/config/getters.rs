//! Getter methods for `AnnotateConfig`

use super::types::{AnnotateConfig, IdScheme};

impl AnnotateConfig {
    #[must_use]
    pub fn insert_placeholder_caption(&self) -> bool {
        self.insert_placeholder_caption
    }

    #[must_use]
    pub fn convert_row_header_cell_tag(&self) -> bool {
        self.convert_row_header_cell_tag
    }

    #[must_use]
    pub fn match_existing_header_cells(&self) -> bool {
        self.match_existing_header_cells
    }

    #[must_use]
    pub fn caption_text(&self) -> &str {
        &self.caption_text
    }

    #[must_use]
    pub fn id_scheme(&self) -> IdScheme {
        self.id_scheme
    }

    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }
}
