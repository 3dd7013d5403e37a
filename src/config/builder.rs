//! Fluent builder for `AnnotateConfig`

use crate::error::AnnotateResult;

use super::types::{AnnotateConfig, IdScheme};

#[derive(Debug, Clone, Default)]
pub struct AnnotateConfigBuilder {
    pub(crate) config: AnnotateConfig,
}

impl AnnotateConfig {
    /// Create a builder for configuring an `AnnotateConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> AnnotateConfigBuilder {
        AnnotateConfigBuilder::default()
    }
}

impl From<AnnotateConfig> for AnnotateConfigBuilder {
    fn from(config: AnnotateConfig) -> Self {
        Self { config }
    }
}

impl AnnotateConfigBuilder {
    #[must_use]
    pub fn insert_placeholder_caption(mut self, insert: bool) -> Self {
        self.config.insert_placeholder_caption = insert;
        self
    }

    /// Choose whether the first cell of each data row becomes a `th`
    ///
    /// Either way the cell is given the row id and `scope="row"`; this only
    /// controls the tag name.
    #[must_use]
    pub fn convert_row_header_cell_tag(mut self, convert: bool) -> Self {
        self.config.convert_row_header_cell_tag = convert;
        self
    }

    #[must_use]
    pub fn match_existing_header_cells(mut self, matching: bool) -> Self {
        self.config.match_existing_header_cells = matching;
        self
    }

    #[must_use]
    pub fn caption_text(mut self, text: impl Into<String>) -> Self {
        self.config.caption_text = text.into();
        self
    }

    #[must_use]
    pub fn id_scheme(mut self, scheme: IdScheme) -> Self {
        self.config.id_scheme = scheme;
        self
    }

    #[must_use]
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.config.max_input_bytes = bytes;
        self
    }

    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::InvalidConfig` if caption insertion is enabled
    /// with blank caption text, or if `max_input_bytes` is zero.
    pub fn build(self) -> AnnotateResult<AnnotateConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
