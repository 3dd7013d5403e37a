//! Configuration module for table annotation
//!
//! This module provides the `AnnotateConfig` struct and its builder for
//! choosing between the caption/row-header behaviours and the id scheme.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::AnnotateConfigBuilder;
pub use types::{AnnotateConfig, IdScheme};
