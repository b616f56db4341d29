//! Run configuration.

use conceptdoc_core::SOURCE_EXTENSION;
use conceptdoc_renderer::OUTPUT_EXTENSION;

/// Settings for a generate run. The CLI always uses [`GenerateConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Extension (without the dot) of concept records to pick up.
    pub source_extension: String,
    /// Extension (without the dot) of the notes to write.
    pub output_extension: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            source_extension: SOURCE_EXTENSION.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }
}
