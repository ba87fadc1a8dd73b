//! Conversion configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Class marking the panel body that holds the convertible content.
pub const DEFAULT_CONTAINER_CLASS: &str = "mat-expansion-panel-body";

/// Class token that marks a math widget as inline.
pub const DEFAULT_INLINE_CLASS: &str = "inline";

/// Deepest element nesting the emitter will descend into.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for HTML to LaTeX conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Class of the `div` treated as the content root
    pub container_class: String,
    /// Class token selecting inline math for a widget
    pub inline_class: String,
    /// Maximum element depth; deeper subtrees are skipped with a warning
    pub max_depth: usize,
    /// Wrap the output in the article preamble and postamble
    pub standalone: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            inline_class: DEFAULT_INLINE_CLASS.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            standalone: false,
        }
    }
}

impl ConversionConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ConversionConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Config {
            message: format!("failed to read '{}': {}", path.display(), e),
        })?;
        Self::from_json(&content)
    }

    /// Enable or disable the preamble/postamble wrapper.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Override the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ConvertError::Config {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        if self.container_class.split_whitespace().count() != 1 {
            return Err(ConvertError::Config {
                message: format!(
                    "container_class must be a single class token, got '{}'",
                    self.container_class
                ),
            });
        }
        if self.inline_class.split_whitespace().count() != 1 {
            return Err(ConvertError::Config {
                message: format!(
                    "inline_class must be a single class token, got '{}'",
                    self.inline_class
                ),
            });
        }
        Ok(())
    }
}
