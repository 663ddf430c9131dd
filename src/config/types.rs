//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Label shown in place of a result when evaluation fails.
pub const DEFAULT_ERROR_LABEL: &str = "Error";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reject characters that are not part of an expression instead of skipping them.
    pub strict: bool,
    /// Text shown when an expression cannot be evaluated.
    pub error_label: String,
    /// Show the error message itself rather than `error_label`.
    pub show_error_details: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strict: false,
            error_label: DEFAULT_ERROR_LABEL.to_string(),
            show_error_details: false,
        }
    }
}
