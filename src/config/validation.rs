//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// Longest error label that still reads well in a one-line display.
const MAX_ERROR_LABEL_LEN: usize = 32;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - An empty or overly long error label
/// - An error label spanning several lines
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];
    let label = &config.error_label;

    if label.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "error_label".to_string(),
            message: "Error label is empty. Failed evaluations will show a blank display."
                .to_string(),
        });
    } else if label.chars().count() > MAX_ERROR_LABEL_LEN {
        warnings.push(ValidationWarning {
            field: "error_label".to_string(),
            message: format!(
                "Error label is {} characters long (recommended at most {}).",
                label.chars().count(),
                MAX_ERROR_LABEL_LEN
            ),
        });
    }

    if label.contains('\n') {
        warnings.push(ValidationWarning {
            field: "error_label".to_string(),
            message: "Error label contains a line break.".to_string(),
        });
    }

    warnings
}
