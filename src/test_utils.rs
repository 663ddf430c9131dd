//! Test utilities and mock factories.
//!
//! This module provides common testing helpers for expressions and config.
//! Only compiled in test builds.

use crate::calculator::evaluate;
use crate::config::AppConfig;
use crate::error::{EvalError, MalformedExpression};

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create a mock AppConfig that rejects unknown characters.
pub fn mock_strict_config() -> AppConfig {
    AppConfig {
        strict: true,
        ..AppConfig::default()
    }
}

/// Assert that `expression` evaluates to `expected` within floating-point tolerance.
#[track_caller]
pub fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => assert!(
            (value - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
            "'{}' evaluated to {}, expected {}",
            expression,
            value,
            expected
        ),
        Err(e) => panic!("'{}' failed to evaluate: {}", expression, e),
    }
}

/// Assert that `expression` is malformed for the given reason.
#[track_caller]
pub fn assert_malformed(expression: &str, reason: MalformedExpression) {
    assert_eq!(
        evaluate(expression),
        Err(EvalError::Malformed(reason)),
        "unexpected outcome for '{}'",
        expression
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_config() {
        let config = mock_config();
        assert!(!config.strict);
        assert_eq!(config.error_label, "Error");
    }

    #[test]
    fn test_mock_strict_config() {
        assert!(mock_strict_config().strict);
    }

    #[test]
    fn test_assert_evaluates_accepts_rounding() {
        assert_evaluates("0.1 + 0.2", 0.3);
    }

    #[test]
    #[should_panic(expected = "failed to evaluate")]
    fn test_assert_evaluates_panics_on_error() {
        assert_evaluates("1/0", 0.0);
    }
}
