//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Scan an expression into numbers, operators and parentheses
//! - Evaluate it with `*`/`/` binding tighter than `+`/`-`
//! - Format results for display

mod evaluation;
mod format;
mod token;

pub use evaluation::{EvalOptions, evaluate, evaluate_with};
pub use format::format_result;
pub use token::{Operator, Token, Tokens};
