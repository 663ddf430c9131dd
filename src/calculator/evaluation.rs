//! Expression evaluation using operator precedence.
//!
//! Numbers go onto an operand stack while operators and open parentheses
//! wait on an operator stack until precedence says they can be applied.
//! Both stacks belong to a single call and are dropped when it returns.

use crate::config::AppConfig;
use crate::error::{EvalError, MalformedExpression};

use super::token::{Operator, Token, Tokens};

/// Options that change how an expression is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Fail on characters outside the expression alphabet instead of
    /// skipping them.
    pub strict: bool,
}

impl From<&AppConfig> for EvalOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            strict: config.strict,
        }
    }
}

/// Evaluate an arithmetic expression with default options.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, &EvalOptions::default())
}

/// Evaluate an arithmetic expression.
///
/// Supports `+ - * /` with the usual precedence, left associativity and
/// parentheses. Fails with [`EvalError::DivisionByZero`] when a divisor is
/// exactly zero and with [`EvalError::Malformed`] for everything that cannot
/// be reduced to a single value.
pub fn evaluate_with(expression: &str, options: &EvalOptions) -> Result<f64, EvalError> {
    if expression.trim().is_empty() {
        return Err(MalformedExpression::Empty.into());
    }

    let mut stacks = Stacks::default();
    for token in Tokens::new(expression).strict(options.strict) {
        match token? {
            Token::Number(value) => stacks.operands.push(value),
            Token::LeftParen => stacks.operators.push(Pending::LeftParen),
            Token::RightParen => stacks.close_group()?,
            Token::Operator(op) => stacks.push_operator(op)?,
        }
    }

    let value = stacks.finish()?;
    tracing::debug!(expression, value, "Evaluated expression");
    Ok(value)
}

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    LeftParen,
    Operator(Operator),
}

#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    /// Pop two operands, apply `op` and push the result.
    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        let rhs = self
            .operands
            .pop()
            .ok_or(MalformedExpression::MissingOperand)?;
        let lhs = self
            .operands
            .pop()
            .ok_or(MalformedExpression::MissingOperand)?;

        let result = op.apply(lhs, rhs)?;
        tracing::trace!(%op, lhs, rhs, result, "Applied operator");
        self.operands.push(result);
        Ok(())
    }

    /// Apply everything back to the nearest `(` and discard it.
    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftParen) => return Ok(()),
                Some(Pending::Operator(op)) => self.apply(op)?,
                None => return Err(MalformedExpression::UnmatchedRightParen.into()),
            }
        }
    }

    /// Apply pending operators that bind at least as tightly, then queue `incoming`.
    fn push_operator(&mut self, incoming: Operator) -> Result<(), EvalError> {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < incoming.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(Pending::Operator(incoming));
        Ok(())
    }

    /// Drain the operator stack and take the single remaining operand.
    fn finish(mut self) -> Result<f64, EvalError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::LeftParen => return Err(MalformedExpression::UnmatchedLeftParen.into()),
                Pending::Operator(op) => self.apply(op)?,
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(MalformedExpression::MissingOperand.into()),
            _ => Err(MalformedExpression::MissingOperator.into()),
        }
    }
}
