//! Lexical scanning of calculator expressions.
//!
//! Tokens are produced lazily, one per call to [`Iterator::next`], in a
//! single left-to-right pass over the input.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{EvalError, MalformedExpression};

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map an operator character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength. `*` and `/` outrank `+` and `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Compute `lhs <op> rhs`.
    ///
    /// Division by exactly zero is an error rather than an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// Lazy token stream over an expression string.
///
/// Whitespace is skipped. Characters outside the expression alphabet are
/// skipped as well unless the stream is [`strict`](Tokens::strict), in which
/// case they yield [`MalformedExpression::UnexpectedCharacter`].
pub struct Tokens<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    strict: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            strict: false,
        }
    }

    /// Reject unrecognized characters instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Consume the rest of a numeric literal whose first character sits at `start`.
    fn number(&mut self, start: usize) -> Result<Token, EvalError> {
        let mut end = start + 1;
        while let Some(&(idx, c)) = self.chars.peek() {
            if !is_number_char(c) {
                break;
            }
            end = idx + c.len_utf8();
            self.chars.next();
        }

        let literal = &self.input[start..end];
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| MalformedExpression::InvalidNumber(literal.to_string()).into())
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, c)) = self.chars.next() {
            let token = match c {
                c if c.is_whitespace() => continue,
                c if is_number_char(c) => return Some(self.number(idx)),
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                c => match Operator::from_char(c) {
                    Some(op) => Token::Operator(op),
                    None if self.strict => {
                        return Some(Err(MalformedExpression::UnexpectedCharacter {
                            character: c,
                            position: idx,
                        }
                        .into()));
                    }
                    None => {
                        tracing::debug!(
                            character = %c,
                            position = idx,
                            "Skipping unrecognized character"
                        );
                        continue;
                    }
                },
            };
            return Some(Ok(token));
        }
        None
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<Token> {
        Tokens::new(input).collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[test]
    fn test_scans_numbers_operators_and_parens() {
        assert_eq!(
            scan("(12 + 3.5) * .5"),
            vec![
                Token::LeftParen,
                Token::Number(12.0),
                Token::Operator(Operator::Add),
                Token::Number(3.5),
                Token::RightParen,
                Token::Operator(Operator::Mul),
                Token::Number(0.5),
            ]
        );
    }

    #[test]
    fn test_numbers_need_no_surrounding_spaces() {
        assert_eq!(
            scan("7/2-1"),
            vec![
                Token::Number(7.0),
                Token::Operator(Operator::Div),
                Token::Number(2.0),
                Token::Operator(Operator::Sub),
                Token::Number(1.0),
            ]
        );
    }

    #[test]
    fn test_trailing_point_is_a_number() {
        assert_eq!(scan("5."), vec![Token::Number(5.0)]);
    }

    #[test]
    fn test_two_points_is_invalid_number() {
        let mut tokens = Tokens::new("1.2.3 + 4");
        assert_eq!(
            tokens.next(),
            Some(Err(EvalError::Malformed(MalformedExpression::InvalidNumber(
                "1.2.3".to_string()
            ))))
        );
    }

    #[test]
    fn test_lone_point_is_invalid_number() {
        let mut tokens = Tokens::new(".");
        assert!(matches!(
            tokens.next(),
            Some(Err(EvalError::Malformed(MalformedExpression::InvalidNumber(_))))
        ));
    }

    #[test]
    fn test_unknown_characters_skipped_by_default() {
        assert_eq!(scan("1 x 2"), vec![Token::Number(1.0), Token::Number(2.0)]);
    }

    #[test]
    fn test_unknown_characters_rejected_when_strict() {
        let result: Result<Vec<_>, _> = Tokens::new("1 x 2").strict(true).collect();
        assert_eq!(
            result,
            Err(EvalError::Malformed(MalformedExpression::UnexpectedCharacter {
                character: 'x',
                position: 2,
            }))
        );
    }

    #[test]
    fn test_precedence_tiers() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn test_apply_keeps_operand_order() {
        assert_eq!(Operator::Sub.apply(10.0, 4.0), Ok(6.0));
        assert_eq!(Operator::Div.apply(1.0, 4.0), Ok(0.25));
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, -0.0), Err(EvalError::DivisionByZero));
    }
}
