//! Keypad input for the calculator display.
//!
//! A [`Keypad`] holds the text of the display. Every key press consumes the
//! current state and returns the next one, so a front end only has to keep
//! the latest value around and render [`Keypad::display`].

use crate::calculator::{EvalOptions, Operator, evaluate_with, format_result};
use crate::config::AppConfig;

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    LeftParen,
    RightParen,
    Operator(Operator),
    Clear,
    Backspace,
    Equals,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// Enter and `=` evaluate, backspace/delete erase, `c` and escape clear.
    /// Characters without a key return `None`.
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' => Self::Point,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '=' | '\n' | '\r' => Self::Equals,
            '\u{8}' | '\u{7f}' => Self::Backspace,
            'c' | 'C' | '\u{1b}' => Self::Clear,
            c => return Operator::from_char(c).map(Self::Operator),
        };
        Some(key)
    }
}

/// How the keypad evaluates and reports failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadOptions {
    pub eval: EvalOptions,
    /// Shown when evaluation fails.
    pub error_label: String,
    /// Show the error message instead of `error_label`.
    pub show_error_details: bool,
}

impl From<&AppConfig> for KeypadOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            eval: EvalOptions::from(config),
            error_label: config.error_label.clone(),
            show_error_details: config.show_error_details,
        }
    }
}

impl Default for KeypadOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

/// Evaluate `expression` and return the text a display should show.
pub fn display_outcome(expression: &str, options: &KeypadOptions) -> String {
    match evaluate_with(expression, &options.eval) {
        Ok(value) => format_result(value),
        Err(e) => {
            tracing::debug!(%e, expression, "Evaluation failed");
            if options.show_error_details {
                e.to_string()
            } else {
                options.error_label.clone()
            }
        }
    }
}

/// The calculator display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    display: String,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Apply one key press.
    #[must_use]
    pub fn press(mut self, key: Key, options: &KeypadOptions) -> Self {
        match key {
            Key::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.display.push(c);
                }
            }
            Key::Point => {
                if !self.current_number().contains('.') {
                    self.display.push('.');
                }
            }
            Key::LeftParen => self.display.push('('),
            Key::RightParen => self.display.push(')'),
            Key::Operator(op) => self.display.push_str(&format!(" {op} ")),
            Key::Clear => self.display.clear(),
            Key::Backspace => {
                self.display.pop();
            }
            Key::Equals => self.display = display_outcome(&self.display, options),
        }
        self
    }

    /// Press the key for every character of `keys`, ignoring characters
    /// that have none.
    #[must_use]
    pub fn type_str(self, keys: &str, options: &KeypadOptions) -> Self {
        keys.chars()
            .filter_map(Key::from_char)
            .fold(self, |keypad, key| keypad.press(key, options))
    }

    /// The numeric literal being typed at the end of the display.
    fn current_number(&self) -> &str {
        let start = self
            .display
            .char_indices()
            .rev()
            .find(|&(_, c)| !(c.is_ascii_digit() || c == '.'))
            .map_or(0, |(idx, c)| idx + c.len_utf8());
        &self.display[start..]
    }
}
