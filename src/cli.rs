use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::calculator::{EvalOptions, evaluate_with, format_result};
use crate::config::init_config;
use crate::keypad::{Keypad, KeypadOptions, display_outcome};

#[derive(Parser)]
#[command(name = "stackcalc")]
#[command(about = "Evaluate arithmetic expressions with + - * / and parentheses")]
pub struct Cli {
    /// Expression to evaluate, e.g. "(2 + 3) * 4"
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Reject characters that are not part of an expression
    #[arg(long)]
    pub strict: bool,

    /// Read settings from this file instead of ~/.config/stackcalc/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type keystrokes on the keypad and print the display
    Keys {
        /// Keystrokes, e.g. "2+3*4="
        #[arg(allow_hyphen_values = true)]
        keystrokes: String,
    },
    /// Evaluate one expression per line from stdin
    Repl,
}

impl Cli {
    /// Run the parsed command line.
    pub fn run(self) -> Result<()> {
        let config = init_config(self.config.as_deref())?;
        let mut options = KeypadOptions::from(config);
        if self.strict {
            options.eval.strict = true;
        }

        match (self.command, self.expression) {
            (Some(Commands::Keys { keystrokes }), _) => {
                let keypad = Keypad::new().type_str(&keystrokes, &options);
                println!("{}", keypad.display());
                Ok(())
            }
            (Some(Commands::Repl), _) | (None, None) => {
                repl(io::stdin().lock(), io::stdout().lock(), &options)
            }
            (None, Some(expression)) => {
                println!("{}", evaluate_once(&expression, &options.eval)?);
                Ok(())
            }
        }
    }
}

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only warnings from this crate by default, on stderr so stdout holds results.
    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stackcalc=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Evaluate a single expression and format the result.
fn evaluate_once(expression: &str, options: &EvalOptions) -> Result<String> {
    let value = evaluate_with(expression, options)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;
    Ok(format_result(value))
}

/// Evaluate each non-blank input line, writing one output line per expression.
fn repl(input: impl BufRead, mut output: impl Write, options: &KeypadOptions) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", display_outcome(&line, options))?;
    }
    output.flush()?;
    Ok(())
}
