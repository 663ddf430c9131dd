//! Application configuration.
//!
//! Settings live in `~/.config/stackcalc/config.toml`. Every key is optional.

mod service;
mod types;
mod validation;

pub use service::{config, config_dir, config_path, init_config, read_config};
pub use types::{AppConfig, DEFAULT_ERROR_LABEL};
pub use validation::{ValidationWarning, validate_config};
