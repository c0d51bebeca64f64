//! Configuration file parsing for chatbox
//!
//! Supports `.chatbox/config.toml` in the working directory, or any file
//! passed with `--config`.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;
