//! Settings parser for .chatbox/config.toml

use super::types::Settings;
use chatbox_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CHATBOX_DIR: &str = ".chatbox";

/// Path of the project config file under `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CHATBOX_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .chatbox/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    read_settings(&config_path)
}

/// Load settings from an explicitly named file.
///
/// Unlike [`load_settings`], a missing file is an error: the user asked for it.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    Ok(read_settings(path))
}

fn read_settings(config_path: &Path) -> Settings {
    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in .chatbox/, returning its path.
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let chatbox_dir = project_path.join(CHATBOX_DIR);

    if !chatbox_dir.exists() {
        std::fs::create_dir_all(&chatbox_dir)
            .map_err(|e| Error::config(format!("Failed to create .chatbox dir: {}", e)))?;
    }

    let config_path = chatbox_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(config_path)
}

const DEFAULT_CONFIG: &str = r#"# chatbox configuration

[backend]
endpoint = "http://localhost:5001/api/ask"

[session]
mode = "consult"          # "consult" (doctor + patient) or "demo" (single user)
show_background = true    # Ask for patient background before the first message

[data_collection]
# Append every feedback snapshot to this file as JSON lines.
# path = "feedback.jsonl"

[ui]
show_key_hints = true
"#;
