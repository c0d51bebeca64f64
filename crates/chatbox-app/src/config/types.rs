//! Configuration types for chatbox
//!
//! Defines:
//! - `Settings` - Application settings from `.chatbox/config.toml`
//! - `ChatMode` - Which conversation protocol the session speaks

use chatbox_api::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Conversation protocol spoken with the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Two-party doctor/patient consultation with feedback panes
    #[default]
    Consult,
    /// Single-user chat with question chips
    Demo,
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::Consult => write!(f, "consult"),
            ChatMode::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for ChatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consult" => Ok(ChatMode::Consult),
            "demo" => Ok(ChatMode::Demo),
            other => Err(format!("unknown mode {other:?} (expected consult or demo)")),
        }
    }
}

/// Application settings (.chatbox/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub data_collection: DataCollectionSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// URL the ask requests are POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Session behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionSettings {
    #[serde(default)]
    pub mode: ChatMode,

    /// Ask for patient background before the first message
    #[serde(default = "default_true")]
    pub show_background: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: ChatMode::default(),
            show_background: true,
        }
    }
}

/// Feedback export settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataCollectionSettings {
    /// JSON-lines file snapshots are appended to. Unset disables the export.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
