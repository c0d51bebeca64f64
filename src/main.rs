//! chatbox - terminal consultation assistant
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use chatbox_app::config::{self, ChatMode, Settings};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

/// chatbox - AI-assisted doctor/patient consultation in the terminal
#[derive(Parser, Debug)]
#[command(name = "chatbox", version)]
#[command(about = "Terminal consultation assistant for AI chat sessions", long_about = None)]
struct Args {
    /// Conversation mode: consult (doctor + patient) or demo (single user)
    #[arg(long, value_name = "MODE")]
    mode: Option<ChatMode>,

    /// Backend URL the ask requests are POSTed to
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to use instead of .chatbox/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append feedback snapshots to this JSON-lines file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default .chatbox/config.toml in the current directory
    Init,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(mode) = self.mode {
            settings.session.mode = mode;
        }
        if let Some(endpoint) = &self.endpoint {
            settings.backend.endpoint = endpoint.clone();
        }
        if let Some(record) = &self.record {
            settings.data_collection.path = Some(record.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(Command::Init) = args.command {
        let path = config::init_config_dir(&cwd)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    chatbox_core::logging::init()?;

    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(&cwd),
    };
    args.apply_overrides(&mut settings);

    chatbox_tui::run(settings).await?;
    Ok(())
}
