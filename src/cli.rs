use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "location-picker", version)]
#[command(about = "Pick a Brazilian state and one of its municipalities")]
pub struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the geography service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive picker (the default)
    Pick,
    /// Print every state, sorted by code
    States,
    /// Print the municipalities of one state, sorted by name
    Municipalities {
        /// State code, e.g. SP
        code: String,
    },
}

impl Cli {
    /// Loads the config file and applies command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Pick)
    }
}
