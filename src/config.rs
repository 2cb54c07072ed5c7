//! Configuration loading and validation.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{ChatStatsError, Result};

/// Application configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Transcript input settings
    pub input: InputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Report section limits
    pub report: ReportConfig,
}

/// Where the transcript is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the exported transcript file
    pub path: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

/// How many entries each ranked report section shows.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Entries in the word section
    pub top_words: usize,
    /// Entries in the emoji section
    pub top_emojis: usize,
    /// Entries in the busy-hours section
    pub top_hours: usize,
    /// Entries in the busy-days section
    pub top_days: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: "chat.txt".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            report: ReportConfig {
                top_words: 100,
                top_emojis: 10,
                top_hours: 5,
                top_days: 3,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and
    /// `CHAT_STATS_*` environment variables, in that precedence order.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("input.path", defaults.input.path)
            .and_then(|b| b.set_default("logging.level", defaults.logging.level))
            .and_then(|b| b.set_default("report.top_words", defaults.report.top_words as u64))
            .and_then(|b| b.set_default("report.top_emojis", defaults.report.top_emojis as u64))
            .and_then(|b| b.set_default("report.top_hours", defaults.report.top_hours as u64))
            .and_then(|b| b.set_default("report.top_days", defaults.report.top_days as u64))
            .map_err(|e| ChatStatsError::Config(format!("failed to set defaults: {e}")))?
            .add_source(File::with_name("chat-stats").required(false))
            .add_source(Environment::with_prefix("CHAT_STATS").separator("_"))
            .build()
            .map_err(|e| ChatStatsError::Config(format!("failed to load configuration: {e}")))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| ChatStatsError::Config(format!("failed to deserialize configuration: {e}")))?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.path.trim().is_empty() {
            return Err(ChatStatsError::Config(
                "input.path must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ChatStatsError::Config(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                self.logging.level
            )));
        }

        for (name, limit) in [
            ("report.top_words", self.report.top_words),
            ("report.top_emojis", self.report.top_emojis),
            ("report.top_hours", self.report.top_hours),
            ("report.top_days", self.report.top_days),
        ] {
            if limit == 0 {
                return Err(ChatStatsError::Config(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        Ok(())
    }
}
