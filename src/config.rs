//! Bot configuration.
//!
//! Configuration is assembled once at startup from an optional `settings.toml`
//! next to the binary, a `.env` file, and the process environment, then handed
//! to the bot by value. Nothing in this crate keeps configuration in
//! module-level state.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default home token: the DRIP contract address on Solana.
pub const DEFAULT_HOME_TOKEN: &str = "w131jbryFvFEmtqmZvx42Meiuc4Drmu3nodTdVgkREV";

/// Environment variable holding the bot credential.
const TOKEN_ENV_VAR: &str = "TELEGRAM_TOKEN";

/// Optional settings file, looked up in the working directory.
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_TOKEN not set. Please set TELEGRAM_TOKEN as env var or in .env file.")]
    MissingToken,
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime configuration for the bot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Telegram bot token from @BotFather. Usually supplied via the
    /// environment; the settings file is accepted as a fallback.
    pub bot_token: String,
    /// Token contract address served by the bare /volume and /ratio commands.
    pub home_token: String,
    /// Symbol of the home token, used in the help text and volume summary.
    pub home_symbol: String,
    /// DexScreener request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Console log level (error/warn/info/debug/trace).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            home_token: DEFAULT_HOME_TOKEN.to_string(),
            home_symbol: "DRIP".to_string(),
            request_timeout_secs: crate::apis::dexscreener::TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// Order: `settings.toml` (if present), then a `.env` file, then the
    /// process environment. A `TELEGRAM_TOKEN` variable always wins over the
    /// settings file. A missing credential is a fatal startup condition.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(SETTINGS_FILE)
    }

    fn load_from(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.to_string(),
                source: e,
            })?;
            Self::parse_settings(&raw).map_err(|e| ConfigError::Parse {
                path: path.to_string(),
                source: e,
            })?
        } else {
            Self::default()
        };

        // Pull TELEGRAM_TOKEN from a .env file when the process environment
        // does not already provide it.
        let _ = dotenv::dotenv();

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                config.bot_token = token;
            }
        }

        if config.bot_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(config)
    }

    fn parse_settings(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
