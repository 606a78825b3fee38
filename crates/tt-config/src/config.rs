use crate::{ApiConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TT_CONFIG_DIR env var, else use ./.timetrack/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TT_* environment variable overrides
    /// 5. Check for legacy ~/.timetrack/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.warn_on_legacy_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TT_CONFIG_DIR env var > ./.timetrack/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TT_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.base_url);
        info!(
            "  api key: {}",
            if self.api.api_key.is_some() {
                "set"
            } else {
                "unset"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_string("TT_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("TT_API_KEY", &mut self.api.api_key);
    }

    /// Old releases read ~/.timetrack/config.toml; the file is no longer
    /// consulted unless TT_CONFIG_DIR points at it.
    fn warn_on_legacy_config(&self, config_dir: &PathBuf) {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let legacy_dir = home.join(CONFIG_DIR_NAME);
        if legacy_dir == *config_dir {
            return;
        }

        if legacy_dir.join(CONFIG_FILE_NAME).exists() {
            warn!(
                "Ignoring legacy config at {}; set TT_CONFIG_DIR to use it",
                legacy_dir.join(CONFIG_FILE_NAME).display()
            );
        }
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            *target = value;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(key) {
            *target = Some(value);
        }
    }
}
