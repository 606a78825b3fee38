mod api_config;
mod config;
mod error;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};

const DEFAULT_BASE_URL: &str = "https://api.timetrack.io/api/v1";
const CONFIG_DIR_NAME: &str = ".timetrack";
const CONFIG_FILE_NAME: &str = "config.toml";
