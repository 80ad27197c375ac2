mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod tenant_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use tenant_config::TenantConfig;

const CONFIG_DIR_ENV: &str = "TG_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".tg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
const MIN_MAX_BODY_BYTES: usize = 1024;
const MAX_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const DEFAULT_ALLOWED_TENANTS: [&str; 2] = ["microsoft.com", "contoso.com"];

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
