//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `KASSA_BRIDGE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use kassa_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod notify;
mod server;
mod yookassa;

pub use error::{ConfigError, ValidationError};
pub use notify::NotifyConfig;
pub use server::ServerConfig;
pub use yookassa::YookassaConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the kassa-bridge service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment processor configuration (credentials, defaults)
    #[serde(default)]
    pub yookassa: YookassaConfig,

    /// Downstream notification endpoints
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `KASSA_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KASSA_BRIDGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `KASSA_BRIDGE__YOOKASSA__SHOP_ID=...` -> `yookassa.shop_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KASSA_BRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Missing processor credentials or notification endpoints are deployment
    /// errors; the process refuses to start rather than answering every
    /// payment request with a configuration failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.yookassa.validate()?;
        self.notify.validate()?;
        Ok(())
    }
}
