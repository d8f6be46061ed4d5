//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Processor API base URL must be http(s)")]
    InvalidProcessorBaseUrl,

    #[error("Return URL must be http(s)")]
    InvalidReturnUrl,

    #[error("Storefront notification URL must be http(s)")]
    InvalidStorefrontUrl,

    #[error("Ledger sink URL must be http(s)")]
    InvalidLedgerUrl,

    #[error("Default currency must be a three-letter ISO 4217 code")]
    InvalidCurrency,
}
