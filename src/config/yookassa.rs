//! Payment processor configuration (YooKassa)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment processor configuration.
///
/// Credentials are deployment-provided; a request reaching the processor
/// adapter without them is answered as a configuration error, never as a
/// client error.
#[derive(Debug, Clone, Deserialize)]
pub struct YookassaConfig {
    /// Shop identifier for Basic authentication
    #[serde(default)]
    pub shop_id: String,

    /// Secret key for Basic authentication
    #[serde(default)]
    pub secret_key: String,

    /// Base URL for the processor API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Fixed return URL the buyer lands on after checkout
    #[serde(default)]
    pub return_url: String,

    /// Currency substituted when a request does not name one
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Description substituted when a request does not carry one
    #[serde(default = "default_description")]
    pub default_description: String,
}

impl YookassaConfig {
    /// Check whether Basic-auth credentials are present
    pub fn credentials_configured(&self) -> bool {
        !self.shop_id.is_empty() && !self.secret_key.is_empty()
    }

    /// Validate processor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.shop_id.is_empty() {
            return Err(ValidationError::MissingRequired(
                "KASSA_BRIDGE__YOOKASSA__SHOP_ID",
            ));
        }
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired(
                "KASSA_BRIDGE__YOOKASSA__SECRET_KEY",
            ));
        }
        if self.return_url.is_empty() {
            return Err(ValidationError::MissingRequired(
                "KASSA_BRIDGE__YOOKASSA__RETURN_URL",
            ));
        }
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidProcessorBaseUrl);
        }
        if !is_http_url(&self.return_url) {
            return Err(ValidationError::InvalidReturnUrl);
        }
        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for YookassaConfig {
    fn default() -> Self {
        Self {
            shop_id: String::new(),
            secret_key: String::new(),
            api_base_url: default_api_base_url(),
            return_url: String::new(),
            default_currency: default_currency(),
            default_description: default_description(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_api_base_url() -> String {
    "https://api.yookassa.ru".to_string()
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_description() -> String {
    "Оплата заказа".to_string()
}
