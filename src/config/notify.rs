//! Downstream notification configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::yookassa::is_http_url;

/// Endpoints the webhook reconciler fans out to.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Storefront platform endpoint receiving `{payment_key, status}`
    #[serde(default = "default_storefront_url")]
    pub storefront_url: String,

    /// Record-keeping sink receiving the full ledger entry
    #[serde(default)]
    pub ledger_url: String,
}

impl NotifyConfig {
    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.storefront_url) {
            return Err(ValidationError::InvalidStorefrontUrl);
        }
        if self.ledger_url.is_empty() {
            return Err(ValidationError::MissingRequired(
                "KASSA_BRIDGE__NOTIFY__LEDGER_URL",
            ));
        }
        if !is_http_url(&self.ledger_url) {
            return Err(ValidationError::InvalidLedgerUrl);
        }
        Ok(())
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            storefront_url: default_storefront_url(),
            ledger_url: String::new(),
        }
    }
}

fn default_storefront_url() -> String {
    "https://api.creatium.io/integration-payment/third-party-payment".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = NotifyConfig {
            ledger_url: "https://sheets.example/record".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_ledger_url_is_rejected() {
        let config = NotifyConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn non_http_ledger_url_is_rejected() {
        let config = NotifyConfig {
            ledger_url: "not-a-url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLedgerUrl)
        ));
    }

    #[test]
    fn storefront_url_has_platform_default() {
        let config = NotifyConfig::default();
        assert!(config.storefront_url.starts_with("https://"));
    }
}
