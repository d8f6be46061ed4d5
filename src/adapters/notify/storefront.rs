//! Storefront platform notifier.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::payment::PaymentStatus;
use crate::ports::{NotifyError, StorefrontNotifier};

const TARGET: &str = "storefront";

/// Notifies the storefront platform of a normalized payment outcome.
pub struct HttpStorefrontNotifier {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpStorefrontNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }
}

/// Wire body for the storefront notification.
#[derive(Debug, Serialize)]
struct StatusNotificationBody<'a> {
    payment_key: &'a str,
    status: PaymentStatus,
}

#[async_trait]
impl StorefrontNotifier for HttpStorefrontNotifier {
    async fn notify_status(
        &self,
        payment_key: &str,
        status: PaymentStatus,
    ) -> Result<(), NotifyError> {
        let body = StatusNotificationBody {
            payment_key,
            status,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::new(TARGET, e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::new(
                TARGET,
                format!("endpoint answered {}", response.status()),
            ));
        }

        tracing::debug!(payment_key = %payment_key, status = %status, "Storefront notified");
        Ok(())
    }
}
