//! Payment processor adapter (YooKassa).
//!
//! Implements the `PaymentGateway` port against the processor's REST API.
//!
//! # Contract
//!
//! - Basic authentication from shop id + secret key
//! - A freshly generated idempotency token per creation call
//! - Exactly one outbound call per invocation, never retried here
//! - Processor error detail is logged in full; callers receive only the
//!   human-readable description

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use async_trait::async_trait;

use crate::config::YookassaConfig;
use crate::domain::payment::PaymentRequest;
use crate::ports::{GatewayError, PaymentGateway, PaymentIntent};

use super::api_types::{
    ApiErrorBody, CreatePaymentBody, MoneyAmount, PaymentMetadata, PaymentResponse, Receipt,
    ReceiptCustomer, ReceiptItem, RedirectConfirmation,
};

/// Header carrying the per-call idempotency token.
const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Payment gateway adapter for the processor's payments API.
pub struct YookassaGateway {
    config: YookassaConfig,
    secret_key: SecretString,
    http_client: reqwest::Client,
}

impl YookassaGateway {
    /// Create a new gateway adapter from processor configuration.
    pub fn new(config: YookassaConfig) -> Self {
        let secret_key = SecretString::new(config.secret_key.clone());
        Self {
            config,
            secret_key,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for YookassaGateway {
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        // Deployment error, distinct from anything the client can fix
        if !self.config.credentials_configured() {
            return Err(GatewayError::configuration(
                "Payment system is not configured",
            ));
        }

        let url = format!("{}/v3/payments", self.config.api_base_url);
        let body = build_create_body(request, &self.config.return_url);
        let token = idempotency_key();

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.shop_id, Some(self.secret_key.expose_secret()))
            .header(IDEMPOTENCY_KEY_HEADER, &token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Payment creation call failed to reach the processor");
                GatewayError::network("Failed to create payment")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
            tracing::error!(
                http_status = %status,
                code = ?error_body.code,
                description = ?error_body.description,
                payment_key = %request.payment_key,
                "Processor rejected payment creation"
            );
            return Err(GatewayError::provider(
                error_body
                    .description
                    .unwrap_or_else(|| "Failed to create payment".to_string()),
            ));
        }

        let payment: PaymentResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Processor returned an unreadable payment object");
            GatewayError::malformed_response("Failed to create payment")
        })?;

        let confirmation_url = payment
            .confirmation
            .and_then(|c| c.confirmation_url)
            .ok_or_else(|| {
                tracing::error!(
                    payment_id = %payment.id,
                    "Processor response carries no confirmation URL"
                );
                GatewayError::malformed_response("Failed to create payment")
            })?;

        tracing::info!(
            payment_id = %payment.id,
            payment_key = %request.payment_key,
            "Payment intent created"
        );

        Ok(PaymentIntent {
            id: payment.id,
            status: payment.status,
            confirmation_url,
        })
    }
}

/// Generate a fresh idempotency token.
///
/// Random per call, not derived from the correlation key: a retried outer
/// request gets a new payment attempt, while transport-level duplicates of
/// one call collapse at the processor.
fn idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

/// Assemble the creation body from a validated request.
fn build_create_body(request: &PaymentRequest, return_url: &str) -> CreatePaymentBody {
    let amount = MoneyAmount {
        value: request.amount_value(),
        currency: request.currency.clone(),
    };

    let receipt = request.customer_email.as_ref().map(|email| Receipt {
        customer: ReceiptCustomer {
            email: email.clone(),
        },
        items: vec![ReceiptItem {
            description: request.description.clone(),
            quantity: 1,
            amount: amount.clone(),
            vat_code: 1,
            payment_mode: "full_payment".to_string(),
            payment_subject: "commodity".to_string(),
        }],
    });

    CreatePaymentBody {
        amount,
        capture: true,
        confirmation: RedirectConfirmation::to_url(return_url),
        description: request.description.clone(),
        metadata: PaymentMetadata {
            payment_key: request.payment_key.clone(),
        },
        receipt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{PaymentDefaults, PaymentRequestParts};
    use std::collections::HashSet;

    fn request(customer_email: Option<&str>) -> PaymentRequest {
        let parts = PaymentRequestParts {
            payment_key: Some("ord-1".to_string()),
            amount: Some("150".to_string()),
            customer_email: customer_email.map(str::to_string),
            ..Default::default()
        };
        PaymentRequest::from_parts(parts, &PaymentDefaults::new("RUB", "Оплата заказа")).unwrap()
    }

    #[test]
    fn body_carries_amount_capture_and_metadata() {
        let body = build_create_body(&request(None), "https://shop.example/thanks");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["amount"]["value"], "150.00");
        assert_eq!(json["amount"]["currency"], "RUB");
        assert_eq!(json["capture"], true);
        assert_eq!(json["confirmation"]["type"], "redirect");
        assert_eq!(
            json["confirmation"]["return_url"],
            "https://shop.example/thanks"
        );
        assert_eq!(json["metadata"]["payment_key"], "ord-1");
        assert!(json.get("receipt").is_none());
    }

    #[test]
    fn receipt_mirrors_amount_when_email_present() {
        let body = build_create_body(
            &request(Some("buyer@example.com")),
            "https://shop.example/thanks",
        );
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["receipt"]["customer"]["email"], "buyer@example.com");
        let items = json["receipt"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["quantity"], 1);
        assert_eq!(items[0]["amount"]["value"], "150.00");
        assert_eq!(items[0]["vat_code"], 1);
        assert_eq!(items[0]["payment_mode"], "full_payment");
        assert_eq!(items[0]["payment_subject"], "commodity");
    }

    #[test]
    fn idempotency_keys_are_unique_per_call() {
        let keys: HashSet<String> = (0..100).map(|_| idempotency_key()).collect();
        assert_eq!(keys.len(), 100);
    }

    #[test]
    fn idempotency_keys_are_uuids() {
        let key = idempotency_key();
        assert!(Uuid::parse_str(&key).is_ok());
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_network_call() {
        // Default config has no credentials and a real base URL; the call
        // must fail fast without touching the network.
        let gateway = YookassaGateway::new(YookassaConfig::default());
        let err = gateway.create_payment(&request(None)).await.unwrap_err();
        assert!(err.is_configuration());
    }
}
