//! HTTP DTOs (Data Transfer Objects) for the payment endpoints.
//!
//! These types define the JSON (or form-encoded) request/response structure
//! for the public API. They serve as the boundary between HTTP and the
//! application layer: every inbound field is optional here so that presence
//! checks happen in validation, with a uniform error shape, rather than in
//! the deserializer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CreatePaymentCommand, ReconcileWebhookCommand};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Amount as clients send it: a JSON number or a numeric string (form
/// bodies always deliver strings).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(serde_json::Number),
    Text(String),
}

impl AmountField {
    /// Raw textual form, handed to decimal parsing at the validation
    /// boundary.
    pub fn into_raw(self) -> String {
        match self {
            AmountField::Number(n) => n.to_string(),
            AmountField::Text(s) => s,
        }
    }
}

/// Request to create a payment intent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaymentRequest {
    /// Correlation key, unique per order.
    #[serde(default)]
    pub payment_key: Option<String>,

    /// Positive decimal amount.
    #[serde(default)]
    pub amount: Option<AmountField>,

    /// ISO 4217 code; deployment default applies when absent.
    #[serde(default)]
    pub currency: Option<String>,

    /// Order description; deployment default applies when absent.
    #[serde(default)]
    pub description: Option<String>,

    /// Buyer email for the fiscal receipt.
    #[serde(default)]
    pub customer_email: Option<String>,
}

impl From<CreatePaymentRequest> for CreatePaymentCommand {
    fn from(request: CreatePaymentRequest) -> Self {
        Self {
            payment_key: request.payment_key,
            amount: request.amount.map(AmountField::into_raw),
            currency: request.currency,
            description: request.description,
            customer_email: request.customer_email,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhook DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Processor-delivered webhook event.
///
/// Deliberately lenient: any well-formed JSON object parses, and absent
/// fields classify the event as unactionable instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEventRequest {
    #[serde(default)]
    pub event: Option<String>,

    #[serde(default)]
    pub object: Option<WebhookPaymentObject>,
}

/// Embedded payment object of a webhook event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPaymentObject {
    #[serde(default)]
    pub metadata: Option<WebhookMetadata>,

    #[serde(default)]
    pub amount: Option<WebhookAmount>,

    #[serde(default)]
    pub receipt: Option<WebhookReceipt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookMetadata {
    #[serde(default)]
    pub payment_key: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookAmount {
    #[serde(default)]
    pub value: Option<AmountField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookReceipt {
    #[serde(default)]
    pub customer: Option<WebhookCustomer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookCustomer {
    #[serde(default)]
    pub email: Option<String>,
}

impl WebhookEventRequest {
    /// Flatten the nested event into a reconciliation command.
    ///
    /// The buyer email is read from the receipt customer, falling back to
    /// the metadata slot.
    pub fn into_command(self) -> ReconcileWebhookCommand {
        let object = self.object.unwrap_or_default();
        let metadata = object.metadata.unwrap_or_default();

        let customer_email = object
            .receipt
            .and_then(|r| r.customer)
            .and_then(|c| c.email)
            .or(metadata.customer_email);

        ReconcileWebhookCommand {
            kind: self.event.unwrap_or_default(),
            payment_key: metadata.payment_key,
            amount: object
                .amount
                .and_then(|a| a.value)
                .map(AmountField::into_raw),
            customer_email,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful payment creation response.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentResponse {
    /// Redirect URL the buyer completes payment at.
    pub confirmation_url: String,
}

/// Unconditional webhook acknowledgment.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub success: bool,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error response wire shape: `{"error":{"message":"..."}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_json_number() {
        let request: CreatePaymentRequest =
            serde_json::from_str(r#"{"payment_key":"ord-1","amount":150}"#).unwrap();
        let cmd = CreatePaymentCommand::from(request);
        assert_eq!(cmd.amount.as_deref(), Some("150"));
    }

    #[test]
    fn amount_accepts_numeric_string() {
        let request: CreatePaymentRequest =
            serde_json::from_str(r#"{"payment_key":"ord-1","amount":"99.90"}"#).unwrap();
        let cmd = CreatePaymentCommand::from(request);
        assert_eq!(cmd.amount.as_deref(), Some("99.90"));
    }

    #[test]
    fn form_encoded_body_decodes_into_same_field_set() {
        let request: CreatePaymentRequest = serde_urlencoded::from_str(
            "payment_key=ord-1&amount=150&customer_email=buyer%40example.com",
        )
        .unwrap();
        let cmd = CreatePaymentCommand::from(request);
        assert_eq!(cmd.payment_key.as_deref(), Some("ord-1"));
        assert_eq!(cmd.amount.as_deref(), Some("150"));
        assert_eq!(cmd.customer_email.as_deref(), Some("buyer@example.com"));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let request: CreatePaymentRequest = serde_json::from_str("{}").unwrap();
        let cmd = CreatePaymentCommand::from(request);
        assert!(cmd.payment_key.is_none());
        assert!(cmd.amount.is_none());
    }

    #[test]
    fn webhook_event_flattens_into_command() {
        let request: WebhookEventRequest = serde_json::from_str(
            r#"{
                "event": "payment.succeeded",
                "object": {
                    "metadata": {"payment_key": "ord-1"},
                    "amount": {"value": "150.00"},
                    "receipt": {"customer": {"email": "buyer@example.com"}}
                }
            }"#,
        )
        .unwrap();
        let cmd = request.into_command();

        assert_eq!(cmd.kind, "payment.succeeded");
        assert_eq!(cmd.payment_key.as_deref(), Some("ord-1"));
        assert_eq!(cmd.amount.as_deref(), Some("150.00"));
        assert_eq!(cmd.customer_email.as_deref(), Some("buyer@example.com"));
    }

    #[test]
    fn webhook_email_falls_back_to_metadata() {
        let request: WebhookEventRequest = serde_json::from_str(
            r#"{
                "event": "payment.succeeded",
                "object": {
                    "metadata": {
                        "payment_key": "ord-1",
                        "customer_email": "meta@example.com"
                    }
                }
            }"#,
        )
        .unwrap();
        let cmd = request.into_command();
        assert_eq!(cmd.customer_email.as_deref(), Some("meta@example.com"));
    }

    #[test]
    fn webhook_tolerates_empty_object() {
        let request: WebhookEventRequest = serde_json::from_str("{}").unwrap();
        let cmd = request.into_command();
        assert_eq!(cmd.kind, "");
        assert!(cmd.payment_key.is_none());
        assert!(cmd.amount.is_none());
        assert!(cmd.customer_email.is_none());
    }

    #[test]
    fn error_response_wire_shape() {
        let json = serde_json::to_value(ErrorResponse::new("amount: is required")).unwrap();
        assert_eq!(json["error"]["message"], "amount: is required");
    }

    #[test]
    fn webhook_ack_wire_shape() {
        let json = serde_json::to_value(WebhookAck::ok()).unwrap();
        assert_eq!(json["success"], true);
    }
}
