//! Processor wire types for payment creation.
//!
//! These mirror the processor's JSON contract exactly; nothing here leaks
//! past the gateway adapter.

use serde::{Deserialize, Serialize};

/// Monetary amount as the processor represents it: a two-fractional-digit
/// string plus an ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    pub value: String,
    pub currency: String,
}

/// Redirect confirmation descriptor; the buyer completes payment at the
/// URL the processor hosts and then returns to `return_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectConfirmation {
    #[serde(rename = "type")]
    pub kind: String,
    pub return_url: String,
}

impl RedirectConfirmation {
    pub fn to_url(return_url: impl Into<String>) -> Self {
        Self {
            kind: "redirect".to_string(),
            return_url: return_url.into(),
        }
    }
}

/// Metadata slot carrying the correlation key through the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMetadata {
    pub payment_key: String,
}

/// Fiscal receipt customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptCustomer {
    pub email: String,
}

/// Single fiscal receipt line item mirroring the payment amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptItem {
    pub description: String,
    pub quantity: u32,
    pub amount: MoneyAmount,
    pub vat_code: u8,
    pub payment_mode: String,
    pub payment_subject: String,
}

/// Fiscal receipt, attached only when the buyer email is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub customer: ReceiptCustomer,
    pub items: Vec<ReceiptItem>,
}

/// Payment creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePaymentBody {
    pub amount: MoneyAmount,
    pub capture: bool,
    pub confirmation: RedirectConfirmation,
    pub description: String,
    pub metadata: PaymentMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

/// Payment object returned by a successful creation call.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    pub id: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub confirmation: Option<ConfirmationResponse>,
}

/// Confirmation block of a created payment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmationResponse {
    #[serde(default)]
    pub confirmation_url: Option<String>,
}

/// Error body the processor returns on a rejected call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
