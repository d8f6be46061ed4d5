//! Validated payment request built at the input boundary.
//!
//! All client input passes through [`PaymentRequest::from_parts`] before any
//! outbound call is made: presence checks, decimal parsing, default
//! substitution for currency and description, and a basic shape check on the
//! optional customer email.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::PaymentFlowError;

/// Deployment-provided substitutes for optional request fields.
#[derive(Debug, Clone)]
pub struct PaymentDefaults {
    pub currency: String,
    pub description: String,
}

impl PaymentDefaults {
    pub fn new(currency: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            description: description.into(),
        }
    }
}

/// Raw, unvalidated field set decoded from the inbound body.
#[derive(Debug, Clone, Default)]
pub struct PaymentRequestParts {
    pub payment_key: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub customer_email: Option<String>,
}

/// A validated, normalized payment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Correlation key matching the webhook event back to the order.
    pub payment_key: String,

    /// Positive amount, rendered with two fractional digits on the wire.
    pub amount: Decimal,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Human-readable order description.
    pub description: String,

    /// Buyer email for the fiscal receipt, when provided.
    pub customer_email: Option<String>,
}

impl PaymentRequest {
    /// Validate raw parts into a payment request.
    ///
    /// Rejections here guarantee that no outbound processor call is issued
    /// for malformed input.
    pub fn from_parts(
        parts: PaymentRequestParts,
        defaults: &PaymentDefaults,
    ) -> Result<Self, PaymentFlowError> {
        let payment_key = parts
            .payment_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| PaymentFlowError::validation("payment_key", "is required"))?;

        let raw_amount = parts
            .amount
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or_else(|| PaymentFlowError::validation("amount", "is required"))?;

        let amount = parse_amount(&raw_amount).ok_or_else(|| {
            PaymentFlowError::validation("amount", "must be a positive number")
        })?;
        if amount <= Decimal::ZERO {
            return Err(PaymentFlowError::validation(
                "amount",
                "must be a positive number",
            ));
        }

        let currency = match parts.currency.map(|c| c.trim().to_ascii_uppercase()) {
            Some(c) if !c.is_empty() => {
                if c.len() != 3 || !c.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(PaymentFlowError::validation(
                        "currency",
                        "must be a three-letter ISO 4217 code",
                    ));
                }
                c
            }
            _ => defaults.currency.clone(),
        };

        let description = parts
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| defaults.description.clone());

        let customer_email = match parts.customer_email.map(|e| e.trim().to_string()) {
            Some(e) if !e.is_empty() => {
                if !is_plausible_email(&e) {
                    return Err(PaymentFlowError::validation(
                        "customer_email",
                        "is not a valid email address",
                    ));
                }
                Some(e)
            }
            _ => None,
        };

        Ok(Self {
            payment_key,
            amount,
            currency,
            description,
            customer_email,
        })
    }

    /// Amount rendered exactly as the processor expects: two fractional
    /// digits, half rounded away from zero.
    pub fn amount_value(&self) -> String {
        format_amount(self.amount)
    }
}

/// Render a decimal with exactly two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

fn is_plausible_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
