//! CreatePaymentHandler - Command handler for starting a payment.

use std::sync::Arc;

use crate::domain::payment::{
    PaymentDefaults, PaymentFlowError, PaymentRequest, PaymentRequestParts,
};
use crate::ports::PaymentGateway;

/// Command to create a payment intent, as decoded from the inbound body.
///
/// All fields arrive unvalidated; validation happens in the handler before
/// any outbound call.
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentCommand {
    pub payment_key: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub customer_email: Option<String>,
}

/// Result of a successful payment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPayment {
    /// Redirect URL the buyer completes payment at.
    pub confirmation_url: String,
}

/// Handler for the payment creation flow.
///
/// Validates and normalizes the command, issues one idempotent creation call
/// through the gateway port, and returns the confirmation URL. Upstream
/// detail is logged here; callers receive a sanitized message only.
pub struct CreatePaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    defaults: PaymentDefaults,
}

impl CreatePaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, defaults: PaymentDefaults) -> Self {
        Self { gateway, defaults }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
    ) -> Result<CreatedPayment, PaymentFlowError> {
        // 1. Validate before any network call
        let parts = PaymentRequestParts {
            payment_key: cmd.payment_key,
            amount: cmd.amount,
            currency: cmd.currency,
            description: cmd.description,
            customer_email: cmd.customer_email,
        };
        let request = PaymentRequest::from_parts(parts, &self.defaults)?;

        // 2. Exactly one creation call
        let intent = self
            .gateway
            .create_payment(&request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    payment_key = %request.payment_key,
                    "Payment creation failed"
                );
                if e.is_configuration() {
                    PaymentFlowError::configuration("Payment system is not configured")
                } else {
                    PaymentFlowError::upstream(e.message)
                }
            })?;

        Ok(CreatedPayment {
            confirmation_url: intent.confirmation_url,
        })
    }
}
