//! Payment gateway port for the external payment processor.
//!
//! Defines the contract for creating payment intents at a redirect-based
//! processor. Implementations own credentials, idempotency tokens, and wire
//! formats; callers see only validated domain input and a confirmation URL.

use async_trait::async_trait;

use crate::domain::payment::PaymentRequest;

/// Port for the payment processor integration.
///
/// One invocation issues exactly one creation call; the implementation
/// attaches a fresh idempotency token per call and never retries.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent and return its confirmation artifact.
    async fn create_payment(&self, request: &PaymentRequest)
        -> Result<PaymentIntent, GatewayError>;
}

/// Payment intent as reported back by the processor.
///
/// The processor remains the sole owner of this entity; nothing here is
/// cached or persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    /// Processor-assigned payment id.
    pub id: String,

    /// Processor-reported lifecycle status at creation time.
    pub status: String,

    /// Redirect URL the buyer completes payment at.
    pub confirmation_url: String,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message, safe to show to the caller.
    pub message: String,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Processor credentials are absent; a deployment error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Configuration, message)
    }

    /// Transport-level failure reaching the processor.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    /// The processor rejected the creation call.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Provider, message)
    }

    /// A success response missing required fields.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::MalformedResponse, message)
    }

    pub fn is_configuration(&self) -> bool {
        self.code == GatewayErrorCode::Configuration
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    /// Processor credentials not configured.
    Configuration,

    /// Network connectivity issue.
    Network,

    /// Processor API error.
    Provider,

    /// Response from the processor could not be used.
    MalformedResponse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Configuration => "configuration",
            GatewayErrorCode::Network => "network_error",
            GatewayErrorCode::Provider => "provider_error",
            GatewayErrorCode::MalformedResponse => "malformed_response",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn configuration_probe() {
        assert!(GatewayError::configuration("no credentials").is_configuration());
        assert!(!GatewayError::network("timeout").is_configuration());
    }

    #[test]
    fn gateway_error_display() {
        let err = GatewayError::provider("Invalid amount");
        assert!(err.to_string().contains("provider_error"));
        assert!(err.to_string().contains("Invalid amount"));
    }
}
