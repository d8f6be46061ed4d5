//! Payment-flow error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | Configuration | 500 |
//! | Upstream | 500 |

/// Errors surfaced by the payment creation flow.
///
/// Validation failures come from client input and carry an explanatory
/// message. Configuration and upstream failures are logged in full and
/// surfaced with a sanitized, human-readable message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFlowError {
    /// A client-supplied field is missing or invalid.
    ValidationFailed { field: String, message: String },

    /// The deployment is missing processor credentials.
    Configuration(String),

    /// The processor rejected the call or returned something unusable.
    Upstream(String),
}

impl PaymentFlowError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentFlowError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        PaymentFlowError::Configuration(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        PaymentFlowError::Upstream(message.into())
    }

    /// Client-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            PaymentFlowError::ValidationFailed { field, message } => {
                format!("{field}: {message}")
            }
            PaymentFlowError::Configuration(message) => message.clone(),
            PaymentFlowError::Upstream(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for PaymentFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentFlowError::ValidationFailed { field, message } => {
                write!(f, "validation failed for {field}: {message}")
            }
            PaymentFlowError::Configuration(message) => {
                write!(f, "configuration error: {message}")
            }
            PaymentFlowError::Upstream(message) => write!(f, "upstream error: {message}"),
        }
    }
}

impl std::error::Error for PaymentFlowError {}
