//! Normalized payment status and webhook event classification.

use serde::{Deserialize, Serialize};

/// Normalized status relayed to downstream collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Buyer completed payment; funds captured.
    Succeeded,

    /// Payment was canceled or rejected at the processor.
    Canceled,

    /// Payment failed. Part of the downstream contract; no current
    /// processor event kind maps to it.
    Failed,
}

impl PaymentStatus {
    /// Map a processor event kind to a normalized status.
    ///
    /// Unknown kinds (e.g. `payment.waiting_for_capture`) return `None` and
    /// are acknowledged without any downstream call.
    pub fn from_event_kind(kind: &str) -> Option<Self> {
        match kind {
            "payment.succeeded" => Some(PaymentStatus::Succeeded),
            "payment.canceled" => Some(PaymentStatus::Canceled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
