//! Downstream notification ports.
//!
//! The webhook reconciler fans one event out to two independent
//! collaborators: the storefront platform (order status) and a
//! record-keeping ledger sink. Both are best-effort; failures are logged by
//! the caller and never block acknowledgment to the processor.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::payment::PaymentStatus;

/// Port for the storefront platform notification endpoint.
#[async_trait]
pub trait StorefrontNotifier: Send + Sync {
    /// Relay a normalized payment status for one order.
    async fn notify_status(
        &self,
        payment_key: &str,
        status: PaymentStatus,
    ) -> Result<(), NotifyError>;
}

/// Port for the record-keeping sink.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Append one row describing the reconciled event.
    async fn record(&self, entry: LedgerEntry) -> Result<(), NotifyError>;
}

/// One ledger row, assembled at event processing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Correlation key matching the event back to the order.
    pub payment_key: String,

    /// Amount as delivered by the processor, when present.
    pub amount: Option<String>,

    /// Buyer email, when the event carried one.
    pub customer_email: Option<String>,

    /// Normalized status.
    pub status: PaymentStatus,

    /// Timestamp captured when the event was processed.
    pub created_at: DateTime<Utc>,
}

/// Error from a downstream notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    /// Which collaborator failed (for logs).
    pub target: String,

    /// What went wrong.
    pub message: String,
}

impl NotifyError {
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} notification failed: {}", self.target, self.message)
    }
}

impl std::error::Error for NotifyError {}
