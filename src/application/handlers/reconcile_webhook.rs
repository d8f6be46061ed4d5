//! ReconcileWebhookHandler - Command handler for processor status callbacks.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::payment::PaymentStatus;
use crate::ports::{LedgerEntry, PaymentLedger, StorefrontNotifier};

/// Command carrying one processor-delivered event.
///
/// Every field is optional except the kind: events this system cannot
/// correlate are acknowledged without action, never treated as errors.
#[derive(Debug, Clone, Default)]
pub struct ReconcileWebhookCommand {
    /// Event kind as delivered (e.g. `payment.succeeded`).
    pub kind: String,

    /// Correlation key from the embedded payment object's metadata.
    pub payment_key: Option<String>,

    /// Amount value as delivered by the processor.
    pub amount: Option<String>,

    /// Buyer email, when the event carried one.
    pub customer_email: Option<String>,
}

/// Result of webhook reconciliation.
///
/// All variants acknowledge the event to the processor; the distinction
/// exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Event was classified and fanned out downstream.
    Forwarded {
        status: PaymentStatus,
        storefront_delivered: bool,
        ledger_recorded: bool,
    },

    /// Event kind is not one this system relays.
    UnknownKind,

    /// Event carries no correlation key; not actionable.
    MissingKey,
}

/// Handler relaying processor callbacks to downstream collaborators.
///
/// The two sends run concurrently and are both always awaited; a failure in
/// one never suppresses the other, and neither failure reaches the
/// processor's response.
pub struct ReconcileWebhookHandler {
    storefront: Arc<dyn StorefrontNotifier>,
    ledger: Arc<dyn PaymentLedger>,
}

impl ReconcileWebhookHandler {
    pub fn new(storefront: Arc<dyn StorefrontNotifier>, ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { storefront, ledger }
    }

    pub async fn handle(&self, cmd: ReconcileWebhookCommand) -> ReconcileOutcome {
        // 1. An event without a correlation key cannot be matched to an order
        let Some(payment_key) = cmd.payment_key.filter(|k| !k.is_empty()) else {
            tracing::info!(kind = %cmd.kind, "Webhook event carries no payment key; acknowledged");
            return ReconcileOutcome::MissingKey;
        };

        // 2. Only terminal kinds are relayed
        let Some(status) = PaymentStatus::from_event_kind(&cmd.kind) else {
            tracing::info!(
                kind = %cmd.kind,
                payment_key = %payment_key,
                "Webhook event kind not relayed; acknowledged"
            );
            return ReconcileOutcome::UnknownKind;
        };

        // 3. Fan out to both collaborators; independent failure domains
        let entry = LedgerEntry {
            payment_key: payment_key.clone(),
            amount: cmd.amount,
            customer_email: cmd.customer_email,
            status,
            created_at: Utc::now(),
        };

        let (storefront_result, ledger_result) = tokio::join!(
            self.storefront.notify_status(&payment_key, status),
            self.ledger.record(entry),
        );

        let storefront_delivered = match storefront_result {
            Ok(()) => {
                tracing::info!(payment_key = %payment_key, status = %status, "Storefront notified");
                true
            }
            Err(e) => {
                tracing::error!(payment_key = %payment_key, error = %e, "Storefront notification failed");
                false
            }
        };

        let ledger_recorded = match ledger_result {
            Ok(()) => {
                tracing::info!(payment_key = %payment_key, "Ledger entry recorded");
                true
            }
            Err(e) => {
                tracing::error!(payment_key = %payment_key, error = %e, "Ledger record failed");
                false
            }
        };

        ReconcileOutcome::Forwarded {
            status,
            storefront_delivered,
            ledger_recorded,
        }
    }
}
