//! Application command handlers.
//!
//! Handlers wire validated domain input to ports; each carries its own
//! mock-based test suite.

mod create_payment;
mod reconcile_webhook;

pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler, CreatedPayment};
pub use reconcile_webhook::{ReconcileOutcome, ReconcileWebhookCommand, ReconcileWebhookHandler};
