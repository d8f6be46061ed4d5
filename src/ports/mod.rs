//! Ports - trait seams to external collaborators.
//!
//! Each port is an `async_trait` contract implemented by an adapter and
//! mocked in tests.

mod notifications;
mod payment_gateway;

pub use notifications::{LedgerEntry, NotifyError, PaymentLedger, StorefrontNotifier};
pub use payment_gateway::{GatewayError, GatewayErrorCode, PaymentGateway, PaymentIntent};
