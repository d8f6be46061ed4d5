//! HTTP adapters for the downstream notification fan-out.

mod ledger;
mod storefront;

pub use ledger::HttpPaymentLedger;
pub use storefront::HttpStorefrontNotifier;
