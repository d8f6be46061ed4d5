//! Kassa Bridge - storefront/payment-processor integration service
//!
//! Two stateless request handlers form the core: payment intent creation
//! (storefront → processor, returning a redirect URL) and webhook
//! reconciliation (processor → storefront platform + record-keeping sink).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
