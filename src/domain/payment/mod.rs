//! Payment domain: validated requests, normalized statuses, flow errors.

mod errors;
mod request;
mod status;

pub use errors::PaymentFlowError;
pub use request::{format_amount, PaymentDefaults, PaymentRequest, PaymentRequestParts};
pub use status::PaymentStatus;
