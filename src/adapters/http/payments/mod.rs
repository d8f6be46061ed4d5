//! HTTP adapter for the payment API surface.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePaymentRequest, CreatePaymentResponse, ErrorResponse, WebhookEventRequest};
pub use handlers::{JsonOrForm, PaymentsApiError, PaymentsAppState};
pub use routes::{api_router, payment_routes, webhook_routes};
