//! HTTP handlers for the payment endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Form, Json};

use crate::application::handlers::{
    CreatePaymentCommand, CreatePaymentHandler, ReconcileWebhookHandler,
};
use crate::config::AppConfig;
use crate::domain::payment::{PaymentDefaults, PaymentFlowError};
use crate::ports::{PaymentGateway, PaymentLedger, StorefrontNotifier};

use super::dto::{
    CreatePaymentRequest, CreatePaymentResponse, ErrorResponse, WebhookAck, WebhookEventRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub storefront: Arc<dyn StorefrontNotifier>,
    pub ledger: Arc<dyn PaymentLedger>,
    pub defaults: PaymentDefaults,
}

impl PaymentsAppState {
    /// Build state from loaded configuration and constructed adapters.
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        storefront: Arc<dyn StorefrontNotifier>,
        ledger: Arc<dyn PaymentLedger>,
        config: &AppConfig,
    ) -> Self {
        Self {
            gateway,
            storefront,
            ledger,
            defaults: PaymentDefaults::new(
                config.yookassa.default_currency.clone(),
                config.yookassa.default_description.clone(),
            ),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(self.gateway.clone(), self.defaults.clone())
    }

    pub fn reconcile_webhook_handler(&self) -> ReconcileWebhookHandler {
        ReconcileWebhookHandler::new(self.storefront.clone(), self.ledger.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Body Extraction
// ════════════════════════════════════════════════════════════════════════════════

/// Extractor accepting JSON or form-encoded bodies into the same DTO.
///
/// Decode failures are answered with the API's `{error:{message}}` shape
/// instead of the framework's default rejection body.
pub struct JsonOrForm<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = PaymentsApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                PaymentsApiError::from(PaymentFlowError::validation(
                    "body",
                    format!("could not decode form body: {e}"),
                ))
            })?;
            Ok(JsonOrForm(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                PaymentsApiError::from(PaymentFlowError::validation(
                    "body",
                    format!("could not decode JSON body: {e}"),
                ))
            })?;
            Ok(JsonOrForm(value))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments - Create a payment intent and return its redirect URL
pub async fn create_payment(
    State(state): State<PaymentsAppState>,
    JsonOrForm(request): JsonOrForm<CreatePaymentRequest>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let handler = state.create_payment_handler();
    let cmd = CreatePaymentCommand::from(request);

    let created = handler.handle(cmd).await?;

    Ok(Json(CreatePaymentResponse {
        confirmation_url: created.confirmation_url,
    }))
}

/// POST /api/webhooks/yookassa - Reconcile a processor status callback
///
/// Parseable events are always acknowledged with `200 {"success":true}`,
/// whatever happened downstream; only malformed JSON is refused, so the
/// processor never redelivers an event this system already handled.
pub async fn handle_yookassa_webhook(
    State(state): State<PaymentsAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let request: WebhookEventRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Webhook body is not valid JSON");
        PaymentsApiError::from(PaymentFlowError::validation(
            "body",
            "could not decode JSON body",
        ))
    })?;

    let handler = state.reconcile_webhook_handler();
    let outcome = handler.handle(request.into_command()).await;
    tracing::debug!(outcome = ?outcome, "Webhook event reconciled");

    Ok(Json(WebhookAck::ok()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment-flow errors to HTTP responses.
pub struct PaymentsApiError(PaymentFlowError);

impl From<PaymentFlowError> for PaymentsApiError {
    fn from(err: PaymentFlowError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PaymentFlowError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            PaymentFlowError::Configuration(_) | PaymentFlowError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.0.message());
        (status, Json(body)).into_response()
    }
}
