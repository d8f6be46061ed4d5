//! Record-keeping ledger sink.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::payment::PaymentStatus;
use crate::ports::{LedgerEntry, NotifyError, PaymentLedger};

const TARGET: &str = "ledger";

/// Appends reconciled events to the record-keeping sink.
pub struct HttpPaymentLedger {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpPaymentLedger {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }
}

/// Wire body for one ledger row.
#[derive(Debug, Serialize)]
struct LedgerRecordBody {
    payment_key: String,
    amount: Option<String>,
    customer_email: Option<String>,
    status: PaymentStatus,
    created_at: String,
}

impl From<LedgerEntry> for LedgerRecordBody {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            payment_key: entry.payment_key,
            amount: entry.amount,
            customer_email: entry.customer_email,
            status: entry.status,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

#[async_trait]
impl PaymentLedger for HttpPaymentLedger {
    async fn record(&self, entry: LedgerEntry) -> Result<(), NotifyError> {
        let payment_key = entry.payment_key.clone();
        let body = LedgerRecordBody::from(entry);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::new(TARGET, e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::new(
                TARGET,
                format!("endpoint answered {}", response.status()),
            ));
        }

        tracing::debug!(payment_key = %payment_key, "Ledger entry recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn ledger_body_carries_all_fields() {
        let entry = LedgerEntry {
            payment_key: "ord-1".to_string(),
            amount: Some("150.00".to_string()),
            customer_email: Some("buyer@example.com".to_string()),
            status: PaymentStatus::Succeeded,
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(LedgerRecordBody::from(entry)).unwrap();

        assert_eq!(json["payment_key"], "ord-1");
        assert_eq!(json["amount"], "150.00");
        assert_eq!(json["customer_email"], "buyer@example.com");
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["created_at"], "2026-01-15T12:30:00+00:00");
    }

    #[test]
    fn absent_optionals_serialize_as_null() {
        let entry = LedgerEntry {
            payment_key: "ord-2".to_string(),
            amount: None,
            customer_email: None,
            status: PaymentStatus::Canceled,
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(LedgerRecordBody::from(entry)).unwrap();
        assert!(json["amount"].is_null());
        assert!(json["customer_email"].is_null());
    }
}
