use crate::errors::AppError;
use crate::models::{LeadRecord, LeadResponse};
use std::time::Duration;

/// Source literal stamped on every submission, identifying the originating tool.
pub const LEAD_SOURCE: &str = "Process Cost Calculator";

/// Builds a submission record from the identity fields and the estimate at
/// submission time. No validation happens here; presence checks live at the
/// relay boundary.
pub fn build_lead_record(name: &str, email: &str, total_cost: Option<f64>) -> LeadRecord {
    LeadRecord {
        name: name.to_string(),
        email: email.to_string(),
        total_cost,
        source: Some(LEAD_SOURCE.to_string()),
    }
}

/// Client for submitting lead records to the relay endpoint.
#[derive(Clone)]
pub struct LeadSubmitter {
    client: reqwest::Client,
    relay_url: String,
}

impl LeadSubmitter {
    /// Creates a new `LeadSubmitter`.
    ///
    /// # Arguments
    ///
    /// * `relay_url` - Full URL of the relay's submission endpoint.
    pub fn new(relay_url: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create submission client: {}", e))
            })?;

        Ok(Self { client, relay_url })
    }

    /// Sends the record to the relay. Exactly one request per call; no retry
    /// is attempted, so a failed submission leaves the caller free to submit
    /// again.
    pub async fn submit(&self, record: &LeadRecord) -> Result<LeadResponse, AppError> {
        tracing::info!("Submitting lead to relay: {}", self.relay_url);

        let response = self
            .client
            .post(&self.relay_url)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Lead submission failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Lead relay returned {}: {}",
                status, error_text
            )));
        }

        let ack: LeadResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse relay response: {}", e))
        })?;

        tracing::info!("✓ Lead submitted: {}", ack.message);
        Ok(ack)
    }
}
