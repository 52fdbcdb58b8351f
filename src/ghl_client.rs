use crate::config::{Config, LEAD_TAGS};
use crate::errors::AppError;
use crate::models::ContactUpsertResponse;
use serde_json::json;
use std::time::Duration;

/// Client for interacting with the GoHighLevel (GHL) REST API.
#[derive(Clone)]
pub struct GhlClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GhlClient {
    /// Creates a new `GhlClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the GHL REST API.
    /// * `api_key` - The bearer token for authentication.
    pub fn new(base_url: String, api_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create GHL client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.ghl_api_base.clone(), config.ghl_api_key.clone())
    }

    /// Creates or updates a contact keyed by email.
    ///
    /// A non-success HTTP status aborts the whole submission; the upstream
    /// error text is carried in the returned error for logging only.
    ///
    /// # Returns
    ///
    /// * `Result<Option<String>, AppError>` - The contact id, when GHL returned one.
    pub async fn upsert_contact(
        &self,
        email: &str,
        name: &str,
        source: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let url = format!("{}/contacts/", self.base_url);
        tracing::info!("Upserting GHL contact for {}", email);

        let mut body = serde_json::Map::new();
        body.insert("email".to_string(), json!(email));
        body.insert("name".to_string(), json!(name));
        body.insert("tags".to_string(), json!(LEAD_TAGS));
        if let Some(source_val) = source {
            body.insert("source".to_string(), json!(source_val));
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("GHL contact request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "GHL contact create failed {}: {}",
                status, error_text
            )));
        }

        let data: ContactUpsertResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse GHL contact response: {}", e))
        })?;

        let contact_id = data.contact_id();
        tracing::info!("✓ GHL contact upserted (id: {:?})", contact_id);
        Ok(contact_id)
    }

    /// Creates an open opportunity for a contact in the configured
    /// pipeline/stage.
    ///
    /// The response status is deliberately not inspected; only transport
    /// failures surface as errors.
    pub async fn create_opportunity(
        &self,
        name: &str,
        contact_id: &str,
        pipeline_id: &str,
        stage_id: &str,
    ) -> Result<(), AppError> {
        let url = format!("{}/opportunities/", self.base_url);
        tracing::info!("Creating GHL opportunity for contact {}", contact_id);

        let body = json!({
            "name": name,
            "contactId": contact_id,
            "pipelineId": pipeline_id,
            "stageId": stage_id,
            "status": "open",
            "monetaryValue": 0,
            "tags": LEAD_TAGS,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalApiError(format!("GHL opportunity request failed: {}", e))
            })?;

        tracing::debug!("GHL opportunity create returned {}", response.status());
        Ok(())
    }
}
