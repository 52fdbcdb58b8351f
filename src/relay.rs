use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::ghl_client::GhlClient;
use crate::models::{LeadRecord, LeadResponse};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for communicating with the GHL API.
    pub ghl_client: GhlClient,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/send-leads",
            post(send_leads).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "process-cost-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/send-leads
///
/// Lead relay handler. Per-request flow, nothing persisted across requests:
/// 1. Presence check on name/email (400 on failure, CRM never touched).
/// 2. Contact upsert in GHL; a non-success status aborts the submission.
/// 3. Opportunity create, only when the contact response carried an id;
///    a missing id silently skips this step.
/// 4. Any GHL error collapses to a generic 500; detail is logged server-side.
///
/// Repeated identical submissions upsert the same contact but create a new
/// opportunity each time; no dedup check is performed before creating one.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - JSON body containing the lead record.
///
/// # Returns
///
/// * `Result<(StatusCode, Json<LeadResponse>), AppError>` - The acknowledgment or an error.
pub async fn send_leads(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeadRecord>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    tracing::info!(
        "Received lead submission: name={}, totalCost={:?}",
        payload.name,
        payload.total_cost
    );

    // Presence check only, matching the relay's wire contract; whitespace-only
    // values count as present and are forwarded to the CRM as-is.
    if payload.name.is_empty() || payload.email.is_empty() {
        return Err(AppError::BadRequest("Missing name or email".to_string()));
    }

    let contact_id = state
        .ghl_client
        .upsert_contact(&payload.email, &payload.name, payload.source.as_deref())
        .await
        .context("contact upsert")?;

    match contact_id {
        Some(id) => {
            state
                .ghl_client
                .create_opportunity(
                    &payload.name,
                    &id,
                    &state.config.ghl_pipeline_id,
                    &state.config.ghl_stage_id,
                )
                .await
                .context("opportunity create")?;
        }
        None => {
            // Not an error; the contact write already succeeded.
            tracing::warn!("GHL contact response carried no id, skipping opportunity create");
        }
    }

    Ok((
        StatusCode::OK,
        Json(LeadResponse {
            success: true,
            message: "Lead sent to GoHighLevel".to_string(),
        }),
    ))
}

/// Fallback for non-POST methods on the submission route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
