use serde::Deserialize;

/// Default GoHighLevel REST API base URL (v1).
pub const DEFAULT_GHL_API_BASE: &str = "https://rest.gohighlevel.com/v1";

/// Tags applied to every contact and opportunity created by this service.
/// They identify the submission's origin and are not configurable per request.
pub const LEAD_TAGS: [&str; 2] = ["Process Calculator", "Website Lead"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub ghl_api_base: String,
    pub ghl_api_key: String,
    pub ghl_pipeline_id: String,
    pub ghl_stage_id: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            ghl_api_base: std::env::var("GHL_API_BASE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("GHL_API_BASE must start with http:// or https://");
                    }
                    Ok(url)
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_GHL_API_BASE.to_string()),
            ghl_api_key: std::env::var("GHL_API_KEY")
                .map_err(|_| anyhow::anyhow!("GHL_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("GHL_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            ghl_pipeline_id: std::env::var("GHL_PIPELINE_ID")
                .map_err(|_| anyhow::anyhow!("GHL_PIPELINE_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("GHL_PIPELINE_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            ghl_stage_id: std::env::var("GHL_STAGE_ID")
                .map_err(|_| anyhow::anyhow!("GHL_STAGE_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("GHL_STAGE_ID cannot be empty");
                    }
                    Ok(id)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("GHL API base: {}", config.ghl_api_base);
        tracing::debug!("GHL pipeline: {}", config.ghl_pipeline_id);
        tracing::debug!("GHL stage: {}", config.ghl_stage_id);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}
