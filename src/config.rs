use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store_base_url: String,
    pub store_api_token: String,
    pub store_collection: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            store_base_url: std::env::var("STORE_BASE_URL")
                .map_err(|_| anyhow::anyhow!("STORE_BASE_URL environment variable required"))
                .and_then(|raw| {
                    if raw.trim().is_empty() {
                        anyhow::bail!("STORE_BASE_URL cannot be empty");
                    }
                    let parsed = url::Url::parse(&raw)
                        .map_err(|e| anyhow::anyhow!("STORE_BASE_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("STORE_BASE_URL must start with http:// or https://");
                    }
                    Ok(raw.trim_end_matches('/').to_string())
                })?,
            store_api_token: std::env::var("STORE_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("STORE_API_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("STORE_API_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            store_collection: std::env::var("STORE_COLLECTION")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "kyc_profiles".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Store base URL: {}", config.store_base_url);
        tracing::debug!("Store collection: {}", config.store_collection);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
