use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.commercegalaxy.online";
const RUNTIME_CONFIG_PATH: &str = "/api/config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: compiled_api_base_url(),
        }
    }
}

/// Trim whitespace and trailing slashes; blank input is rejected.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn compiled_api_base_url() -> String {
    option_env!("COMMERCE_GALAXY_API_URL")
        .and_then(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Ask the static host for the game API base, falling back to the build-time value.
pub async fn resolve() -> ClientConfig {
    match fetch_runtime_config().await {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::log_1(
                &format!("Runtime config unavailable ({e}), using build defaults").into(),
            );
            ClientConfig::default()
        }
    }
}

async fn fetch_runtime_config() -> Result<ClientConfig, String> {
    let resp = gloo_net::http::Request::get(RUNTIME_CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let config = resp
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("parse error: {e}"))?;
    let api_base_url = normalize_base_url(&config.api_base_url).ok_or("empty api_base_url")?;
    Ok(ClientConfig { api_base_url })
}
