use gloo_net::http::Request;

use commerce_galaxy_shared::request::{ApiRequest, Method};
use commerce_galaxy_shared::{ApiClient, ApiError, RawResponse, Transport};

pub(crate) type Api = ApiClient<HttpTransport>;

/// `fetch`-backed transport rooted at the game API base URL.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = request.url(&self.base_url);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }

        let sent = match request.body_text() {
            Some(body) => {
                let with_body = builder
                    .body(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                with_body.send().await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| {
            web_sys::console::error_1(
                &format!("{} {} failed: {e}", request.method.as_str(), request.path).into(),
            );
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}
