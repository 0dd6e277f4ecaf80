/*!
 * HTTP client for the browser-automation translation sidecar.
 *
 * The sidecar exposes the browser's translation capability over a small
 * HTTP API: `GET /healthz` for liveness and `POST /translate` for a single
 * translation call. The client is created once per run; construction
 * performs the health check, and a failure there is fatal to the run.
 */

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::app_config::GatewayConfig;
use crate::errors::GatewayError;
use crate::gateway::TranslationGateway;

/// A single translation request sent to the sidecar
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    text: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
}

/// Translation response from the sidecar
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Gateway backed by the translation sidecar's HTTP API
#[derive(Debug)]
pub struct RemoteGateway {
    /// Base URL of the sidecar
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Source language code
    source_language: String,
    /// Target language code
    target_language: String,
}

impl RemoteGateway {
    /// Create a gateway session and verify the sidecar is reachable.
    ///
    /// Initialization failure means the whole run must abort before any
    /// term is processed, so the health check happens here rather than
    /// lazily on the first translate call.
    pub async fn connect(
        config: &GatewayConfig,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self, GatewayError> {
        let base_url = normalize_endpoint(&config.endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            // The sidecar serializes calls into a single browser page
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| GatewayError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        let gateway = Self {
            base_url,
            client,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        };

        gateway.health_check().await?;
        Ok(gateway)
    }

    /// Probe the sidecar's health endpoint
    async fn health_check(&self) -> Result<(), GatewayError> {
        let url = format!("{}/healthz", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Unavailable(format!("Sidecar unreachable at {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(GatewayError::Unavailable(format!(
                "Sidecar health check failed with status {}",
                response.status()
            )));
        }

        debug!("Connected to translation sidecar at {}", self.base_url);
        Ok(())
    }
}

/// Normalize an endpoint string into a scheme-qualified base URL without
/// a trailing slash
fn normalize_endpoint(endpoint: &str) -> Result<String, GatewayError> {
    if endpoint.is_empty() {
        return Err(GatewayError::Unavailable("Endpoint cannot be empty".to_string()));
    }

    let candidate = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| GatewayError::Unavailable(format!("Invalid endpoint {}: {}", endpoint, e)))?;
    if url.host_str().is_none() {
        return Err(GatewayError::Unavailable(format!(
            "Invalid host in endpoint: {}",
            endpoint
        )));
    }

    Ok(candidate.trim_end_matches('/').to_string())
}

#[async_trait]
impl TranslationGateway for RemoteGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            text,
            source: &self.source_language,
            target: &self.target_language,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Sidecar error ({}): {}", status, message);
            return Err(GatewayError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ParseError(e.to_string()))?;

        Ok(body.translated_text)
    }
}
