//! AtomSphere REST client.
//!
//! The client performs exactly one HTTP attempt per call and never lets a
//! failure escape as an `Err` or panic: every outcome is reported as data so
//! the tool handlers can render failures as ordinary text replies.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::credentials;
use crate::core::Config;

/// Bound on each outbound call. No retry or backoff beyond this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a single API call.
///
/// Transport-level success carries the response body verbatim; the caller
/// decides how to interpret it (JSON for query endpoints, XML for component
/// fetches).
#[derive(Debug, Clone)]
pub enum ApiOutcome {
    /// 2xx response; the raw body text.
    Success(String),

    /// Missing credentials, network error, or non-2xx status.
    Failure(ApiFailure),
}

/// A normalized API failure, rendered into the textual reply.
#[derive(Debug, Clone, Serialize)]
pub struct ApiFailure {
    /// Human-readable summary of what went wrong.
    pub message: String,

    /// Transport context, absent for configuration failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FailureDetails>,
}

/// Transport-level failure context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetails {
    pub message: String,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    pub error: String,
}

impl ApiFailure {
    /// Failure reported when the credential set is incomplete. Points the
    /// caller at the diagnostic marker; no network call was attempted.
    pub fn missing_credentials(diagnostics_path: &Path) -> Self {
        Self {
            message: format!(
                "Missing Boomi credentials. Check {} for details.",
                diagnostics_path.display()
            ),
            details: None,
        }
    }

    fn transport(endpoint: &str, status: Option<reqwest::StatusCode>, error: String) -> Self {
        Self {
            message: "Failed to communicate with Boomi API.".to_string(),
            details: Some(FailureDetails {
                message: "Error calling Boomi API".to_string(),
                endpoint: endpoint.to_string(),
                status: status.map(|s| s.as_u16()),
                status_text: status
                    .and_then(|s| s.canonical_reason())
                    .map(|s| s.to_string()),
                error,
            }),
        }
    }

    /// Pretty-printed detail block for the reply text.
    pub fn details_pretty(&self) -> String {
        self.details
            .as_ref()
            .and_then(|d| serde_json::to_string_pretty(d).ok())
            .unwrap_or_else(|| "{}".to_string())
    }
}

/// HTTP client for the AtomSphere REST API.
#[derive(Debug, Clone)]
pub struct BoomiClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl BoomiClient {
    /// Create a new client over the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Issue a single call against `<base_url>/<endpoint>`.
    ///
    /// Credentials are revalidated first; when incomplete, the failure is
    /// returned immediately without touching the network. `body` is sent as
    /// a JSON payload when present.
    pub async fn call(&self, endpoint: &str, method: Method, body: Option<&Value>) -> ApiOutcome {
        let config = &self.config;

        if !credentials::validate(&config.boomi, &config.storage.diagnostics_path) {
            return ApiOutcome::Failure(ApiFailure::missing_credentials(
                &config.storage.diagnostics_path,
            ));
        }

        let url = format!(
            "{}/{}",
            config.boomi.base_url.trim_end_matches('/'),
            endpoint
        );
        debug!("Calling Boomi API: {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&config.boomi.user, Some(&config.boomi.token))
            .timeout(REQUEST_TIMEOUT);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let failure = ApiFailure::transport(endpoint, err.status(), err.to_string());
                error!("Boomi API error: {}", failure.details_pretty());
                return ApiOutcome::Failure(failure);
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let failure = ApiFailure::transport(endpoint, Some(status), err.to_string());
                error!("Boomi API error: {}", failure.details_pretty());
                return ApiOutcome::Failure(failure);
            }
        };

        if status.is_success() {
            ApiOutcome::Success(text)
        } else {
            let failure = ApiFailure::transport(endpoint, Some(status), text);
            error!("Boomi API error: {}", failure.details_pretty());
            ApiOutcome::Failure(failure)
        }
    }
}
