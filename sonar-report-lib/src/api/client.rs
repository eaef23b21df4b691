//! Analysis server API client
//!
//! Minimal client for the two endpoints a report needs: component measures
//! and quality gate status.

use super::models::{ComponentWithMetrics, ProjectStatus, WrappedProjectStatus};
use super::{ApiError, Shutdown};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "      api";

/// Time allowed for a whole request, from connecting to reading the body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const MEASURES_PATH: &str = "api/measures/component";
const PROJECT_STATUS_PATH: &str = "api/qualitygates/project_status";

/// Join a server base URL and a relative path with exactly one `/` between them.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let separator = if base_url.ends_with('/') { "" } else { "/" };
    format!("{base_url}{separator}{path}")
}

/// Analysis server API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    shutdown: Shutdown,
}

impl Client {
    /// Create a client that authenticates every request with `token`
    pub fn new(base_url: impl Into<String>, token: &str, shutdown: Shutdown) -> crate::Result<Self> {
        Self::with_timeout(base_url, token, shutdown, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, token: &str, shutdown: Shutdown, timeout: Duration) -> crate::Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderValue};

        let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);

        let client = reqwest::Client::builder()
            .user_agent("sonar-report")
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
            shutdown,
        })
    }

    /// Fetch the measures of `project_key` for the given metric keys, along with the
    /// metadata of those metrics.
    ///
    /// An empty `pull_request` asks for the whole-project analysis.
    pub async fn fetch_measures(
        &self,
        project_key: &str,
        pull_request: &str,
        metric_keys: &[String],
    ) -> Result<ComponentWithMetrics, ApiError> {
        let metric_keys = metric_keys.join(",");
        let mut query = vec![
            ("additionalFields", "period,metrics"),
            ("component", project_key),
            ("metricKeys", metric_keys.as_str()),
        ];

        if !pull_request.is_empty() {
            query.push(("pullRequest", pull_request));
        }

        self.get(MEASURES_PATH, &query).await
    }

    /// Fetch the quality gate status of `project_key`
    pub async fn fetch_project_status(&self, project_key: &str) -> Result<ProjectStatus, ApiError> {
        let wrapped: WrappedProjectStatus = self.get(PROJECT_STATUS_PATH, &[("projectKey", project_key)]).await?;
        Ok(wrapped.project_status)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let url = endpoint_url(&self.base_url, path);
        log::debug!(target: LOG_TARGET, "GET {url} (timeout {:?})", self.timeout);

        let exchange = async {
            let response = self.client.get(&url).query(query).send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            () = self.shutdown.requested() => {
                log::debug!(target: LOG_TARGET, "GET {url} cancelled");
                return Err(ApiError::Cancelled);
            }
            result = exchange => result.map_err(ApiError::from_transport)?,
        };

        log::debug!(target: LOG_TARGET, "GET {url} returned {status}");

        if status != StatusCode::OK {
            return Err(ApiError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
