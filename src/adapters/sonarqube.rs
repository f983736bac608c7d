use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::ResultSource;
use crate::config::{ANALYSES_PATH, DEFAULT_TIMEOUT, MEASURES_PATH, Source, user_agent};
use crate::error::{ResourceError, Result};

/// HTTP-backed [`ResultSource`] talking to a SonarQube server
#[derive(Debug, Clone)]
pub struct SonarQube {
    client: reqwest::Client,
    timeout: Duration,
}

impl SonarQube {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(|e| ResourceError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Client configured from the request's source.
    ///
    /// An unparsable timeout falls back to the default here; it is rejected
    /// by validation before any request goes out.
    pub fn for_source(source: &Source) -> Result<Self> {
        let timeout = source.request_timeout().unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self::new()?.with_timeout(timeout))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get(&self, url: Url, auth_token: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "Requesting SonarQube");

        let response = self
            .client
            .get(url.clone())
            .basic_auth(auth_token, Some(""))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| ResourceError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ResourceError::Transport {
                url: url.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "SonarQube rejected the request");
            return Err(ResourceError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(bytes = body.len(), "SonarQube responded");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ResultSource for SonarQube {
    async fn fetch_measurement(
        &self,
        target: &str,
        auth_token: &str,
        component: &str,
        metric_keys: &[String],
    ) -> Result<Vec<u8>> {
        let url = measures_url(target, component, metric_keys)?;
        self.get(url, auth_token).await
    }

    async fn fetch_analysis_timeline(
        &self,
        target: &str,
        auth_token: &str,
        component: &str,
    ) -> Result<Vec<u8>> {
        let url = analyses_url(target, component)?;
        self.get(url, auth_token).await
    }
}

/// `{target}/api/measures/component?component=...&metricKeys=...`
pub fn measures_url(target: &str, component: &str, metric_keys: &[String]) -> Result<Url> {
    let metrics = metric_keys.join(",");
    endpoint_url(
        target,
        MEASURES_PATH,
        &[("component", component), ("metricKeys", metrics.as_str())],
    )
}

/// `{target}/api/project_analyses/search?project=...`
pub fn analyses_url(target: &str, component: &str) -> Result<Url> {
    endpoint_url(target, ANALYSES_PATH, &[("project", component)])
}

/// Appends `path` to the target's own path and form-encodes `query`
///
/// Any query or fragment already on the target is replaced.
fn endpoint_url(target: &str, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let invalid = |source: url::ParseError| ResourceError::InvalidTarget {
        target: target.to_string(),
        source,
    };

    let mut url = Url::parse(target).map_err(invalid)?;

    url.path_segments_mut()
        .map_err(|_| invalid(url::ParseError::RelativeUrlWithoutBase))?
        .pop_if_empty()
        .extend(path.split('/'));

    url.set_fragment(None);
    url.query_pairs_mut().clear().extend_pairs(query);
    Ok(url)
}
