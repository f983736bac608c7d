use async_trait::async_trait;

use crate::error::Result;

pub mod sonarqube;

pub use sonarqube::SonarQube;

/// Trait for the remote analysis service
///
/// Both operations issue a single authenticated GET and hand back the raw
/// response body. Commands receive an implementation at construction, so
/// tests can swap in a stub for the HTTP-backed [`SonarQube`].
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Fetches the current measures of `component` for `metric_keys`
    ///
    /// # Returns
    /// The response body, unparsed
    async fn fetch_measurement(
        &self,
        target: &str,
        auth_token: &str,
        component: &str,
        metric_keys: &[String],
    ) -> Result<Vec<u8>>;

    /// Fetches the analysis history of `component`, newest analysis first
    async fn fetch_analysis_timeline(
        &self,
        target: &str,
        auth_token: &str,
        component: &str,
    ) -> Result<Vec<u8>>;
}
