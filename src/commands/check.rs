use std::sync::Arc;
use tracing::{debug, info};

use crate::adapters::ResultSource;
use crate::config::SourceValidator;
use crate::error::Result;
use crate::protocol::{CheckRequest, CheckResponse};
use crate::version::AnalysisTimeline;

/// `check`: lists one version per analysis, oldest first
pub struct Check {
    results: Arc<dyn ResultSource>,
}

impl Check {
    pub fn new(results: Arc<dyn ResultSource>) -> Self {
        Self { results }
    }

    /// Validates the source, then asks the service for the analysis timeline.
    ///
    /// The whole timeline is returned every time. A previous version sent by
    /// the orchestrator is only logged; the orchestrator itself skips what it
    /// has already seen.
    pub async fn run(&self, request: &CheckRequest) -> Result<CheckResponse> {
        let source = &request.source;
        SourceValidator::validate(source)?;

        if let Some(previous) = &request.version {
            debug!(?previous, "Orchestrator supplied a previous version");
        }

        let body = self
            .results
            .fetch_analysis_timeline(&source.target, &source.sonar_token, &source.component)
            .await?;

        let versions = AnalysisTimeline::from_slice(&body)?.into_versions();

        info!(
            component = %source.component,
            versions = versions.len(),
            "Found analyses"
        );
        Ok(versions)
    }
}
