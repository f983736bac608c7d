use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::adapters::ResultSource;
use crate::config::{RESULT_FILE_NAME, SourceValidator};
use crate::error::Result;
use crate::protocol::{InRequest, InResponse};

/// `in`: stores the current measures of the component and echoes the requested version
///
/// The service cannot answer "as of version X", so the latest measures are
/// fetched whatever version was asked for.
pub struct Get {
    results: Arc<dyn ResultSource>,
}

impl Get {
    pub fn new(results: Arc<dyn ResultSource>) -> Self {
        Self { results }
    }

    /// Writes `result.json` into `destination`, which must already exist.
    pub async fn run(&self, request: &InRequest, destination: &Path) -> Result<InResponse> {
        let source = &request.source;
        SourceValidator::validate(source)?;

        let body = self
            .results
            .fetch_measurement(
                &source.target,
                &source.sonar_token,
                &source.component,
                &source.metrics,
            )
            .await?;

        let path = destination.join(RESULT_FILE_NAME);
        tokio::fs::write(&path, &body).await?;

        info!(path = %path.display(), bytes = body.len(), "Stored measures");

        Ok(InResponse {
            version: request.version.clone(),
        })
    }
}
