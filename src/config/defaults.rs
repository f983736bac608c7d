use std::time::Duration;

/// Timeout applied to each request when the source does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File written into the destination directory by `in`
pub const RESULT_FILE_NAME: &str = "result.json";

/// Endpoint returning the current measures of a component
pub const MEASURES_PATH: &str = "api/measures/component";

/// Endpoint returning the analysis history of a project
pub const ANALYSES_PATH: &str = "api/project_analyses/search";

/// User agent sent with every request
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
