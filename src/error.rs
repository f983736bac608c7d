use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("mandatory field is missing")]
    MissingField,

    #[error("Invalid source configuration: {0}")]
    Config(String),

    #[error("Invalid target URL '{target}': {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Status {status} : {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode analysis timeline: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// True when the service rejected the token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ResourceError::Status { status: 401, .. })
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
