//! Request and response envelopes exchanged with the orchestrator over stdin/stdout.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

use crate::config::Source;
use crate::error::Result;
use crate::version::Version;

/// `check` input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub source: Source,
    /// Last version the orchestrator knows about, if any
    #[serde(default)]
    pub version: Option<Version>,
}

/// `check` output, oldest version first
pub type CheckResponse = Vec<Version>;

/// `in` input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InRequest {
    #[serde(default)]
    pub source: Source,
    /// Version chosen by the orchestrator; required
    pub version: Version,
    #[serde(default)]
    pub params: Option<Value>,
}

/// `in` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InResponse {
    pub version: Version,
}

/// `out` output
pub type OutResponse = Vec<Version>;

/// Writes a response as one compact, newline-terminated JSON document
pub fn write_response<T: Serialize, W: Write>(mut writer: W, response: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, response).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
