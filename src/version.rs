use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ResourceError, Result};

/// Key of the version scheme produced by `check`
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Opaque version token exchanged with the orchestrator
///
/// Serialized as a flat JSON object of strings. `check` only ever emits
/// `{"timestamp": ...}`; other shapes (e.g. `{"ref": ...}`) are carried
/// through `in` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(BTreeMap<String, String>);

impl Version {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version identified by an analysis date
    pub fn timestamp(date: impl Into<String>) -> Self {
        Self::new().with(TIMESTAMP_KEY, date)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// One past analysis of a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub key: String,
    pub date: String,
}

/// Body of the project analyses search endpoint, newest analysis first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisTimeline {
    #[serde(default)]
    pub analyses: Vec<Analysis>,
}

impl AnalysisTimeline {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(ResourceError::Decode)
    }

    /// Versions in the order the orchestrator expects: oldest first, latest last.
    pub fn into_versions(self) -> Vec<Version> {
        derive_versions(self.analyses)
    }
}

/// Maps a newest-first timeline to oldest-first timestamp versions.
///
/// Every analysis yields exactly one version; equal dates are kept.
pub fn derive_versions<I>(analyses: I) -> Vec<Version>
where
    I: IntoIterator<Item = Analysis>,
    I::IntoIter: DoubleEndedIterator,
{
    analyses
        .into_iter()
        .rev()
        .map(|analysis| Version::timestamp(analysis.date))
        .collect()
}
