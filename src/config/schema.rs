use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::Duration;

use super::defaults::DEFAULT_TIMEOUT;
use crate::error::{ResourceError, Result};

/// Connection settings shared by every command, taken from the request's `source`
#[derive(Clone, Default, Deserialize)]
pub struct Source {
    /// Base URL of the SonarQube server
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub target: String,

    /// API token, sent as the basic auth username
    #[serde(default, rename = "sonartoken", deserialize_with = "deserialize_trimmed")]
    pub sonar_token: String,

    /// Project / component key
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub component: String,

    /// Metric keys, in request order
    #[serde(default, deserialize_with = "deserialize_metrics")]
    pub metrics: Vec<String>,

    /// Request timeout (e.g., "30s", "2m")
    #[serde(default)]
    pub timeout: Option<String>,
}

impl Source {
    pub fn request_timeout(&self) -> Result<Duration> {
        match self.timeout.as_deref() {
            None => Ok(DEFAULT_TIMEOUT),
            Some(raw) => humantime::parse_duration(raw.trim())
                .map_err(|e| ResourceError::Config(format!("invalid timeout '{}': {}", raw, e))),
        }
    }
}

// The token never reaches the logs.
impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("target", &self.target)
            .field("sonar_token", &"<redacted>")
            .field("component", &self.component)
            .field("metrics", &self.metrics)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Strings are trimmed on the way in so the values sent upstream are the
/// ones that were validated
fn deserialize_trimmed<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).unwrap_or_default())
}

/// Metrics come either as a list or as a single comma-separated string
#[derive(Deserialize)]
#[serde(untagged)]
enum MetricsField {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_metrics<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = match Option::<MetricsField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(MetricsField::List(keys)) => keys,
        Some(MetricsField::Csv(csv)) => csv.split(',').map(String::from).collect(),
    };

    Ok(keys
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_wire_names() {
        let json = r#"{
            "target": "https://sonar.example.com",
            "sonartoken": "SONAR_TOKEN",
            "component": "my:component",
            "metrics": ["ncloc", "coverage"]
        }"#;

        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.target, "https://sonar.example.com");
        assert_eq!(source.sonar_token, "SONAR_TOKEN");
        assert_eq!(source.component, "my:component");
        assert_eq!(source.metrics, vec!["ncloc", "coverage"]);
        assert!(source.timeout.is_none());
    }

    #[test]
    fn test_metrics_from_csv_string() {
        let json = r#"{"metrics": "ncloc, complexity,,violations,coverage"}"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(
            source.metrics,
            vec!["ncloc", "complexity", "violations", "coverage"]
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let json = r#"{
            "target": " https://host/sonar ",
            "sonartoken": "SONAR_TOKEN\n",
            "component": "  my:component"
        }"#;

        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.target, "https://host/sonar");
        assert_eq!(source.sonar_token, "SONAR_TOKEN");
        assert_eq!(source.component, "my:component");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let source: Source = serde_json::from_str(r#"{"target": null, "metrics": null}"#).unwrap();
        assert!(source.target.is_empty());
        assert!(source.sonar_token.is_empty());
        assert!(source.component.is_empty());
        assert!(source.metrics.is_empty());
    }

    #[test]
    fn test_request_timeout() {
        let mut source = Source::default();
        assert_eq!(source.request_timeout().unwrap(), DEFAULT_TIMEOUT);

        source.timeout = Some("2m".to_string());
        assert_eq!(source.request_timeout().unwrap(), Duration::from_secs(120));

        source.timeout = Some("soon".to_string());
        assert!(matches!(
            source.request_timeout(),
            Err(ResourceError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let source = Source {
            sonar_token: "SONAR_TOKEN".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", source);
        assert!(!rendered.contains("SONAR_TOKEN"));
        assert!(rendered.contains("<redacted>"));
    }
}
