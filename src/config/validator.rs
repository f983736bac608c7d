use super::schema::Source;
use crate::error::{ResourceError, Result};

pub struct SourceValidator;

impl SourceValidator {
    /// Checks the source before any request is made.
    ///
    /// Every mandatory field must be non-empty. Strings are already trimmed
    /// when the source is decoded. An empty field is reported as
    /// [`ResourceError::MissingField`] regardless of which one it was, so the
    /// orchestrator always sees the same message.
    pub fn validate(source: &Source) -> Result<()> {
        let mandatory = [
            source.target.as_str(),
            source.sonar_token.as_str(),
            source.component.as_str(),
        ];

        if mandatory.iter().any(|field| field.is_empty()) || source.metrics.is_empty() {
            return Err(ResourceError::MissingField);
        }

        // Validate timeout format if present
        source.request_timeout()?;

        Ok(())
    }
}
