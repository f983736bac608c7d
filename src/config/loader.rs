use serde::de::DeserializeOwned;
use std::io::Read;

use crate::error::{ResourceError, Result};

/// Decodes protocol requests handed over on stdin
pub struct RequestLoader;

impl RequestLoader {
    pub fn load_from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
        serde_json::from_reader(reader).map_err(ResourceError::InvalidRequest)
    }

    pub fn load_from_string<T: DeserializeOwned>(content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(ResourceError::InvalidRequest)
    }
}
