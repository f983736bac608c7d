pub mod adapters;
pub mod commands;
pub mod config;
pub mod logging;
pub mod protocol;
pub mod version;

pub mod error;

pub use adapters::{ResultSource, SonarQube};
pub use error::{ResourceError, Result};
pub use version::Version;
