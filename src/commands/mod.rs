//! The three verbs of the resource protocol.

pub mod check;
pub mod get;
pub mod put;

pub use check::Check;
pub use get::Get;
pub use put::Put;

#[cfg(test)]
pub(crate) mod stub {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::adapters::ResultSource;
    use crate::error::{ResourceError, Result};

    /// Canned reply of the stub
    #[derive(Debug, Clone)]
    pub enum Reply {
        Body(Vec<u8>),
        Status(u16, String),
    }

    impl Reply {
        fn into_result(self) -> Result<Vec<u8>> {
            match self {
                Reply::Body(body) => Ok(body),
                Reply::Status(status, body) => Err(ResourceError::Status { status, body }),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Measurement {
            target: String,
            auth_token: String,
            component: String,
            metric_keys: Vec<String>,
        },
        Timeline {
            target: String,
            auth_token: String,
            component: String,
        },
    }

    /// In-memory [`ResultSource`] recording every call it receives
    pub struct StubSource {
        reply: Reply,
        calls: Mutex<Vec<Call>>,
    }

    impl StubSource {
        pub fn replying(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_body(body: &[u8]) -> Self {
            Self::replying(Reply::Body(body.to_vec()))
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultSource for StubSource {
        async fn fetch_measurement(
            &self,
            target: &str,
            auth_token: &str,
            component: &str,
            metric_keys: &[String],
        ) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(Call::Measurement {
                target: target.to_string(),
                auth_token: auth_token.to_string(),
                component: component.to_string(),
                metric_keys: metric_keys.to_vec(),
            });
            self.reply.clone().into_result()
        }

        async fn fetch_analysis_timeline(
            &self,
            target: &str,
            auth_token: &str,
            component: &str,
        ) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(Call::Timeline {
                target: target.to_string(),
                auth_token: auth_token.to_string(),
                component: component.to_string(),
            });
            self.reply.clone().into_result()
        }
    }
}
