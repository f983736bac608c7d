use crate::protocol::OutResponse;

/// `out`: nothing is published, so no version is produced
#[derive(Debug, Default, Clone, Copy)]
pub struct Put;

impl Put {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> OutResponse {
        Vec::new()
    }
}
