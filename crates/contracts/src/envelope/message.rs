use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by mutations that carry no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
