use serde::{Deserialize, Serialize};

/// Stored review image, returned after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImage {
    pub id: String,
    pub url: String,
}
