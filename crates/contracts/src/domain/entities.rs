use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The id/name pair embedded inside media detail payloads.
///
/// Genre, studio, theme, and author all share this shape; the service layer
/// picks the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
}

/// Lookup row annotated with how many media reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityWithMediaCount {
    pub id: i64,
    pub name: String,
    pub connected_media_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
