//! Domain DTOs exchanged with the catalog backend.
//!
//! Field names are camelCase on the wire; the image object keeps the
//! snake_case keys the upstream MyAnimeList payloads use.

pub mod anime;
pub mod entities;
pub mod light_novel;
pub mod manga;
pub mod statistic;
pub mod upload;

use serde::{Deserialize, Serialize};

/// Cover art URLs, passed through from the upstream metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImages {
    pub image_url: String,
    #[serde(default)]
    pub large_image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
}
