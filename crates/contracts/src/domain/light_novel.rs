use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::EntitySummary;
use super::MediaImages;
use crate::enums::ProgressStatus;

/// Per-volume reading progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelVolumeProgress {
    pub id: i64,
    pub volume_number: i64,
    #[serde(default)]
    pub consumed_at: Option<DateTime<Utc>>,
}

/// The personal review attached to a light novel entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelReview {
    pub id: i64,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub storyline_rating: Option<f64>,
    #[serde(default)]
    pub world_building_rating: Option<f64>,
    #[serde(default)]
    pub writing_style_rating: Option<f64>,
    #[serde(default)]
    pub char_development_rating: Option<f64>,
    #[serde(default)]
    pub originality_rating: Option<f64>,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the light novel list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelListItem {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub title_japanese: String,
    pub status: String,
    pub images: MediaImages,
    pub score: f64,
    #[serde(default)]
    pub volumes_count: Option<i64>,
    pub volume_progress: Vec<LightNovelVolumeProgress>,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
    #[serde(default)]
    pub review_text: Option<String>,
}

/// Full light novel payload served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelDetail {
    pub id: i64,
    pub slug: String,
    pub status: String,
    pub title: String,
    pub title_japanese: String,
    pub title_synonyms: String,
    pub published: String,
    #[serde(default)]
    pub volumes_count: Option<i64>,
    pub score: f64,
    pub images: MediaImages,
    pub authors: Vec<EntitySummary>,
    pub genres: Vec<EntitySummary>,
    pub themes: Vec<EntitySummary>,
    pub synopsis: String,
    pub mal_url: String,
    pub review: LightNovelReview,
    pub volume_progress: Vec<LightNovelVolumeProgress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of the admin "add light novel" mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelCreateRequest {
    pub id: i64,
    pub status: String,
    pub title: String,
    pub title_japanese: String,
    pub title_synonyms: String,
    pub published: String,
    #[serde(default)]
    pub volumes_count: Option<i64>,
    pub score: f64,
    pub images: MediaImages,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub synopsis: String,
    pub mal_url: String,
}

/// Body of the admin review update mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelReviewRequest {
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub storyline_rating: Option<f64>,
    #[serde(default)]
    pub world_building_rating: Option<f64>,
    #[serde(default)]
    pub writing_style_rating: Option<f64>,
    #[serde(default)]
    pub char_development_rating: Option<f64>,
    #[serde(default)]
    pub originality_rating: Option<f64>,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
}
