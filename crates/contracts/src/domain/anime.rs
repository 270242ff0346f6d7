use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::EntitySummary;
use super::MediaImages;
use crate::enums::ProgressStatus;

/// One aired episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeEpisode {
    #[serde(default)]
    pub id: Option<String>,
    pub aired: String,
    pub number: i64,
    pub title: String,
    pub title_japanese: String,
    pub title_romaji: String,
}

/// The personal review attached to an anime entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeReview {
    pub id: String,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub storyline_rating: Option<f64>,
    #[serde(default)]
    pub quality_rating: Option<f64>,
    #[serde(default)]
    pub voice_acting_rating: Option<f64>,
    #[serde(default)]
    pub sound_track_rating: Option<f64>,
    #[serde(default)]
    pub char_development_rating: Option<f64>,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
    #[serde(default)]
    pub consumed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the anime list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeListItem {
    pub id: String,
    pub title: String,
    pub title_japanese: String,
    pub rating: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub images: MediaImages,
    pub score: f64,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub consumed_at: Option<DateTime<Utc>>,
    pub fetched_episode: i64,
}

/// Full anime payload served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetail {
    pub id: String,
    pub mal_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub rating: String,
    #[serde(default)]
    pub season: Option<String>,
    pub title: String,
    pub title_japanese: String,
    pub title_synonyms: String,
    pub source: String,
    pub aired: String,
    pub broadcast: String,
    #[serde(default)]
    pub episodes_count: Option<i64>,
    pub duration: String,
    pub score: f64,
    pub images: MediaImages,
    pub genres: Vec<EntitySummary>,
    pub studios: Vec<EntitySummary>,
    pub themes: Vec<EntitySummary>,
    pub episodes: Vec<AnimeEpisode>,
    pub synopsis: String,
    #[serde(default)]
    pub trailer: Option<String>,
    pub mal_url: String,
    pub review: AnimeReview,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of the admin "add anime" mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeCreateRequest {
    pub mal_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub rating: String,
    #[serde(default)]
    pub season: Option<String>,
    pub title: String,
    pub title_japanese: String,
    pub title_synonyms: String,
    pub source: String,
    pub aired: String,
    pub broadcast: String,
    #[serde(default)]
    pub episodes_count: Option<i64>,
    pub duration: String,
    pub score: f64,
    pub images: MediaImages,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub themes: Vec<String>,
    pub synopsis: String,
    #[serde(default)]
    pub trailer: Option<String>,
    pub mal_url: String,
}

/// Body of the admin review update mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeReviewRequest {
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub storyline_rating: Option<f64>,
    #[serde(default)]
    pub quality_rating: Option<f64>,
    #[serde(default)]
    pub voice_acting_rating: Option<f64>,
    #[serde(default)]
    pub sound_track_rating: Option<f64>,
    #[serde(default)]
    pub char_development_rating: Option<f64>,
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub personal_score: Option<f64>,
    #[serde(default)]
    pub consumed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_item_decodes_from_wire_shape() {
        let body = json!({
            "id": "a1b2",
            "title": "Frieren",
            "titleJapanese": "葬送のフリーレン",
            "rating": "PG-13",
            "type": "TV",
            "status": "Finished Airing",
            "images": { "image_url": "https://cdn.example/frieren.jpg" },
            "score": 9.1,
            "progressStatus": "Completed",
            "personalScore": 9.5,
            "review": null,
            "consumedAt": "2024-04-01T00:00:00Z",
            "fetchedEpisode": 28
        });
        let item: AnimeListItem = serde_json::from_value(body).unwrap();
        assert_eq!(item.kind, "TV");
        assert_eq!(item.progress_status, ProgressStatus::Completed);
        assert_eq!(item.fetched_episode, 28);
        assert!(item.images.large_image_url.is_none());
    }
}
