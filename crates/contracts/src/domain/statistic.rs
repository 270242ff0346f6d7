use serde::{Deserialize, Serialize};

use super::MediaImages;

/// Media finished per period (a month or a year, as the query asked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaConsumption {
    pub period: String,
    pub anime: i64,
    pub manga: i64,
    pub light_novel: i64,
}

/// Count of entries per progress status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaProgress {
    pub status: String,
    pub count: i64,
    /// Chart color hint, when the backend supplies one.
    #[serde(default)]
    pub fill: Option<String>,
}

/// Consumption totals per genre across all media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreConsumption {
    pub name: String,
    pub anime_count: i64,
    pub manga_count: i64,
    pub light_novel_count: i64,
    pub total_count: i64,
}

/// Consumption totals per studio (anime only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConsumption {
    pub name: String,
    pub anime_count: i64,
    pub total_count: i64,
}

/// Consumption totals per theme across all media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConsumption {
    pub name: String,
    pub anime_count: i64,
    pub manga_count: i64,
    pub light_novel_count: i64,
    pub total_count: i64,
}

/// Consumption totals per author (written media).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorConsumption {
    pub name: String,
    pub manga_count: i64,
    pub light_novel_count: i64,
    pub total_count: i64,
}

/// Lifetime catalog totals and average scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeStatistic {
    pub all_media_count: i64,
    pub anime_count: i64,
    pub manga_count: i64,
    pub light_novel_count: i64,
    pub average_mal_score: f64,
    pub average_personal_score: f64,
}

/// Highest-rated title of one media category plus this year's count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMediaEntry {
    pub count: i64,
    #[serde(default)]
    pub images: Option<MediaImages>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Home page summary: the top title and yearly count per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMediaAndYearlyCount {
    pub anime: TopMediaEntry,
    pub manga: TopMediaEntry,
    pub light_novel: TopMediaEntry,
}
