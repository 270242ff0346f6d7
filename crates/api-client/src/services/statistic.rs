use contracts::domain::statistic::{
    AllTimeStatistic, AuthorConsumption, GenreConsumption, MediaConsumption, MediaProgress,
    StudioConsumption, ThemeConsumption, TopMediaAndYearlyCount,
};
use contracts::envelope::ApiResponse;
use contracts::enums::{MediaType, StatisticsView};

use crate::error::ClientError;
use crate::http::ApiClient;

const BASE_STATISTIC_PATH: &str = "/api/statistic";

fn view_params(view: StatisticsView, year: Option<i32>) -> Vec<(&'static str, String)> {
    let mut params = vec![("view", view.label().to_string())];
    if let Some(year) = year {
        params.push(("year", year.to_string()));
    }
    params
}

fn media_param(media: MediaType) -> &'static str {
    // The statistics endpoints take the camelCase key, not the display label.
    match media {
        MediaType::Anime => "anime",
        MediaType::Manga => "manga",
        MediaType::LightNovel => "lightNovel",
    }
}

/// GET /api/statistic/year-range: every year with at least one finished title
pub async fn fetch_year_range(client: &ApiClient) -> Result<ApiResponse<Vec<i64>>, ClientError> {
    let body = client
        .get(&format!("{}/year-range", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/media-consumption
///
/// Monthly view requires a year; the backend rejects the combination
/// otherwise.
pub async fn fetch_media_consumption(
    client: &ApiClient,
    view: StatisticsView,
    year: Option<i32>,
) -> Result<ApiResponse<Vec<MediaConsumption>>, ClientError> {
    let body = client
        .get(
            &format!("{}/media-consumption", BASE_STATISTIC_PATH),
            &view_params(view, year),
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/media-progress
pub async fn fetch_media_progress(
    client: &ApiClient,
    media: MediaType,
) -> Result<ApiResponse<Vec<MediaProgress>>, ClientError> {
    let body = client
        .get(
            &format!("{}/media-progress", BASE_STATISTIC_PATH),
            &[("media", media_param(media).to_string())],
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/genre-consumption
pub async fn fetch_genre_consumption(
    client: &ApiClient,
) -> Result<ApiResponse<Vec<GenreConsumption>>, ClientError> {
    let body = client
        .get(&format!("{}/genre-consumption", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/studio-consumption
pub async fn fetch_studio_consumption(
    client: &ApiClient,
) -> Result<ApiResponse<Vec<StudioConsumption>>, ClientError> {
    let body = client
        .get(&format!("{}/studio-consumption", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/theme-consumption
pub async fn fetch_theme_consumption(
    client: &ApiClient,
) -> Result<ApiResponse<Vec<ThemeConsumption>>, ClientError> {
    let body = client
        .get(&format!("{}/theme-consumption", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/author-consumption
pub async fn fetch_author_consumption(
    client: &ApiClient,
) -> Result<ApiResponse<Vec<AuthorConsumption>>, ClientError> {
    let body = client
        .get(&format!("{}/author-consumption", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/all-time
pub async fn fetch_all_time(
    client: &ApiClient,
) -> Result<ApiResponse<AllTimeStatistic>, ClientError> {
    let body = client
        .get(&format!("{}/all-time", BASE_STATISTIC_PATH), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET /api/statistic/top-media-and-yearly-count: home page summary
pub async fn fetch_top_media_and_yearly_count(
    client: &ApiClient,
) -> Result<ApiResponse<TopMediaAndYearlyCount>, ClientError> {
    let body = client
        .get(
            &format!("{}/top-media-and-yearly-count", BASE_STATISTIC_PATH),
            &[],
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}
