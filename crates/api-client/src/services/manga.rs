use contracts::domain::manga::{
    MangaCreateRequest, MangaDetail, MangaListItem, MangaReviewRequest,
};
use contracts::envelope::{ApiListResponse, ApiResponse, MessageResponse};
use contracts::enums::{ProgressStatus, SortOrder};
use serde_json::json;

use super::{push_opt, push_sort, PageRequest};
use crate::error::ClientError;
use crate::http::ApiClient;

const BASE_MANGA_PATH: &str = "/api/manga";

/// Search, sort and filter parameters of the manga list endpoint.
#[derive(Debug, Clone, Default)]
pub struct MangaQuery {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub filter_author: Option<i64>,
    pub filter_genre: Option<i64>,
    pub filter_theme: Option<i64>,
    pub filter_progress_status: Option<ProgressStatus>,
    pub filter_mal_score: Option<String>,
    pub filter_personal_score: Option<String>,
}

impl MangaQuery {
    fn to_params(&self, page: PageRequest) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        page.push_params(&mut params);
        push_opt(&mut params, "q", self.query.clone());
        push_sort(&mut params, &self.sort_by, self.sort_order);
        push_opt(&mut params, "filterAuthor", self.filter_author.map(|id| id.to_string()));
        push_opt(&mut params, "filterGenre", self.filter_genre.map(|id| id.to_string()));
        push_opt(&mut params, "filterTheme", self.filter_theme.map(|id| id.to_string()));
        push_opt(
            &mut params,
            "filterProgressStatus",
            self.filter_progress_status.map(|s| s.key().to_string()),
        );
        push_opt(&mut params, "filterMALScore", self.filter_mal_score.clone());
        push_opt(
            &mut params,
            "filterPersonalScore",
            self.filter_personal_score.clone(),
        );
        params
    }
}

/// GET /api/manga
pub async fn fetch_all(
    client: &ApiClient,
    page: PageRequest,
    query: &MangaQuery,
) -> Result<ApiListResponse<MangaListItem>, ClientError> {
    let body = client.get(BASE_MANGA_PATH, &query.to_params(page)).await?;
    Ok(ApiResponse::from_list_value(&body)?)
}

/// GET /api/manga/:id
pub async fn fetch_by_id(
    client: &ApiClient,
    id: i64,
) -> Result<ApiResponse<MangaDetail>, ClientError> {
    let body = client
        .get(&format!("{}/{}", BASE_MANGA_PATH, id), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// POST /api/manga
pub async fn add(
    client: &ApiClient,
    entries: &[MangaCreateRequest],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .post(BASE_MANGA_PATH, &json!({ "data": entries }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/manga/:id/review
pub async fn update_review(
    client: &ApiClient,
    id: i64,
    review: &MangaReviewRequest,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(&format!("{}/{}/review", BASE_MANGA_PATH, id), review)
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/manga/:id/review with only the progress status
pub async fn update_progress_status(
    client: &ApiClient,
    id: i64,
    status: ProgressStatus,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(
            &format!("{}/{}/review", BASE_MANGA_PATH, id),
            &json!({ "progressStatus": status }),
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// DELETE /api/manga (bulk, body `{ "ids": [...] }`)
pub async fn delete(
    client: &ApiClient,
    ids: &[i64],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .delete(BASE_MANGA_PATH, &json!({ "ids": ids }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}
