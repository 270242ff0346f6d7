use contracts::domain::light_novel::{
    LightNovelCreateRequest, LightNovelDetail, LightNovelListItem, LightNovelReviewRequest,
};
use contracts::envelope::{ApiListResponse, ApiResponse, MessageResponse};
use contracts::enums::{ProgressStatus, SortOrder};
use serde_json::json;

use super::{push_opt, push_sort, PageRequest};
use crate::error::ClientError;
use crate::http::ApiClient;

const BASE_LIGHT_NOVEL_PATH: &str = "/api/light-novel";

/// Search, sort and filter parameters of the light novel list endpoint.
#[derive(Debug, Clone, Default)]
pub struct LightNovelQuery {
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

impl LightNovelQuery {
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

/// GET /api/light-novel
pub async fn fetch_all(
    client: &ApiClient,
    page: PageRequest,
    query: &LightNovelQuery,
) -> Result<ApiListResponse<LightNovelListItem>, ClientError> {
    let body = client
        .get(BASE_LIGHT_NOVEL_PATH, &query.to_params(page))
        .await?;
    Ok(ApiResponse::from_list_value(&body)?)
}

/// GET /api/light-novel/:id
pub async fn fetch_by_id(
    client: &ApiClient,
    id: i64,
) -> Result<ApiResponse<LightNovelDetail>, ClientError> {
    let body = client
        .get(&format!("{}/{}", BASE_LIGHT_NOVEL_PATH, id), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// POST /api/light-novel
pub async fn add(
    client: &ApiClient,
    entries: &[LightNovelCreateRequest],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .post(BASE_LIGHT_NOVEL_PATH, &json!({ "data": entries }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/light-novel/:id/review
pub async fn update_review(
    client: &ApiClient,
    id: i64,
    review: &LightNovelReviewRequest,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(&format!("{}/{}/review", BASE_LIGHT_NOVEL_PATH, id), review)
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/light-novel/:id/review with only the progress status
pub async fn update_progress_status(
    client: &ApiClient,
    id: i64,
    status: ProgressStatus,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(
            &format!("{}/{}/review", BASE_LIGHT_NOVEL_PATH, id),
            &json!({ "progressStatus": status }),
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// DELETE /api/light-novel (bulk, body `{ "ids": [...] }`)
pub async fn delete(
    client: &ApiClient,
    ids: &[i64],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .delete(BASE_LIGHT_NOVEL_PATH, &json!({ "ids": ids }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}
