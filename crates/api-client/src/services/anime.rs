use contracts::domain::anime::{
    AnimeCreateRequest, AnimeDetail, AnimeListItem, AnimeReviewRequest,
};
use contracts::envelope::{ApiListResponse, ApiResponse, MessageResponse};
use contracts::enums::{ProgressStatus, SortOrder};
use serde_json::json;

use super::{push_opt, push_sort, PageRequest};
use crate::error::ClientError;
use crate::http::ApiClient;

const BASE_ANIME_PATH: &str = "/api/anime";

/// Search, sort and filter parameters of the anime list endpoint.
#[derive(Debug, Clone, Default)]
pub struct AnimeQuery {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub filter_genre: Option<i64>,
    pub filter_studio: Option<i64>,
    pub filter_theme: Option<i64>,
    pub filter_progress_status: Option<ProgressStatus>,
    pub filter_mal_score: Option<String>,
    pub filter_personal_score: Option<String>,
    pub filter_type: Option<String>,
}

impl AnimeQuery {
    fn to_params(&self, page: PageRequest) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        page.push_params(&mut params);
        push_opt(&mut params, "q", self.query.clone());
        push_sort(&mut params, &self.sort_by, self.sort_order);
        push_opt(&mut params, "filterGenre", self.filter_genre.map(|id| id.to_string()));
        push_opt(&mut params, "filterStudio", self.filter_studio.map(|id| id.to_string()));
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
        push_opt(&mut params, "filterType", self.filter_type.clone());
        params
    }
}

/// GET /api/anime
pub async fn fetch_all(
    client: &ApiClient,
    page: PageRequest,
    query: &AnimeQuery,
) -> Result<ApiListResponse<AnimeListItem>, ClientError> {
    let body = client.get(BASE_ANIME_PATH, &query.to_params(page)).await?;
    Ok(ApiResponse::from_list_value(&body)?)
}

/// GET /api/anime/:id
pub async fn fetch_by_id(
    client: &ApiClient,
    id: &str,
) -> Result<ApiResponse<AnimeDetail>, ClientError> {
    let body = client
        .get(&format!("{}/{}", BASE_ANIME_PATH, id), &[])
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// POST /api/anime
pub async fn add(
    client: &ApiClient,
    entries: &[AnimeCreateRequest],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .post(BASE_ANIME_PATH, &json!({ "data": entries }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/anime/:id/review
pub async fn update_review(
    client: &ApiClient,
    id: &str,
    review: &AnimeReviewRequest,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(&format!("{}/{}/review", BASE_ANIME_PATH, id), review)
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// PUT /api/anime/:id/review with only the progress status
pub async fn update_progress_status(
    client: &ApiClient,
    id: &str,
    status: ProgressStatus,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .put(
            &format!("{}/{}/review", BASE_ANIME_PATH, id),
            &json!({ "progressStatus": status }),
        )
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// DELETE /api/anime (bulk, body `{ "ids": [...] }`)
pub async fn delete(
    client: &ApiClient,
    ids: &[String],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .delete(BASE_ANIME_PATH, &json!({ "ids": ids }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_query_emits_every_filter() {
        let query = AnimeQuery {
            query: Some("frieren".to_string()),
            sort_by: Some("score".to_string()),
            sort_order: Some(SortOrder::Desc),
            filter_genre: Some(4),
            filter_studio: Some(21),
            filter_theme: None,
            filter_progress_status: Some(ProgressStatus::Completed),
            filter_mal_score: None,
            filter_personal_score: None,
            filter_type: Some("TV".to_string()),
        };
        let params = query.to_params(PageRequest::new(1, 10));
        assert!(params.contains(&("currentPage", "1".to_string())));
        assert!(params.contains(&("q", "frieren".to_string())));
        assert!(params.contains(&("sortOrder", "desc".to_string())));
        assert!(params.contains(&("filterProgressStatus", "COMPLETED".to_string())));
        assert!(params.contains(&("filterType", "TV".to_string())));
        assert!(!params.iter().any(|(key, _)| *key == "filterTheme"));
    }

    #[test]
    fn default_query_only_carries_pagination() {
        let params = AnimeQuery::default().to_params(PageRequest::new(3, 20));
        assert_eq!(
            params,
            vec![
                ("currentPage", "3".to_string()),
                ("limitPerPage", "20".to_string())
            ]
        );
    }
}
