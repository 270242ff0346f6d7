//! Generic lookup-entity service.
//!
//! Genre, studio, theme, and author share one wire shape and one set of
//! endpoints; the kind only selects the base path.

use contracts::domain::entities::EntityWithMediaCount;
use contracts::envelope::{ApiListResponse, ApiResponse, MessageResponse};
use serde_json::json;

use super::{push_opt, PageRequest};
use crate::error::ClientError;
use crate::http::ApiClient;

/// Which lookup resource to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Genre,
    Studio,
    Theme,
    Author,
}

impl EntityKind {
    pub fn base_path(&self) -> &'static str {
        match self {
            EntityKind::Genre => "/api/genre",
            EntityKind::Studio => "/api/studio",
            EntityKind::Theme => "/api/theme",
            EntityKind::Author => "/api/author",
        }
    }
}

/// GET the full lookup list, unpaginated (public front end).
pub async fn fetch_all(
    client: &ApiClient,
    kind: EntityKind,
) -> Result<ApiResponse<Vec<EntityWithMediaCount>>, ClientError> {
    let body = client.get(kind.base_path(), &[]).await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// GET one page of the lookup list with an optional name search (admin).
pub async fn fetch_page(
    client: &ApiClient,
    kind: EntityKind,
    page: PageRequest,
    query: Option<String>,
) -> Result<ApiListResponse<EntityWithMediaCount>, ClientError> {
    let mut params = Vec::new();
    page.push_params(&mut params);
    push_opt(&mut params, "q", query);
    let body = client.get(kind.base_path(), &params).await?;
    Ok(ApiResponse::from_list_value(&body)?)
}

/// POST a new lookup entry
pub async fn add(
    client: &ApiClient,
    kind: EntityKind,
    name: &str,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .post(kind.base_path(), &json!({ "name": name }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// DELETE lookup entries (bulk, body `{ "ids": [...] }`)
pub async fn delete(
    client: &ApiClient,
    kind: EntityKind,
    ids: &[i64],
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .delete(kind.base_path(), &json!({ "ids": ids }))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}
