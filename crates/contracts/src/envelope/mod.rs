//! Response envelope shared by every backend endpoint.
//!
//! Every API call answers with `{ "success": true, "data": ... }` or
//! `{ "success": false, "error": "..." }`; list endpoints nest one page of
//! items plus pagination metadata inside `data`. This module decodes raw
//! bodies into typed values once, at the boundary, and rejects malformed
//! shapes outright. UI code never sees a half-formed response.

mod message;
mod page;

pub use message::MessageResponse;
pub use page::{Page, PageMetadata};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Faults raised while decoding or consuming an envelope.
///
/// Backend-reported domain errors are *not* represented here. Those arrive
/// as the `Failure` variant of [`ApiResponse`] and are plain data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The body carries no boolean `success` flag.
    #[error("response body has no boolean `success` flag")]
    MissingDiscriminant,
    /// The declared branch is missing its field, or `data` does not decode
    /// into the expected type.
    #[error("malformed response payload: {0}")]
    MalformedPayload(String),
    /// Pagination metadata is absent, incomplete, or inconsistent.
    #[error("malformed pagination metadata: {0}")]
    MalformedMetadata(String),
    /// A caller asked for the payload of a failure response.
    #[error("expected a successful response, got error: {0}")]
    UnexpectedFailure(String),
}

/// Outcome of one API call: the typed payload or a backend-reported error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T },
    Failure { error: String },
}

/// Response of a list endpoint: a page of items plus its metadata.
pub type ApiListResponse<T> = ApiResponse<Page<T>>;

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Payload of a success response, `None` on failure.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Backend error message of a failure response, `None` on success.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Take the payload out of a success response.
    ///
    /// Fails with [`EnvelopeError::UnexpectedFailure`] on the failure variant;
    /// check [`is_success`](Self::is_success) or use [`data`](Self::data)
    /// when the branch is not already known.
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error } => Err(EnvelopeError::UnexpectedFailure(error)),
        }
    }

    /// Transform the success payload, passing a failure through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success { data } => ApiResponse::Success { data: f(data) },
            Self::Failure { error } => ApiResponse::Failure { error },
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a plain envelope from a raw response body.
    pub fn from_value(body: &Value) -> Result<Self, EnvelopeError> {
        match split_envelope(body)? {
            RawBranch::Success(data) => {
                let data = serde_json::from_value(data.clone())
                    .map_err(|e| EnvelopeError::MalformedPayload(e.to_string()))?;
                Ok(Self::Success { data })
            }
            RawBranch::Failure(error) => Ok(Self::Failure { error }),
        }
    }

    /// Decode a plain envelope from raw JSON text.
    pub fn from_json_str(body: &str) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| EnvelopeError::MalformedPayload(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode a list envelope, validating the pagination metadata.
    pub fn from_list_value(body: &Value) -> Result<ApiListResponse<T>, EnvelopeError> {
        match split_envelope(body)? {
            RawBranch::Success(data) => {
                let page = Page::from_value(data)?;
                Ok(ApiResponse::Success { data: page })
            }
            RawBranch::Failure(error) => Ok(ApiResponse::Failure { error }),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Encode back into the raw wire shape.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Success { data } => json!({ "success": true, "data": data }),
            Self::Failure { error } => json!({ "success": false, "error": error }),
        }
    }
}

enum RawBranch<'a> {
    Success(&'a Value),
    Failure(String),
}

fn split_envelope(body: &Value) -> Result<RawBranch<'_>, EnvelopeError> {
    let Some(success) = body.get("success").and_then(Value::as_bool) else {
        return Err(EnvelopeError::MissingDiscriminant);
    };
    if success {
        match body.get("data") {
            Some(data) if !data.is_null() => Ok(RawBranch::Success(data)),
            _ => Err(EnvelopeError::MalformedPayload(
                "success response without a `data` field".to_string(),
            )),
        }
    } else {
        match body.get("error").and_then(Value::as_str) {
            Some(error) => Ok(RawBranch::Failure(error.to_string())),
            None => Err(EnvelopeError::MalformedPayload(
                "failure response without an `error` string".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Genre {
        id: i64,
        name: String,
    }

    #[test]
    fn success_envelope_decodes_data_untouched() {
        let body = json!({ "success": true, "data": { "id": 1, "name": "Action" } });
        let response: ApiResponse<Genre> = ApiResponse::from_value(&body).unwrap();
        assert!(response.is_success());
        let genre = response.into_data().unwrap();
        assert_eq!(
            genre,
            Genre {
                id: 1,
                name: "Action".to_string()
            }
        );
    }

    #[test]
    fn failure_envelope_keeps_error_as_data() {
        let body = json!({ "success": false, "error": "Not found" });
        let response: ApiResponse<Genre> = ApiResponse::from_value(&body).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error_message(), Some("Not found"));
        assert_eq!(response.data(), None);
        assert_eq!(
            response.into_data(),
            Err(EnvelopeError::UnexpectedFailure("Not found".to_string()))
        );
    }

    #[test]
    fn missing_discriminant_is_rejected() {
        for body in [
            json!({ "data": { "id": 1, "name": "Action" } }),
            json!({ "success": "yes", "data": {} }),
            json!(null),
        ] {
            let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_value(&body);
            assert_eq!(result, Err(EnvelopeError::MissingDiscriminant));
        }
    }

    #[test]
    fn success_without_data_is_malformed() {
        let body = json!({ "success": true });
        let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_value(&body);
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));

        let body = json!({ "success": true, "data": null });
        let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_value(&body);
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));
    }

    #[test]
    fn failure_without_error_is_malformed() {
        let body = json!({ "success": false });
        let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_value(&body);
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));
    }

    #[test]
    fn data_of_wrong_shape_is_malformed() {
        let body = json!({ "success": true, "data": { "id": "not-a-number" } });
        let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_value(&body);
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));
    }

    #[test]
    fn map_transforms_success_only() {
        let success: ApiResponse<i64> = ApiResponse::Success { data: 20 };
        assert_eq!(success.map(|n| n + 1), ApiResponse::Success { data: 21 });

        let failure: ApiResponse<i64> = ApiResponse::Failure {
            error: "boom".to_string(),
        };
        assert_eq!(
            failure.map(|n| n + 1),
            ApiResponse::Failure {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn one_item_list_envelope_decodes() {
        let body = json!({
            "success": true,
            "data": {
                "data": [{ "id": 1, "name": "Action" }],
                "metadata": {
                    "currentPage": 1,
                    "limitPerPage": 10,
                    "pageCount": 1,
                    "itemCount": 1
                }
            }
        });
        let response: ApiListResponse<Genre> = ApiResponse::from_list_value(&body).unwrap();
        let page = response.into_data().unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Action");
        assert_eq!(page.metadata.current_page, 1);
        assert_eq!(page.metadata.item_count, 1);
    }

    #[test]
    fn empty_page_with_zero_page_count_is_valid() {
        let body = json!({
            "success": true,
            "data": {
                "data": [],
                "metadata": {
                    "currentPage": 1,
                    "limitPerPage": 10,
                    "pageCount": 0,
                    "itemCount": 0
                }
            }
        });
        let response: ApiListResponse<Genre> = ApiResponse::from_list_value(&body).unwrap();
        let page = response.into_data().unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.page_count, 0);
    }

    #[test]
    fn inconsistent_page_count_is_rejected() {
        let body = json!({
            "success": true,
            "data": {
                "data": [{ "id": 1, "name": "Action" }],
                "metadata": {
                    "currentPage": 1,
                    "limitPerPage": 10,
                    "pageCount": 5,
                    "itemCount": 1
                }
            }
        });
        let result: Result<ApiListResponse<Genre>, _> = ApiResponse::from_list_value(&body);
        assert!(matches!(result, Err(EnvelopeError::MalformedMetadata(_))));
    }

    #[test]
    fn failure_list_envelope_passes_through() {
        let body = json!({ "success": false, "error": "Not found" });
        let response: ApiListResponse<Genre> = ApiResponse::from_list_value(&body).unwrap();
        assert_eq!(response.error_message(), Some("Not found"));
    }

    #[test]
    fn plain_envelope_round_trips() {
        let original: ApiResponse<Genre> = ApiResponse::Success {
            data: Genre {
                id: 7,
                name: "Drama".to_string(),
            },
        };
        let reparsed = ApiResponse::from_value(&original.to_value()).unwrap();
        assert_eq!(original, reparsed);

        let failure: ApiResponse<Genre> = ApiResponse::Failure {
            error: "Not found".to_string(),
        };
        let reparsed = ApiResponse::from_value(&failure.to_value()).unwrap();
        assert_eq!(failure, reparsed);
    }

    #[test]
    fn list_envelope_round_trips() {
        let original: ApiListResponse<Genre> = ApiResponse::Success {
            data: Page {
                items: vec![Genre {
                    id: 1,
                    name: "Action".to_string(),
                }],
                metadata: PageMetadata {
                    current_page: 1,
                    limit_per_page: 10,
                    page_count: 1,
                    item_count: 1,
                },
            },
        };
        let reparsed = ApiResponse::from_list_value(&original.to_value()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn json_text_parses_like_value() {
        let response: ApiResponse<Genre> =
            ApiResponse::from_json_str(r#"{"success":false,"error":"Not found"}"#).unwrap();
        assert_eq!(response.error_message(), Some("Not found"));

        let result: Result<ApiResponse<Genre>, _> = ApiResponse::from_json_str("not json");
        assert!(matches!(result, Err(EnvelopeError::MalformedPayload(_))));
    }
}
