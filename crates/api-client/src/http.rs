use contracts::envelope::EnvelopeError;
use reqwest::multipart::Form;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Thin wrapper over `reqwest::Client` bound to one backend base URL.
///
/// The base URL is a constructor parameter and is never read from ambient
/// process state. Timeouts and retries, if wanted, belong on the
/// `reqwest::Client` passed to [`with_client`](Self::with_client).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Build on a preconfigured `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path, returning the raw JSON body.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).query(query).send().await?;
        Self::read_body(response).await
    }

    /// POST a JSON body, returning the raw JSON response body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Self::read_body(response).await
    }

    /// POST a multipart form (image uploads), returning the raw JSON body.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        let response = self.http.post(&url).multipart(form).send().await?;
        Self::read_body(response).await
    }

    /// PUT a JSON body, returning the raw JSON response body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.http.put(&url).json(body).send().await?;
        Self::read_body(response).await
    }

    /// DELETE with a JSON body (bulk deletes send `{ "ids": [...] }`).
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url).json(body).send().await?;
        Self::read_body(response).await
    }

    /// DELETE without a body (single-resource deletes).
    pub async fn delete_path(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url).send().await?;
        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        let text = response.text().await?;
        decode_body(status, &text)
    }
}

/// Turn an HTTP status plus raw body text into a JSON value.
///
/// Error statuses still yield the body when the backend sent JSON, so the
/// envelope parser can surface `{ "success": false, "error": ... }` as a
/// `Failure` value for the caller. A non-JSON body on an error status becomes
/// [`ClientError::UnexpectedStatus`]; on a success status it is a malformed
/// payload, reported at once.
fn decode_body(status: StatusCode, body: &str) -> Result<Value, ClientError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(value),
        Err(err) if status.is_success() => {
            tracing::warn!(%status, "response body is not JSON: {}", err);
            Err(ClientError::Envelope(EnvelopeError::MalformedPayload(
                err.to_string(),
            )))
        }
        Err(_) => Err(ClientError::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::envelope::ApiResponse;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/anime"), "http://localhost:3000/api/anime");
    }

    #[test]
    fn base_url_without_slash_is_kept() {
        let client = ApiClient::new("https://api.otaku-corner.example");
        assert_eq!(
            client.url("/api/genre"),
            "https://api.otaku-corner.example/api/genre"
        );
    }

    #[test]
    fn success_status_with_json_body_decodes() {
        let body = decode_body(StatusCode::OK, r#"{"success":true,"data":{"id":1}}"#).unwrap();
        assert_eq!(body["success"], true);
    }

    #[test]
    fn error_status_with_failure_envelope_is_passed_through() {
        let body = decode_body(
            StatusCode::NOT_FOUND,
            r#"{"success":false,"error":"Anime not found!"}"#,
        )
        .unwrap();
        let response: ApiResponse<Value> = ApiResponse::from_value(&body).unwrap();
        assert_eq!(response.error_message(), Some("Anime not found!"));
    }

    #[test]
    fn error_status_with_non_json_body_is_unexpected_status() {
        let result = decode_body(StatusCode::BAD_GATEWAY, "<html>502</html>");
        match result {
            Err(ClientError::UnexpectedStatus(status)) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn success_status_with_non_json_body_is_malformed_payload() {
        let result = decode_body(StatusCode::OK, "not json");
        assert!(matches!(
            result,
            Err(ClientError::Envelope(EnvelopeError::MalformedPayload(_)))
        ));
    }
}
