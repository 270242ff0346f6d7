use contracts::domain::upload::UploadImage;
use contracts::envelope::{ApiResponse, MessageResponse};
use contracts::enums::MediaType;
use reqwest::multipart::{Form, Part};

use crate::error::ClientError;
use crate::http::ApiClient;

const BASE_UPLOAD_PATH: &str = "/api/upload";

fn upload_form(image: Vec<u8>, filename: &str, media_type: MediaType, review_id: i64) -> Form {
    let part = Part::bytes(image).file_name(filename.to_string());
    Form::new()
        .part("image", part)
        .text("type", media_type.label())
        .text("reviewId", review_id.to_string())
}

/// POST /api/upload (multipart: `image`, `type`, `reviewId`)
pub async fn upload_image(
    client: &ApiClient,
    image: Vec<u8>,
    filename: &str,
    media_type: MediaType,
    review_id: i64,
) -> Result<ApiResponse<UploadImage>, ClientError> {
    let form = upload_form(image, filename, media_type, review_id);
    let body = client.post_multipart(BASE_UPLOAD_PATH, form).await?;
    Ok(ApiResponse::from_value(&body)?)
}

/// DELETE /api/upload/:id
pub async fn delete_image(
    client: &ApiClient,
    id: &str,
) -> Result<ApiResponse<MessageResponse>, ClientError> {
    let body = client
        .delete_path(&format!("{}/{}", BASE_UPLOAD_PATH, id))
        .await?;
    Ok(ApiResponse::from_value(&body)?)
}
