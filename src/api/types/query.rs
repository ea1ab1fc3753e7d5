//! Query request payloads: JSON body or multipart form

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use super::error::{ApiError, ApiErrorType};
use super::json::Json;
use crate::domain::{Attachments, FoodItem, Query, UploadedFile, UserDetails};

const MISSING_QUERY: &str = "Missing 'query' field";

/// JSON body of `POST /v1/query`
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
    #[serde(default)]
    pub attachments: Option<AttachmentsPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttachmentsPayload {
    #[serde(default)]
    pub image: Option<ImagePayload>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "orderId")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default, alias = "userDetails")]
    pub user_details: Option<UserDetails>,
    #[serde(default, alias = "foodItem")]
    pub food_item: Option<FoodItem>,
}

/// Inline image, base64 encoded
#[derive(Debug, Deserialize)]
pub struct ImagePayload {
    #[serde(default, alias = "fileName")]
    pub file_name: String,
    #[serde(default, alias = "contentType")]
    pub content_type: Option<String>,
    pub data: String,
}

impl QueryRequest {
    pub fn into_query(self) -> Result<Query, ApiError> {
        let text = self
            .query
            .ok_or_else(|| ApiError::bad_request(MISSING_QUERY).with_param("query"))?;

        let attachments = match self.attachments {
            Some(payload) => payload.into_attachments()?,
            None => Attachments::new(),
        };

        Ok(Query::new(text).with_attachments(attachments))
    }
}

impl AttachmentsPayload {
    fn into_attachments(self) -> Result<Attachments, ApiError> {
        let image = self.image.map(ImagePayload::into_file).transpose()?;

        Ok(Attachments {
            image,
            description: self.description,
            order_id: self.order_id,
            quantity: self.quantity,
            user_details: self.user_details,
            food_item: self.food_item,
        })
    }
}

impl ImagePayload {
    fn into_file(self) -> Result<UploadedFile, ApiError> {
        let data = STANDARD.decode(self.data.trim()).map_err(|e| {
            ApiError::bad_request(format!("Image data is not valid base64: {}", e))
                .with_param("attachments.image.data")
        })?;

        Ok(upload(self.file_name, self.content_type, data))
    }
}

/// Builds the upload, guessing the content type from the file name when the
/// client sent none
fn upload(
    file_name: String,
    content_type: Option<String>,
    data: impl Into<bytes::Bytes>,
) -> UploadedFile {
    let file = UploadedFile::new(file_name, data);
    let content_type = content_type.unwrap_or_else(|| file.media_type());
    file.with_content_type(content_type)
}

/// Extracts a [`Query`] from either a JSON body or a multipart form.
///
/// Multipart fields: `query`, `image` (file), `description`, `order_id`,
/// `quantity`, and JSON-encoded `user_details` and `food_item`.
pub struct QueryInput(pub Query);

impl<S> FromRequest<S> for QueryInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
            return read_multipart(multipart).await.map(QueryInput);
        }

        let Json(request) = Json::<QueryRequest>::from_request(req, state).await?;
        request.into_query().map(QueryInput)
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Query, ApiError> {
    let mut text = None;
    let mut attachments = Attachments::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "query" => text = Some(field.text().await.map_err(multipart_error)?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;

                attachments = attachments.with_image(upload(file_name, content_type, data));
            }
            "description" => {
                let description = field.text().await.map_err(multipart_error)?;
                attachments = attachments.with_description(description);
            }
            "order_id" | "orderId" => {
                let order_id = field.text().await.map_err(multipart_error)?;
                attachments = attachments.with_order_id(order_id);
            }
            "quantity" => {
                let raw = field.text().await.map_err(multipart_error)?;
                attachments = attachments.with_quantity(parse_quantity(&raw)?);
            }
            "user_details" | "userDetails" => {
                let raw = field.text().await.map_err(multipart_error)?;
                attachments = attachments.with_user_details(parse_json_field(&name, &raw)?);
            }
            "food_item" | "foodItem" => {
                let raw = field.text().await.map_err(multipart_error)?;
                attachments = attachments.with_food_item(parse_json_field(&name, &raw)?);
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let text = text.ok_or_else(|| ApiError::bad_request(MISSING_QUERY).with_param("query"))?;
    Ok(Query::new(text).with_attachments(attachments))
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::new(err.status(), ApiErrorType::InvalidRequestError, err.body_text())
}

fn parse_quantity(raw: &str) -> Result<u32, ApiError> {
    raw.trim().parse().map_err(|_| {
        ApiError::bad_request("Quantity must be a whole number.").with_param("quantity")
    })
}

fn parse_json_field<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| {
        ApiError::bad_request(format!("Field '{}' is not valid JSON: {}", name, e))
            .with_param(name)
    })
}
