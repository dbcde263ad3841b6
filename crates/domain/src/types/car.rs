//! Car catalogue wire types

use serde::{Deserialize, Serialize};

/// One row of the catalogue or favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListItemResponse {
    pub id: i64,
    pub brand: String,
    pub car_class: String,
    pub model: String,
    pub year_of_issue: i32,
    pub rent: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CarListItemResponse {
    /// "Brand Model" as shown on list cards.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailResponse {
    pub id: i64,
    #[serde(default)]
    pub model_id: i64,
    pub brand: String,
    pub model: String,
    pub body_type: String,
    pub car_class: String,
    pub year_of_issue: i32,
    pub gos_number: String,
    pub vin: String,
    pub status: String,
    pub rent: f64,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub model_id: i64,
    pub year_of_issue: i32,
    pub gos_number: String,
    pub vin: String,
    pub rent: f64,
    pub state_id: i64,
}

/// Partial update; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_issue: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gos_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarStateRequest {
    pub state_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarStateResponse {
    pub id: i64,
    pub status: String,
}

/// Price bounds for the current filter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxCellForFilters {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: i64,
    pub url: String,
}

/// A binary file sent as one part of a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: content_type.into(), bytes }
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
