use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body emitted for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    /// Canonical reason phrase of the HTTP status.
    pub error: String,
}

/// Standard success envelope wrapping a single payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Success envelope for plain lists, e.g. the courses of a single bootcamp.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: data.len(),
            data,
        }
    }
}

/// Empty object payload returned by delete endpoints.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyDto {}

/// Reference to a neighbouring page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageRefDto {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRefDto>,
}

/// Filtered, sorted and paginated list envelope shared by every list endpoint.
///
/// Records are emitted as JSON objects so that `select` can project them down to the
/// requested fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdvancedResultsDto {
    pub success: bool,
    pub count: usize,
    /// Total number of records matching the filters, across all pages.
    pub total: u64,
    pub pagination: PaginationDto,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
}
