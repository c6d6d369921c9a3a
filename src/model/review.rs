use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bootcamp::BootcampSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub bootcamp: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bootcamp_details: Option<BootcampSummaryDto>,
    pub user: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewDto {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}
