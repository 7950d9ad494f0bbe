use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i32,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Rendered HTML of `content`.
    pub html: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateNewsDto {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateNewsDto {
    pub title: Option<String>,
    pub content: Option<String>,
}
