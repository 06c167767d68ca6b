use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub color: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            user_id: tag.owner_id.into(),
            name: tag.name.into(),
            color: tag.color.map(Into::into),
            created_at: tag.created_at,
        }
    }
}

/// Compact tag embedded in item payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagSummaryDto {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

impl From<Tag> for TagSummaryDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
            color: tag.color.map(Into::into),
        }
    }
}
