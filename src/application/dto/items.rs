use crate::domain::{item::{Item, ItemKind}, tag::Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{serde_time, tags::TagSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub source_url: Option<String>,
    /// Reserved for link enrichment; always an empty object for now.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub source_metadata: Map<String, Value>,
    pub is_starred: bool,
    pub is_public: bool,
    pub share_slug: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<TagSummaryDto>,
}

impl ItemDto {
    pub fn from_parts(item: Item, tags: Vec<Tag>) -> Self {
        Self {
            id: item.id.into(),
            user_id: item.owner_id.into(),
            title: item.title.into(),
            content: item.content,
            kind: item.kind,
            source_url: item.source_url,
            source_metadata: Map::new(),
            is_starred: item.is_starred,
            is_public: item.is_public,
            share_slug: item.share_slug.map(Into::into),
            created_at: item.created_at,
            updated_at: item.updated_at,
            tags: tags.into_iter().map(TagSummaryDto::from).collect(),
        }
    }
}
