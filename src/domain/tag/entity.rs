// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::{TagColor, TagId, TagName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub owner_id: UserId,
    pub name: TagName,
    pub color: Option<TagColor>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub owner_id: UserId,
    pub name: TagName,
    pub color: Option<TagColor>,
    pub created_at: DateTime<Utc>,
}
