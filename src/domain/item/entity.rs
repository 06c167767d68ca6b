// src/domain/item/entity.rs
use crate::domain::item::value_objects::{ItemId, ItemKind, ItemTitle, ShareSlug};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub owner_id: UserId,
    pub title: ItemTitle,
    pub content: String,
    pub kind: ItemKind,
    pub source_url: Option<String>,
    pub is_starred: bool,
    pub is_public: bool,
    pub share_slug: Option<ShareSlug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn publish(&mut self, slug: ShareSlug, now: DateTime<Utc>) {
        self.is_public = true;
        self.share_slug = Some(slug);
        self.updated_at = now;
    }

    /// Making an item private always drops its slug.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_public = false;
        self.share_slug = None;
        self.updated_at = now;
    }

    pub fn toggle_star(&mut self, now: DateTime<Utc>) {
        self.is_starred = !self.is_starred;
        self.updated_at = now;
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub owner_id: UserId,
    pub title: ItemTitle,
    pub content: String,
    pub kind: ItemKind,
    pub source_url: Option<String>,
    pub is_public: bool,
    pub share_slug: Option<ShareSlug>,
    pub created_at: DateTime<Utc>,
}

/// One item-tag membership row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTag {
    pub item_id: ItemId,
    pub tag_id: TagId,
}

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub kind: Option<ItemKind>,
    pub search: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(kind) = self.kind {
            if item.kind != kind {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(needle) => {
                let needle = needle.to_lowercase();
                item.title.as_str().to_lowercase().contains(&needle)
                    || item.content.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}
