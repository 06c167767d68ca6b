use crate::domain::errors::DomainResult;
use crate::domain::item::entity::{Item, ItemFilter, ItemTag, NewItem};
use crate::domain::item::value_objects::{ItemId, ShareSlug};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ItemWriteRepository: Send + Sync {
    /// Store a new item together with its initial tag rows as one unit:
    /// either both land or neither does.
    /// Fails with `DomainError::SlugTaken` if another item already holds the slug.
    async fn insert(&self, item: NewItem, tag_ids: &[TagId]) -> DomainResult<Item>;

    /// Persist every mutable field of the item in a single write.
    /// Fails with `DomainError::SlugTaken` on a share slug collision.
    async fn save(&self, item: Item) -> DomainResult<Item>;

    /// Delete the item together with all of its tag associations.
    async fn delete(&self, id: ItemId) -> DomainResult<()>;
}

#[async_trait]
pub trait ItemReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ItemId) -> DomainResult<Option<Item>>;

    /// Any item holding `slug`, public or not, other than `exclude`.
    async fn find_by_share_slug(
        &self,
        slug: &ShareSlug,
        exclude: Option<ItemId>,
    ) -> DomainResult<Option<Item>>;

    async fn find_public_by_slug(&self, slug: &ShareSlug) -> DomainResult<Option<Item>>;

    /// Owner's items, newest first.
    async fn list_for_owner(&self, owner_id: UserId, filter: &ItemFilter)
    -> DomainResult<Vec<Item>>;
}

#[async_trait]
pub trait ItemTagRepository: Send + Sync {
    async fn delete_for_item(&self, item_id: ItemId) -> DomainResult<()>;

    /// Insert rows as given. No dedup and no check that the tags exist.
    async fn insert_many(&self, links: &[ItemTag]) -> DomainResult<()>;

    async fn list_for_items(&self, item_ids: &[ItemId]) -> DomainResult<Vec<ItemTag>>;

    /// Full replace of the item's tag set. Implementations backed by a
    /// transactional store should override this to run as one unit.
    async fn replace_for_item(&self, item_id: ItemId, tag_ids: &[TagId]) -> DomainResult<()> {
        self.delete_for_item(item_id).await?;
        if tag_ids.is_empty() {
            return Ok(());
        }
        let links: Vec<ItemTag> = tag_ids
            .iter()
            .map(|&tag_id| ItemTag { item_id, tag_id })
            .collect();
        self.insert_many(&links).await
    }
}
