use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{NewTag, Tag};
use crate::domain::tag::value_objects::{TagId, TagName};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the owner already has the name.
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;

    async fn find_by_name(&self, owner_id: UserId, name: &TagName) -> DomainResult<Option<Tag>>;

    /// All tags of the owner, ordered by name.
    async fn list_for_owner(&self, owner_id: UserId) -> DomainResult<Vec<Tag>>;

    /// Ids that do not exist are skipped.
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
}
