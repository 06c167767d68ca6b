use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{Profile, ProfileChanges};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>>;

    /// Insert the profile if missing, otherwise apply the changes.
    async fn upsert(&self, changes: ProfileChanges) -> DomainResult<Profile>;
}
