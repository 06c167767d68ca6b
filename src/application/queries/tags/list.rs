use super::TagQueryService;
use crate::application::{
    dto::{AuthenticatedUser, TagDto},
    error::ApplicationResult,
};

impl TagQueryService {
    pub async fn list_tags(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list_for_owner(actor.id).await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
