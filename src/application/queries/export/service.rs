use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ExportDto, TagDto},
        error::ApplicationResult,
        queries::items::attach_tags,
    },
    domain::{
        item::{ItemFilter, ItemReadRepository, ItemTagRepository},
        tag::TagRepository,
    },
};

pub struct ExportQueryService {
    read_repo: Arc<dyn ItemReadRepository>,
    item_tag_repo: Arc<dyn ItemTagRepository>,
    tag_repo: Arc<dyn TagRepository>,
}

impl ExportQueryService {
    pub fn new(
        read_repo: Arc<dyn ItemReadRepository>,
        item_tag_repo: Arc<dyn ItemTagRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            read_repo,
            item_tag_repo,
            tag_repo,
        }
    }

    pub async fn export(&self, actor: &AuthenticatedUser) -> ApplicationResult<ExportDto> {
        let items = self
            .read_repo
            .list_for_owner(actor.id, &ItemFilter::default())
            .await?;
        let items = attach_tags(self.item_tag_repo.as_ref(), self.tag_repo.as_ref(), items).await?;
        let tags = self
            .tag_repo
            .list_for_owner(actor.id)
            .await?
            .into_iter()
            .map(TagDto::from)
            .collect();

        tracing::info!(user_id = actor.id.0, items = items.len(), "export generated");
        Ok(ExportDto { items, tags })
    }
}
