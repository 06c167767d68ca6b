use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::items::resolve_tags,
    },
    domain::{
        item::{
            Item, ItemId, ItemReadRepository, ItemTagRepository, ItemWriteRepository,
            services::ShareSlugService, specifications::CanAccessItemSpec,
        },
        tag::{TagId, TagRepository},
    },
};

pub struct ItemCommandService {
    pub(super) write_repo: Arc<dyn ItemWriteRepository>,
    pub(super) read_repo: Arc<dyn ItemReadRepository>,
    pub(super) item_tag_repo: Arc<dyn ItemTagRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<ShareSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ItemCommandService {
    pub fn new(
        write_repo: Arc<dyn ItemWriteRepository>,
        read_repo: Arc<dyn ItemReadRepository>,
        item_tag_repo: Arc<dyn ItemTagRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<ShareSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            item_tag_repo,
            tag_repo,
            slug_service,
            clock,
        }
    }

    /// Load an item the actor owns. Foreign items are reported as missing.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<Item> {
        let id = ItemId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("item not found"))?;

        if !CanAccessItemSpec::new(&item, actor.id).is_satisfied() {
            return Err(ApplicationError::not_found("item not found"));
        }
        Ok(item)
    }

    pub(super) async fn with_tags(&self, item: Item) -> ApplicationResult<ItemDto> {
        let mut tags = resolve_tags(
            self.item_tag_repo.as_ref(),
            self.tag_repo.as_ref(),
            &[item.id],
        )
        .await?;
        let item_tags = tags.remove(&item.id).unwrap_or_default();
        Ok(ItemDto::from_parts(item, item_tags))
    }
}

pub(super) fn parse_tag_ids(raw: Vec<i64>) -> ApplicationResult<Vec<TagId>> {
    raw.into_iter()
        .map(|id| TagId::new(id).map_err(ApplicationError::from))
        .collect()
}

/// Blank strings mean "no value" for optional text columns.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
