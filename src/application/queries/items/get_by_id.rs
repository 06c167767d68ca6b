use super::{ItemQueryService, attach_tags};
use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::item::{ItemId, specifications::CanAccessItemSpec},
};

impl ItemQueryService {
    pub async fn get_item(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<ItemDto> {
        let id = ItemId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|item| CanAccessItemSpec::new(item, actor.id).is_satisfied())
            .ok_or_else(|| ApplicationError::not_found("item not found"))?;

        let mut dtos = attach_tags(
            self.item_tag_repo.as_ref(),
            self.tag_repo.as_ref(),
            vec![item],
        )
        .await?;
        dtos.pop()
            .ok_or_else(|| ApplicationError::not_found("item not found"))
    }
}
