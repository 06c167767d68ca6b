use super::{ItemQueryService, attach_tags};
use crate::{
    application::{
        dto::ItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::item::ShareSlug,
};

impl ItemQueryService {
    /// Read a published item by its share slug. No authentication involved.
    pub async fn get_public_item(&self, slug: &str) -> ApplicationResult<ItemDto> {
        let not_found = || ApplicationError::not_found("shared item not found");
        let slug = ShareSlug::new(slug).map_err(|_| not_found())?;
        let item = self
            .read_repo
            .find_public_by_slug(&slug)
            .await?
            .filter(|item| item.is_public)
            .ok_or_else(not_found)?;

        let mut dtos = attach_tags(
            self.item_tag_repo.as_ref(),
            self.tag_repo.as_ref(),
            vec![item],
        )
        .await?;
        dtos.pop().ok_or_else(not_found)
    }
}
