use super::ItemCommandService;
use crate::application::{
    dto::{AuthenticatedUser, ItemDto},
    error::ApplicationResult,
};

impl ItemCommandService {
    pub async fn toggle_star(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<ItemDto> {
        let mut item = self.load_owned(actor, id).await?;
        item.toggle_star(self.clock.now());
        let saved = self.write_repo.save(item).await?;
        self.with_tags(saved).await
    }
}
