use super::ItemCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl ItemCommandService {
    pub async fn delete_item(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let item = self.load_owned(actor, id).await?;
        self.write_repo.delete(item.id).await?;
        tracing::info!(item_id = item.id.0, "item deleted");
        Ok(())
    }
}
