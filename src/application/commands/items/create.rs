use super::{
    ItemCommandService,
    service::{non_blank, parse_tag_ids},
    slug::retry_on_slug_race,
};
use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDto},
        error::ApplicationResult,
    },
    domain::item::{ItemKind, ItemTitle, NewItem, ShareSlugAction, plan_share_slug},
};

pub struct CreateItemCommand {
    pub title: String,
    pub content: Option<String>,
    pub kind: String,
    pub source_url: Option<String>,
    pub is_public: Option<bool>,
    pub share_slug: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
}

impl ItemCommandService {
    pub async fn create_item(
        &self,
        actor: &AuthenticatedUser,
        command: CreateItemCommand,
    ) -> ApplicationResult<ItemDto> {
        let title = ItemTitle::new(command.title)?;
        let kind: ItemKind = command.kind.trim().parse()?;
        let tag_ids = parse_tag_ids(command.tag_ids.unwrap_or_default())?;
        let requested = self.normalize_requested(command.share_slug.as_deref());
        let action = plan_share_slug(None, command.is_public, requested.as_deref());
        let is_public = matches!(action, ShareSlugAction::Allocate { .. });
        let content = command.content.unwrap_or_default();
        let source_url = non_blank(command.source_url);

        let mut attempt = 0;
        let item = loop {
            attempt += 1;
            let share_slug = self.resolve_slug(&action, &title, None).await?;
            let new_item = NewItem {
                owner_id: actor.id,
                title: title.clone(),
                content: content.clone(),
                kind,
                source_url: source_url.clone(),
                is_public,
                share_slug,
                created_at: self.clock.now(),
            };
            match self.write_repo.insert(new_item, &tag_ids).await {
                Ok(item) => break item,
                Err(err) => retry_on_slug_race(err, attempt)?,
            }
        };

        tracing::info!(
            item_id = item.id.0,
            user_id = actor.id.0,
            tags = tag_ids.len(),
            "item created"
        );
        self.with_tags(item).await
    }
}
