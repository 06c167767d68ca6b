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
    domain::item::{Item, ItemKind, ItemTitle, ShareSlugAction, plan_share_slug},
};

pub struct UpdateItemCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<String>,
    pub source_url: Option<String>,
    pub is_public: Option<bool>,
    pub share_slug: Option<String>,
    /// `Some(vec![])` clears every tag; `None` leaves them alone.
    pub tag_ids: Option<Vec<i64>>,
}

impl ItemCommandService {
    pub async fn update_item(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateItemCommand,
    ) -> ApplicationResult<ItemDto> {
        let current = self.load_owned(actor, command.id).await?;

        let title = command.title.map(ItemTitle::new).transpose()?;
        let kind = command
            .kind
            .map(|kind| kind.trim().parse::<ItemKind>())
            .transpose()?;
        let tag_ids = command.tag_ids.map(parse_tag_ids).transpose()?;
        let requested = self.normalize_requested(command.share_slug.as_deref());
        let action = plan_share_slug(Some(&current), command.is_public, requested.as_deref());

        let mut edited = current;
        if let Some(title) = title {
            edited.title = title;
        }
        if let Some(content) = command.content {
            edited.content = content;
        }
        if let Some(kind) = kind {
            edited.kind = kind;
        }
        if command.source_url.is_some() {
            edited.source_url = non_blank(command.source_url);
        }

        let mut attempt = 0;
        let saved = loop {
            attempt += 1;
            let item = self.apply_visibility(edited.clone(), &action).await?;
            match self.write_repo.save(item).await {
                Ok(item) => break item,
                Err(err) => retry_on_slug_race(err, attempt)?,
            }
        };

        if let Some(tag_ids) = tag_ids {
            self.item_tag_repo
                .replace_for_item(saved.id, &tag_ids)
                .await?;
            tracing::debug!(item_id = saved.id.0, count = tag_ids.len(), "item tags replaced");
        }

        self.with_tags(saved).await
    }

    async fn apply_visibility(
        &self,
        mut item: Item,
        action: &ShareSlugAction,
    ) -> ApplicationResult<Item> {
        let now = self.clock.now();
        match action {
            ShareSlugAction::Keep => item.updated_at = now,
            ShareSlugAction::Clear => item.unpublish(now),
            ShareSlugAction::Allocate { .. } => {
                if let Some(slug) = self.resolve_slug(action, &item.title, Some(item.id)).await? {
                    item.publish(slug, now);
                }
            }
        }
        Ok(item)
    }
}
