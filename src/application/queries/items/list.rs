use super::{ItemQueryService, attach_tags};
use crate::{
    application::{
        dto::{AuthenticatedUser, ItemDto},
        error::ApplicationResult,
    },
    domain::item::{ItemFilter, ItemKind},
};

/// Filter for an owner's item list. `kind` of `"all"` (or absent) means every kind.
#[derive(Debug, Default)]
pub struct ListItemsQuery {
    pub kind: Option<String>,
    pub search: Option<String>,
}

impl ListItemsQuery {
    fn into_filter(self) -> ApplicationResult<ItemFilter> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(raw.parse::<ItemKind>()?),
        };
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(ItemFilter { kind, search })
    }
}

impl ItemQueryService {
    pub async fn list_items(
        &self,
        actor: &AuthenticatedUser,
        query: ListItemsQuery,
    ) -> ApplicationResult<Vec<ItemDto>> {
        let filter = query.into_filter()?;
        let items = self.read_repo.list_for_owner(actor.id, &filter).await?;
        attach_tags(self.item_tag_repo.as_ref(), self.tag_repo.as_ref(), items).await
    }
}
