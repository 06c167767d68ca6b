use std::collections::{HashMap, HashSet};

use crate::{
    application::{dto::ItemDto, error::ApplicationResult},
    domain::{
        item::{Item, ItemId, ItemTagRepository},
        tag::{Tag, TagId, TagRepository},
    },
};

/// Resolve the tags of each item through the join rows.
///
/// Ids that no longer resolve to a tag are skipped, and a tag linked to the
/// same item more than once is reported once, in first-link order.
pub(crate) async fn resolve_tags(
    item_tag_repo: &dyn ItemTagRepository,
    tag_repo: &dyn TagRepository,
    item_ids: &[ItemId],
) -> ApplicationResult<HashMap<ItemId, Vec<Tag>>> {
    if item_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = item_tag_repo.list_for_items(item_ids).await?;
    let mut wanted: Vec<TagId> = links.iter().map(|link| link.tag_id).collect();
    wanted.sort_unstable();
    wanted.dedup();

    let known: HashMap<TagId, Tag> = tag_repo
        .find_by_ids(&wanted)
        .await?
        .into_iter()
        .map(|tag| (tag.id, tag))
        .collect();

    let mut seen: HashSet<(ItemId, TagId)> = HashSet::new();
    let mut resolved: HashMap<ItemId, Vec<Tag>> = HashMap::new();
    for link in links {
        if !seen.insert((link.item_id, link.tag_id)) {
            continue;
        }
        if let Some(tag) = known.get(&link.tag_id) {
            resolved.entry(link.item_id).or_default().push(tag.clone());
        }
    }
    Ok(resolved)
}

/// Pair every item with its resolved tags, keeping item order.
pub(crate) async fn attach_tags(
    item_tag_repo: &dyn ItemTagRepository,
    tag_repo: &dyn TagRepository,
    items: Vec<Item>,
) -> ApplicationResult<Vec<ItemDto>> {
    let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
    let mut tags = resolve_tags(item_tag_repo, tag_repo, &ids).await?;
    Ok(items
        .into_iter()
        .map(|item| {
            let item_tags = tags.remove(&item.id).unwrap_or_default();
            ItemDto::from_parts(item, item_tags)
        })
        .collect())
}
