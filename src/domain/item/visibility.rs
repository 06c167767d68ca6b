// src/domain/item/visibility.rs
use crate::domain::item::entity::Item;

/// What has to happen to an item's share slug when it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareSlugAction {
    Keep,
    Clear,
    /// Resolve a fresh unique slug, from `requested` if given, else from the title.
    Allocate { requested: Option<String> },
}

/// Decide the slug transition for an item.
///
/// `current` is `None` for an item that does not exist yet. `is_public` is the
/// requested visibility, `None` meaning "unchanged". `requested_slug` must
/// already be normalised; an empty value counts as absent.
pub fn plan_share_slug(
    current: Option<&Item>,
    is_public: Option<bool>,
    requested_slug: Option<&str>,
) -> ShareSlugAction {
    let was_public = current.map(|item| item.is_public).unwrap_or(false);
    let current_slug = current.and_then(|item| item.share_slug.as_ref());
    let requested = requested_slug.filter(|slug| !slug.is_empty());

    if !is_public.unwrap_or(was_public) {
        return ShareSlugAction::Clear;
    }

    if !was_public || current_slug.is_none() {
        return ShareSlugAction::Allocate {
            requested: requested.map(str::to_owned),
        };
    }

    match (requested, current_slug) {
        (Some(requested), Some(current)) if requested != current.as_str() => {
            ShareSlugAction::Allocate {
                requested: Some(requested.to_owned()),
            }
        }
        _ => ShareSlugAction::Keep,
    }
}
