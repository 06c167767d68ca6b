// src/domain/item/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::item::repository::ItemReadRepository;
use crate::domain::item::value_objects::{ItemId, ItemTitle, ShareSlug};

/// Prefix for slugs of items whose title has no usable characters.
const FALLBACK_PREFIX: &str = "item";

/// Domain service responsible for producing unique share slugs for items.
pub struct ShareSlugService {
    read_repo: Arc<dyn ItemReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ShareSlugService {
    pub fn new(
        read_repo: Arc<dyn ItemReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    /// Run user-supplied slug text through the configured generator.
    pub fn normalize(&self, requested: &str) -> String {
        self.generator.normalize(requested)
    }

    /// Pick a unique slug from `requested` (already normalised) or from the title.
    pub async fn allocate(
        &self,
        title: &ItemTitle,
        requested: Option<&str>,
        exclude: Option<ItemId>,
    ) -> DomainResult<ShareSlug> {
        let base = match requested.filter(|slug| !slug.is_empty()) {
            Some(slug) => slug.to_owned(),
            None => self.generator.slugify(title.as_str()),
        };
        let base = if base.is_empty() {
            let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or_default();
            format!("{FALLBACK_PREFIX}-{}", base36(millis))
        } else {
            base
        };

        self.ensure_unique_slug(&base, exclude).await
    }

    /// Return `candidate` if no other item holds it, otherwise the first free
    /// `candidate-1`, `candidate-2`, ... in order.
    pub async fn ensure_unique_slug(
        &self,
        candidate: &str,
        exclude: Option<ItemId>,
    ) -> DomainResult<ShareSlug> {
        let mut slug = ShareSlug::new(candidate)?;
        let mut counter = 1u64;

        loop {
            match self.read_repo.find_by_share_slug(&slug, exclude).await? {
                None => return Ok(slug),
                Some(holder) => {
                    tracing::debug!(slug = %slug, holder = %holder.id, "share slug taken");
                    slug = ShareSlug::with_suffix(candidate, counter)?;
                    counter += 1;
                }
            }
        }
    }
}

/// Lower-case base-36 rendering, as used for timestamp suffixes.
pub fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while value > 0 {
        let digit = usize::try_from(value % 36).unwrap_or_default();
        out.push(DIGITS[digit]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::entity::{Item, ItemFilter};
    use crate::domain::item::value_objects::ItemKind;
    use crate::domain::user::UserId;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;

    struct SlugTable {
        held: Mutex<Vec<(ItemId, String)>>,
        lookups: Mutex<Vec<String>>,
    }

    impl SlugTable {
        fn new(held: &[(i64, &str)]) -> Self {
            Self {
                held: Mutex::new(
                    held.iter()
                        .map(|(id, slug)| (ItemId(*id), slug.to_string()))
                        .collect(),
                ),
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    fn item_with(id: ItemId, slug: &str) -> Item {
        Item {
            id,
            owner_id: UserId(1),
            title: ItemTitle::new("t").unwrap(),
            content: String::new(),
            kind: ItemKind::Thought,
            source_url: None,
            is_starred: false,
            is_public: true,
            share_slug: Some(ShareSlug::new(slug).unwrap()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl ItemReadRepository for SlugTable {
        async fn find_by_id(&self, _id: ItemId) -> DomainResult<Option<Item>> {
            Ok(None)
        }

        async fn find_by_share_slug(
            &self,
            slug: &ShareSlug,
            exclude: Option<ItemId>,
        ) -> DomainResult<Option<Item>> {
            self.lookups.lock().unwrap().push(slug.to_string());
            let held = self.held.lock().unwrap();
            Ok(held
                .iter()
                .find(|(id, s)| s == slug.as_str() && Some(*id) != exclude)
                .map(|(id, s)| item_with(*id, s)))
        }

        async fn find_public_by_slug(&self, _slug: &ShareSlug) -> DomainResult<Option<Item>> {
            Ok(None)
        }

        async fn list_for_owner(
            &self,
            _owner_id: UserId,
            _filter: &ItemFilter,
        ) -> DomainResult<Vec<Item>> {
            Ok(vec![])
        }
    }

    struct LowercaseSlug;

    impl SlugGenerator for LowercaseSlug {
        fn slugify(&self, input: &str) -> String {
            input
                .trim()
                .to_lowercase()
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn service(table: Arc<SlugTable>) -> ShareSlugService {
        let clock = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ShareSlugService::new(table, Arc::new(LowercaseSlug), Arc::new(FixedClock(clock)))
    }

    #[tokio::test]
    async fn free_candidate_is_returned_as_is() {
        let table = Arc::new(SlugTable::new(&[]));
        let slug = service(table.clone())
            .ensure_unique_slug("my-first-thought", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "my-first-thought");
        assert_eq!(table.lookups.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn counter_is_monotonic_without_gaps() {
        let table = Arc::new(SlugTable::new(&[
            (1, "cool-link"),
            (2, "cool-link-1"),
            (3, "cool-link-2"),
        ]));
        let slug = service(table.clone())
            .ensure_unique_slug("cool-link", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "cool-link-3");
        assert_eq!(
            *table.lookups.lock().unwrap(),
            vec!["cool-link", "cool-link-1", "cool-link-2", "cool-link-3"]
        );
    }

    #[tokio::test]
    async fn excluded_holder_keeps_its_slug() {
        let table = Arc::new(SlugTable::new(&[(7, "x")]));
        let slug = service(table)
            .ensure_unique_slug("x", Some(ItemId(7)))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "x");
    }

    #[tokio::test]
    async fn allocate_prefers_requested_slug() {
        let table = Arc::new(SlugTable::new(&[(1, "custom")]));
        let title = ItemTitle::new("Some Title").unwrap();
        let slug = service(table)
            .allocate(&title, Some("custom"), None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "custom-1");
    }

    #[tokio::test]
    async fn allocate_falls_back_when_title_has_no_word_chars() {
        let table = Arc::new(SlugTable::new(&[]));
        let title = ItemTitle::new("!!!").unwrap();
        let slug = service(table).allocate(&title, None, None).await.unwrap();
        let expected = format!("item-{}", base36(1_704_067_200_000));
        assert_eq!(slug.as_str(), expected);
    }

    #[test]
    fn base36_renders_lowercase_digits() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(1_704_067_200_000), "lqu5m2o0");
    }
}
