// tests/support/mocks/store.rs
//! One in-memory database implementing every repository trait, with the
//! same uniqueness rules and cascades as the Postgres schema.
use async_trait::async_trait;
use second_brain::domain::{
    errors::{DomainError, DomainResult},
    item::{
        Item, ItemFilter, ItemId, ItemReadRepository, ItemTag, ItemTagRepository,
        ItemKind, ItemTitle, ItemWriteRepository, NewItem, ShareSlug,
    },
    profile::{Profile, ProfileChanges, ProfileRepository},
    tag::{NewTag, Tag, TagId, TagName, TagRepository},
    user::{Email, NewUser, User, UserId, UserRepository},
};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    profiles: Vec<Profile>,
    items: Vec<Item>,
    tags: Vec<Tag>,
    item_tags: Vec<ItemTag>,
    next_id: i64,
    /// When set, the next item write first lets a phantom item grab its slug.
    race_next_slug_write: bool,
    /// When set, the next write carrying tag rows fails.
    fail_next_tag_write: bool,
    item_tag_deletes: usize,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn slug_holder(&self, slug: &ShareSlug, exclude: Option<ItemId>) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.share_slug.as_ref() == Some(slug) && Some(item.id) != exclude)
    }

    fn check_slug(&mut self, item_id: Option<ItemId>, slug: Option<&ShareSlug>) -> DomainResult<()> {
        let Some(slug) = slug else {
            return Ok(());
        };
        if self.race_next_slug_write {
            self.race_next_slug_write = false;
            let phantom = Item {
                id: ItemId(self.next_id()),
                owner_id: UserId(i64::MAX),
                title: ItemTitle::new("phantom")?,
                content: String::new(),
                kind: ItemKind::Thought,
                source_url: None,
                is_starred: false,
                is_public: true,
                share_slug: Some(slug.clone()),
                created_at: super::time::fixed_now(),
                updated_at: super::time::fixed_now(),
            };
            self.items.push(phantom);
        }
        if self.slug_holder(slug, item_id).is_some() {
            return Err(DomainError::SlugTaken(slug.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store mutex poisoned")
    }

    /// Make the next item write that carries a slug lose a race for it.
    pub fn race_next_slug_write(&self) {
        self.tables().race_next_slug_write = true;
    }

    /// Make the next write that carries tag rows fail like a broken database.
    pub fn fail_next_tag_write(&self) {
        self.tables().fail_next_tag_write = true;
    }

    pub fn item_count(&self) -> usize {
        self.tables().items.len()
    }

    pub fn item_tag_rows(&self, item_id: i64) -> Vec<i64> {
        self.tables()
            .item_tags
            .iter()
            .filter(|link| link.item_id.0 == item_id)
            .map(|link| link.tag_id.0)
            .collect()
    }

    pub fn item_tag_row_count(&self) -> usize {
        self.tables().item_tags.len()
    }

    pub fn item_tag_deletes(&self) -> usize {
        self.tables().item_tag_deletes
    }

    pub fn stored_item(&self, id: i64) -> Option<Item> {
        self.tables().items.iter().find(|item| item.id.0 == id).cloned()
    }

    /// Put an item straight into storage, bypassing every service.
    pub fn seed_item(&self, owner: i64, title: &str, is_public: bool, slug: Option<&str>) -> Item {
        let mut tables = self.tables();
        let id = tables.next_id();
        let item = Item {
            id: ItemId(id),
            owner_id: UserId(owner),
            title: ItemTitle::new(title).expect("title"),
            content: String::new(),
            kind: ItemKind::Thought,
            source_url: None,
            is_starred: false,
            is_public,
            share_slug: slug.map(|s| ShareSlug::new(s).expect("slug")),
            created_at: super::time::fixed_now(),
            updated_at: super::time::fixed_now(),
        };
        tables.items.push(item.clone());
        item
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables();
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId(tables.next_id()),
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.tables().users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        Ok(self
            .tables()
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, changes: ProfileChanges) -> DomainResult<Profile> {
        let mut tables = self.tables();
        let position = tables
            .profiles
            .iter()
            .position(|p| p.user_id == changes.user_id);
        let existing = position.map(|idx| tables.profiles.remove(idx));
        let profile = changes.apply_to(existing);
        tables.profiles.push(profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl ItemWriteRepository for InMemoryStore {
    async fn insert(&self, item: NewItem, tag_ids: &[TagId]) -> DomainResult<Item> {
        let mut tables = self.tables();
        tables.check_slug(None, item.share_slug.as_ref())?;
        if !tag_ids.is_empty() && tables.fail_next_tag_write {
            tables.fail_next_tag_write = false;
            return Err(DomainError::Persistence("item_tags write failed".into()));
        }
        let stored = Item {
            id: ItemId(tables.next_id()),
            owner_id: item.owner_id,
            title: item.title,
            content: item.content,
            kind: item.kind,
            source_url: item.source_url,
            is_starred: false,
            is_public: item.is_public,
            share_slug: item.share_slug,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        tables.items.push(stored.clone());
        tables.item_tags.extend(tag_ids.iter().map(|&tag_id| ItemTag {
            item_id: stored.id,
            tag_id,
        }));
        Ok(stored)
    }

    async fn save(&self, item: Item) -> DomainResult<Item> {
        if item.share_slug.is_some() && !item.is_public {
            return Err(DomainError::Validation(
                "only public items can carry a share slug".into(),
            ));
        }
        let mut tables = self.tables();
        tables.check_slug(Some(item.id), item.share_slug.as_ref())?;
        let slot = tables
            .items
            .iter_mut()
            .find(|stored| stored.id == item.id)
            .ok_or_else(|| DomainError::NotFound("item not found".into()))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.items.len();
        tables.items.retain(|item| item.id != id);
        if tables.items.len() == before {
            return Err(DomainError::NotFound("item not found".into()));
        }
        tables.item_tags.retain(|link| link.item_id != id);
        Ok(())
    }
}

#[async_trait]
impl ItemReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ItemId) -> DomainResult<Option<Item>> {
        Ok(self.tables().items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_share_slug(
        &self,
        slug: &ShareSlug,
        exclude: Option<ItemId>,
    ) -> DomainResult<Option<Item>> {
        Ok(self.tables().slug_holder(slug, exclude).cloned())
    }

    async fn find_public_by_slug(&self, slug: &ShareSlug) -> DomainResult<Option<Item>> {
        Ok(self
            .tables()
            .items
            .iter()
            .find(|i| i.is_public && i.share_slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
        filter: &ItemFilter,
    ) -> DomainResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .tables()
            .items
            .iter()
            .filter(|i| i.owner_id == owner_id && filter.matches(i))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }
}

#[async_trait]
impl ItemTagRepository for InMemoryStore {
    async fn delete_for_item(&self, item_id: ItemId) -> DomainResult<()> {
        let mut tables = self.tables();
        tables.item_tag_deletes += 1;
        tables.item_tags.retain(|link| link.item_id != item_id);
        Ok(())
    }

    async fn insert_many(&self, links: &[ItemTag]) -> DomainResult<()> {
        let mut tables = self.tables();
        if tables.fail_next_tag_write {
            tables.fail_next_tag_write = false;
            return Err(DomainError::Persistence("item_tags write failed".into()));
        }
        for link in links {
            if !tables.items.iter().any(|i| i.id == link.item_id) {
                return Err(DomainError::NotFound("referenced record not found".into()));
            }
        }
        tables.item_tags.extend_from_slice(links);
        Ok(())
    }

    async fn list_for_items(&self, item_ids: &[ItemId]) -> DomainResult<Vec<ItemTag>> {
        Ok(self
            .tables()
            .item_tags
            .iter()
            .filter(|link| item_ids.contains(&link.item_id))
            .copied()
            .collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut tables = self.tables();
        if tables
            .tags
            .iter()
            .any(|t| t.owner_id == tag.owner_id && t.name == tag.name)
        {
            return Err(DomainError::Conflict("tag with this name already exists".into()));
        }
        let stored = Tag {
            id: TagId(tables.next_id()),
            owner_id: tag.owner_id,
            name: tag.name,
            color: tag.color,
            created_at: tag.created_at,
        };
        tables.tags.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_name(&self, owner_id: UserId, name: &TagName) -> DomainResult<Option<Tag>> {
        Ok(self
            .tables()
            .tags
            .iter()
            .find(|t| t.owner_id == owner_id && &t.name == name)
            .cloned())
    }

    async fn list_for_owner(&self, owner_id: UserId) -> DomainResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self
            .tables()
            .tags
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        Ok(self
            .tables()
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }
}
