// src/infrastructure/repositories/postgres_item.rs
use super::map_sqlx;
use super::postgres_item_tag::insert_item_tags;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{
    Item, ItemFilter, ItemId, ItemKind, ItemReadRepository, ItemTag, ItemTitle,
    ItemWriteRepository, NewItem, ShareSlug,
};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ITEM_COLUMNS: &str = "id, user_id, title, content, type AS kind, source_url, is_starred, \
     is_public, share_slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresItemWriteRepository {
    pool: PgPool,
}

impl PostgresItemWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresItemReadRepository {
    pool: PgPool,
}

impl PostgresItemReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    kind: String,
    source_url: Option<String>,
    is_starred: bool,
    is_public: bool,
    share_slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = DomainError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId::new(row.id)?,
            owner_id: UserId::new(row.user_id)?,
            title: ItemTitle::new(row.title)?,
            content: row.content,
            kind: row.kind.parse::<ItemKind>()?,
            source_url: row.source_url,
            is_starred: row.is_starred,
            is_public: row.is_public,
            share_slug: row.share_slug.map(ShareSlug::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escape LIKE metacharacters so user input only matches literally.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl ItemWriteRepository for PostgresItemWriteRepository {
    async fn insert(&self, item: NewItem, tag_ids: &[TagId]) -> DomainResult<Item> {
        let NewItem {
            owner_id,
            title,
            content,
            kind,
            source_url,
            is_public,
            share_slug,
            created_at,
        } = item;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO items (user_id, title, content, type, source_url, is_starred, is_public, share_slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7, $8, $8)
             RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(i64::from(owner_id))
            .bind(title.as_str())
            .bind(content)
            .bind(kind.as_str())
            .bind(source_url)
            .bind(is_public)
            .bind(share_slug.map(String::from))
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let stored = Item::try_from(row)?;

        let links: Vec<ItemTag> = tag_ids
            .iter()
            .map(|&tag_id| ItemTag {
                item_id: stored.id,
                tag_id,
            })
            .collect();
        insert_item_tags(&mut tx, &links).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn save(&self, item: Item) -> DomainResult<Item> {
        let sql = format!(
            "UPDATE items
             SET title = $2, content = $3, type = $4, source_url = $5, is_starred = $6,
                 is_public = $7, share_slug = $8, updated_at = $9
             WHERE id = $1
             RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(i64::from(item.id))
            .bind(item.title.as_str())
            .bind(&item.content)
            .bind(item.kind.as_str())
            .bind(&item.source_url)
            .bind(item.is_starred)
            .bind(item.is_public)
            .bind(item.share_slug.as_ref().map(ShareSlug::as_str))
            .bind(item.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("item not found".into()))?;

        Item::try_from(row)
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("item not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ItemReadRepository for PostgresItemReadRepository {
    async fn find_by_id(&self, id: ItemId) -> DomainResult<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Item::try_from).transpose()
    }

    async fn find_by_share_slug(
        &self,
        slug: &ShareSlug,
        exclude: Option<ItemId>,
    ) -> DomainResult<Option<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items
             WHERE share_slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(slug.as_str())
            .bind(exclude.map(i64::from))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Item::try_from).transpose()
    }

    async fn find_public_by_slug(&self, slug: &ShareSlug) -> DomainResult<Option<Item>> {
        let sql =
            format!("SELECT {ITEM_COLUMNS} FROM items WHERE share_slug = $1 AND is_public = TRUE");
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Item::try_from).transpose()
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
        filter: &ItemFilter,
    ) -> DomainResult<Vec<Item>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ITEM_COLUMNS} FROM items WHERE user_id = "));
        builder.push_bind(i64::from(owner_id));

        if let Some(kind) = filter.kind {
            builder.push(" AND type = ");
            builder.push_bind(kind.as_str());
        }

        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<ItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Item::try_from).collect()
    }
}
