// src/infrastructure/repositories/postgres_item_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{ItemId, ItemTag, ItemTagRepository};
use crate::domain::tag::TagId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

#[derive(Clone)]
pub struct PostgresItemTagRepository {
    pool: PgPool,
}

impl PostgresItemTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert join rows inside the caller's transaction.
pub(super) async fn insert_item_tags(
    tx: &mut Transaction<'_, Postgres>,
    links: &[ItemTag],
) -> DomainResult<()> {
    if links.is_empty() {
        return Ok(());
    }
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO item_tags (item_id, tag_id) ");
    builder.push_values(links, |mut row, link| {
        row.push_bind(i64::from(link.item_id))
            .push_bind(i64::from(link.tag_id));
    });
    builder
        .build()
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[derive(Debug, FromRow)]
struct ItemTagRow {
    item_id: i64,
    tag_id: i64,
}

impl TryFrom<ItemTagRow> for ItemTag {
    type Error = DomainError;

    fn try_from(row: ItemTagRow) -> Result<Self, Self::Error> {
        Ok(ItemTag {
            item_id: ItemId::new(row.item_id)?,
            tag_id: TagId::new(row.tag_id)?,
        })
    }
}

#[async_trait]
impl ItemTagRepository for PostgresItemTagRepository {
    async fn delete_for_item(&self, item_id: ItemId) -> DomainResult<()> {
        sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
            .bind(i64::from(item_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn insert_many(&self, links: &[ItemTag]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        insert_item_tags(&mut tx, links).await?;
        tx.commit().await.map_err(map_sqlx)
    }

    async fn list_for_items(&self, item_ids: &[ItemId]) -> DomainResult<Vec<ItemTag>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = item_ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, ItemTagRow>(
            "SELECT item_id, tag_id FROM item_tags WHERE item_id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ItemTag::try_from).collect()
    }

    /// Delete and re-insert inside one transaction so readers never observe
    /// a half-replaced tag set.
    async fn replace_for_item(&self, item_id: ItemId, tag_ids: &[TagId]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
            .bind(i64::from(item_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let links: Vec<ItemTag> = tag_ids
            .iter()
            .map(|&tag_id| ItemTag { item_id, tag_id })
            .collect();
        insert_item_tags(&mut tx, &links).await?;

        tx.commit().await.map_err(map_sqlx)
    }
}
