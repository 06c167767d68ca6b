// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Profile, ProfileChanges, ProfileRepository, Theme};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: i64,
    display_name: Option<String>,
    avatar_url: Option<String>,
    theme: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            user_id: UserId::new(row.user_id)?,
            display_name: row.display_name,
            avatar_url: row.avatar_url,
            theme: row.theme.parse::<Theme>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, display_name, avatar_url, theme, created_at, updated_at
             FROM profiles WHERE user_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    /// The boolean parameters tell an absent change apart from an explicit NULL.
    async fn upsert(&self, changes: ProfileChanges) -> DomainResult<Profile> {
        let ProfileChanges {
            user_id,
            display_name,
            avatar_url,
            theme,
            at,
        } = changes;

        let row = sqlx::query_as::<_, ProfileRow>(
            "INSERT INTO profiles (user_id, display_name, avatar_url, theme, created_at, updated_at)
             VALUES ($1, $3, $5, COALESCE($6, 'light'), $7, $7)
             ON CONFLICT (user_id) DO UPDATE SET
                 display_name = CASE WHEN $2 THEN EXCLUDED.display_name ELSE profiles.display_name END,
                 avatar_url = CASE WHEN $4 THEN EXCLUDED.avatar_url ELSE profiles.avatar_url END,
                 theme = COALESCE($6, profiles.theme),
                 updated_at = EXCLUDED.updated_at
             RETURNING user_id, display_name, avatar_url, theme, created_at, updated_at",
        )
        .bind(i64::from(user_id))
        .bind(display_name.is_some())
        .bind(display_name.flatten())
        .bind(avatar_url.is_some())
        .bind(avatar_url.flatten())
        .bind(theme.map(|t| t.as_str()))
        .bind(at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Profile::try_from(row)
    }
}
