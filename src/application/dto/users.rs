use crate::domain::{profile::Profile, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{auth::AuthTokenDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_parts(user: User, profile: Option<&Profile>) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            display_name: profile.and_then(|p| p.display_name.clone()),
            created_at: user.created_at,
        }
    }
}

/// Returned by signup and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthSessionDto {
    pub token: AuthTokenDto,
    pub user: UserDto,
}
