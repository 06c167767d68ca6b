// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use second_brain::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use second_brain::domain::user::UserId;

const HASH_PREFIX: &str = "plain$";

/// Reversible "hash" so tests avoid Argon2 cost.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix(HASH_PREFIX) == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password mismatch"))
        }
    }
}

/// Token string a `StaticTokenManager` accepts for the given user.
pub fn token_for(user_id: i64, email: &str) -> String {
    format!("test:{user_id}:{email}")
}

/// Issues `test:<id>:<email>` tokens and accepts exactly that shape.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.0, &subject.email),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("invalid or expired token");
        let mut parts = token.splitn(3, ':');
        if parts.next() != Some("test") {
            return Err(invalid());
        }
        let id = parts
            .next()
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(invalid)?;
        let email = parts.next().ok_or_else(invalid)?.to_string();
        let now = super::time::fixed_now();
        Ok(AuthenticatedUser {
            id,
            email,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}
