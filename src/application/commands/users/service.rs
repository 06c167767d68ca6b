use std::sync::Arc;

use crate::application::{
    dto::{AuthSessionDto, TokenSubject, UserDto},
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::{
    profile::{Profile, ProfileRepository},
    user::{User, UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn open_session(
        &self,
        user: User,
        profile: Option<&Profile>,
    ) -> ApplicationResult<AuthSessionDto> {
        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;
        Ok(AuthSessionDto {
            token,
            user: UserDto::from_parts(user, profile),
        })
    }
}
