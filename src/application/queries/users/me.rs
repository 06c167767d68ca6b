use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn me(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        // token may outlive the account
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;
        let profile = self.profile_repo.find_by_user(user.id).await?;
        Ok(UserDto::from_parts(user, profile.as_ref()))
    }
}
