use super::UserCommandService;
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

const INVALID_CREDENTIALS: &str = "invalid email or password";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthSessionDto> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "email and password are required",
            ));
        }

        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;
        let profile = self.profile_repo.find_by_user(user.id).await?;

        self.open_session(user, profile.as_ref()).await
    }

    async fn find_and_authenticate_user(&self, email: &str, password: &str) -> ApplicationResult<User> {
        let email =
            Email::new(email).map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        Ok(user)
    }
}
