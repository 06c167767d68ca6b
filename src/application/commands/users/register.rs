use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        profile::ProfileChanges,
        user::{Email, NewUser, PasswordHash},
    },
};

const FALLBACK_DISPLAY_NAME: &str = "User";

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<AuthSessionDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let display_name = resolve_display_name(command.display_name, &email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::validation("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let now = self.clock.now();

        let user = match self
            .user_repo
            .insert(NewUser::new(email, password_hash, now))
            .await
        {
            Ok(user) => user,
            Err(DomainError::Conflict(_)) => {
                return Err(ApplicationError::validation("email already registered"));
            }
            Err(err) => return Err(err.into()),
        };

        let profile = self
            .profile_repo
            .upsert(ProfileChanges::new(user.id, now).with_display_name(Some(display_name)))
            .await?;

        tracing::info!(user_id = user.id.0, "account registered");
        self.open_session(user, Some(&profile)).await
    }
}

fn resolve_display_name(requested: Option<String>, email: &Email) -> ApplicationResult<String> {
    if let Some(name) = requested {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ApplicationError::validation("display name cannot be empty"));
        }
        return Ok(trimmed.to_string());
    }
    let local = email.local_part();
    Ok(if local.is_empty() {
        FALLBACK_DISPLAY_NAME.to_string()
    } else {
        local.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_defaults_to_local_part() {
        let email = Email::new("grace@example.com").unwrap();
        assert_eq!(resolve_display_name(None, &email).unwrap(), "grace");
    }

    #[test]
    fn blank_display_name_is_rejected() {
        let email = Email::new("grace@example.com").unwrap();
        assert!(resolve_display_name(Some("  ".into()), &email).is_err());
        assert_eq!(
            resolve_display_name(Some(" Grace ".into()), &email).unwrap(),
            "Grace"
        );
    }
}
