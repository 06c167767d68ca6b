use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto, ThemeDto},
        error::ApplicationResult,
    },
    domain::profile::{ProfileChanges, Theme},
};

pub struct UpdateProfileCommand {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

pub struct UpdateThemeCommand {
    pub theme: String,
}

impl ProfileCommandService {
    /// Only fields present in the command are touched; an empty string clears one.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let mut changes = ProfileChanges::new(actor.id, self.clock.now());
        if let Some(display_name) = command.display_name {
            changes = changes.with_display_name(empty_as_none(display_name));
        }
        if let Some(avatar_url) = command.avatar_url {
            changes = changes.with_avatar_url(empty_as_none(avatar_url));
        }

        let profile = self.profile_repo.upsert(changes).await?;
        Ok(profile.into())
    }

    pub async fn update_theme(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateThemeCommand,
    ) -> ApplicationResult<ThemeDto> {
        let theme: Theme = command.theme.parse()?;
        let changes = ProfileChanges::new(actor.id, self.clock.now()).with_theme(theme);
        let profile = self.profile_repo.upsert(changes).await?;
        Ok(ThemeDto {
            theme: profile.theme,
        })
    }
}

fn empty_as_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
