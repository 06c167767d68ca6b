use super::ProfileQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto, ThemeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::Theme,
};

impl ProfileQueryService {
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        self.profile_repo
            .find_by_user(actor.id)
            .await?
            .map(ProfileDto::from)
            .ok_or_else(|| ApplicationError::not_found("profile not found"))
    }

    /// Users without a stored profile get the light theme.
    pub async fn get_theme(&self, actor: &AuthenticatedUser) -> ApplicationResult<ThemeDto> {
        let theme = self
            .profile_repo
            .find_by_user(actor.id)
            .await?
            .map(|profile| profile.theme)
            .unwrap_or(Theme::Light);
        Ok(ThemeDto { theme })
    }
}
