// src/domain/profile/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(DomainError::Validation("theme must be light or dark".into())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial upsert. `None` leaves a column untouched; `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub user_id: UserId,
    pub display_name: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
    pub theme: Option<Theme>,
    pub at: DateTime<Utc>,
}

impl ProfileChanges {
    pub fn new(user_id: UserId, at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            display_name: None,
            avatar_url: None,
            theme: None,
            at,
        }
    }

    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Apply onto an existing profile, or onto a fresh default one.
    pub fn apply_to(self, existing: Option<Profile>) -> Profile {
        let mut profile = existing.unwrap_or_else(|| Profile {
            user_id: self.user_id,
            display_name: None,
            avatar_url: None,
            theme: Theme::default(),
            created_at: self.at,
            updated_at: self.at,
        });
        if let Some(display_name) = self.display_name {
            profile.display_name = display_name;
        }
        if let Some(avatar_url) = self.avatar_url {
            profile.avatar_url = avatar_url;
        }
        if let Some(theme) = self.theme {
            profile.theme = theme;
        }
        profile.updated_at = self.at;
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_known_values_only() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn changes_create_default_profile() {
        let now = Utc::now();
        let profile = ProfileChanges::new(UserId(3), now)
            .with_display_name(Some("Ada".into()))
            .apply_to(None);
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
        assert_eq!(profile.theme, Theme::Light);
        assert_eq!(profile.created_at, now);
    }

    #[test]
    fn changes_leave_untouched_columns() {
        let now = Utc::now();
        let existing = ProfileChanges::new(UserId(3), now)
            .with_display_name(Some("Ada".into()))
            .with_avatar_url(Some("https://img".into()))
            .apply_to(None);
        let later = now + chrono::Duration::seconds(5);
        let updated = ProfileChanges::new(UserId(3), later)
            .with_theme(Theme::Dark)
            .with_avatar_url(None)
            .apply_to(Some(existing));
        assert_eq!(updated.display_name.as_deref(), Some("Ada"));
        assert!(updated.avatar_url.is_none());
        assert_eq!(updated.theme, Theme::Dark);
        assert_eq!(updated.created_at, now);
        assert_eq!(updated.updated_at, later);
    }
}
