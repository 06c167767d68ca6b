use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("item id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ItemTitle> for String {
    fn from(value: ItemTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Thought,
    Link,
    Bookmark,
    Clip,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Thought => "thought",
            ItemKind::Link => "link",
            ItemKind::Bookmark => "bookmark",
            ItemKind::Clip => "clip",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thought" => Ok(ItemKind::Thought),
            "link" => Ok(ItemKind::Link),
            "bookmark" => Ok(ItemKind::Bookmark),
            "clip" => Ok(ItemKind::Clip),
            _ => Err(DomainError::Validation("invalid item type".into())),
        }
    }
}

/// Public share identifier. Unique across all items that carry one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareSlug(String);

impl ShareSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("share slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}-{counter}`, always derived from the original candidate.
    pub fn with_suffix(base: &str, counter: u64) -> DomainResult<Self> {
        Self::new(format!("{base}-{counter}"))
    }
}

impl fmt::Display for ShareSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShareSlug> for String {
    fn from(value: ShareSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            ItemKind::Thought,
            ItemKind::Link,
            ItemKind::Bookmark,
            ItemKind::Clip,
        ] {
            assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
        }
        assert!("note".parse::<ItemKind>().is_err());
    }

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(ItemTitle::new("  Hello ").unwrap().as_str(), "Hello");
        assert!(ItemTitle::new(" \n ").is_err());
    }

    #[test]
    fn suffix_is_appended_to_base() {
        assert_eq!(
            ShareSlug::with_suffix("cool-link", 2).unwrap().as_str(),
            "cool-link-2"
        );
    }
}
