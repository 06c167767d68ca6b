use super::ItemCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainError,
        item::{ItemId, ItemTitle, ShareSlug, ShareSlugAction},
    },
};

/// Saves that lose a share slug race are re-resolved at most this many times.
pub(super) const MAX_SLUG_ATTEMPTS: usize = 5;

impl ItemCommandService {
    /// Resolve the slug an `Allocate` action asks for. Other actions yield `None`.
    pub(super) async fn resolve_slug(
        &self,
        action: &ShareSlugAction,
        title: &ItemTitle,
        exclude: Option<ItemId>,
    ) -> ApplicationResult<Option<ShareSlug>> {
        match action {
            ShareSlugAction::Allocate { requested } => {
                let slug = self
                    .slug_service
                    .allocate(title, requested.as_deref(), exclude)
                    .await?;
                Ok(Some(slug))
            }
            ShareSlugAction::Keep | ShareSlugAction::Clear => Ok(None),
        }
    }

    pub(super) fn normalize_requested(&self, requested: Option<&str>) -> Option<String> {
        requested.map(|slug| self.slug_service.normalize(slug))
    }
}

/// Decide whether a failed write should be attempted again with a fresh slug.
pub(super) fn retry_on_slug_race(err: DomainError, attempt: usize) -> ApplicationResult<()> {
    match err {
        DomainError::SlugTaken(slug) if attempt < MAX_SLUG_ATTEMPTS => {
            tracing::warn!(%slug, attempt, "share slug claimed concurrently, resolving again");
            Ok(())
        }
        DomainError::SlugTaken(slug) => {
            tracing::error!(%slug, attempts = attempt, "giving up on share slug allocation");
            Err(ApplicationError::conflict(
                "could not allocate a unique share slug",
            ))
        }
        other => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_race_is_retried_until_the_limit() {
        for attempt in 1..MAX_SLUG_ATTEMPTS {
            assert!(retry_on_slug_race(DomainError::SlugTaken("a".into()), attempt).is_ok());
        }
        let err = retry_on_slug_race(DomainError::SlugTaken("a".into()), MAX_SLUG_ATTEMPTS)
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Conflict(_)));
    }

    #[test]
    fn other_errors_are_not_retried() {
        let err = retry_on_slug_race(DomainError::Persistence("boom".into()), 1).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Persistence(_))
        ));
    }
}
