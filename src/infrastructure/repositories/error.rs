use crate::domain::errors::DomainError;

const CNT_ITEM_SHARE_SLUG: &str = "items_share_slug_key";
const CNT_ITEM_SLUG_REQUIRES_PUBLIC: &str = "items_slug_requires_public_chk";
const CNT_TAG_OWNER_NAME: &str = "tags_user_id_name_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_PROFILE_USER: &str = "profiles_user_id_key";

/// Named constraints that carry a domain meaning. Anything else is mapped by
/// SQLSTATE below.
fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_ITEM_SHARE_SLUG => DomainError::SlugTaken("share slug already in use".into()),
        CNT_ITEM_SLUG_REQUIRES_PUBLIC => {
            DomainError::Validation("only public items can carry a share slug".into())
        }
        CNT_TAG_OWNER_NAME => DomainError::Conflict("tag with this name already exists".into()),
        CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
        CNT_PROFILE_USER => DomainError::Conflict("profile already exists".into()),
        _ => return None,
    };
    Some(mapped)
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(mapped) = db_err.constraint().and_then(map_constraint) {
                return mapped;
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::Conflict("unique constraint violated".into()),
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::Persistence("database error".into())
        }
        _ => {
            tracing::error!(error = %err, "database error");
            DomainError::Persistence("database error".into())
        }
    }
}
