use super::TagCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        tag::{NewTag, TagColor, TagName},
    },
};

const DUPLICATE_TAG: &str = "tag with this name already exists";

pub struct CreateTagCommand {
    pub name: String,
    pub color: Option<String>,
}

impl TagCommandService {
    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;

        if self.tag_repo.find_by_name(actor.id, &name).await?.is_some() {
            return Err(ApplicationError::validation(DUPLICATE_TAG));
        }

        let new_tag = NewTag {
            owner_id: actor.id,
            name,
            color: TagColor::parse(command.color),
            created_at: self.clock.now(),
        };

        match self.tag_repo.insert(new_tag).await {
            Ok(tag) => Ok(tag.into()),
            // lost a race with a concurrent create of the same name
            Err(DomainError::Conflict(_)) => Err(ApplicationError::validation(DUPLICATE_TAG)),
            Err(err) => Err(err.into()),
        }
    }
}
