use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{items::ItemDto, tags::TagDto};

/// Everything a user owns, in one document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportDto {
    pub items: Vec<ItemDto>,
    pub tags: Vec<TagDto>,
}
