use std::sync::Arc;

use crate::domain::{
    item::{ItemReadRepository, ItemTagRepository},
    tag::TagRepository,
};

pub struct ItemQueryService {
    pub(super) read_repo: Arc<dyn ItemReadRepository>,
    pub(super) item_tag_repo: Arc<dyn ItemTagRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl ItemQueryService {
    pub fn new(
        read_repo: Arc<dyn ItemReadRepository>,
        item_tag_repo: Arc<dyn ItemTagRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            read_repo,
            item_tag_repo,
            tag_repo,
        }
    }
}
