use std::sync::Arc;

use crate::domain::tag::TagRepository;

pub struct TagQueryService {
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }
}
