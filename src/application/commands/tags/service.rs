use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::tag::TagRepository};

pub struct TagCommandService {
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TagCommandService {
    pub fn new(tag_repo: Arc<dyn TagRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { tag_repo, clock }
    }
}
