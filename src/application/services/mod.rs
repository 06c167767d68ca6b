// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            items::ItemCommandService, profile::ProfileCommandService, tags::TagCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            export::ExportQueryService, items::ItemQueryService, profile::ProfileQueryService,
            tags::TagQueryService, users::UserQueryService,
        },
    },
    domain::{
        item::{
            ItemReadRepository, ItemTagRepository, ItemWriteRepository,
            services::ShareSlugService,
        },
        profile::ProfileRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub item_commands: Arc<ItemCommandService>,
    pub tag_commands: Arc<TagCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub item_queries: Arc<ItemQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub export_queries: Arc<ExportQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        item_write_repo: Arc<dyn ItemWriteRepository>,
        item_read_repo: Arc<dyn ItemReadRepository>,
        item_tag_repo: Arc<dyn ItemTagRepository>,
        tag_repo: Arc<dyn TagRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&profile_repo),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ShareSlugService::new(
            Arc::clone(&item_read_repo),
            slugger,
            Arc::clone(&clock),
        ));

        let item_commands = Arc::new(ItemCommandService::new(
            item_write_repo,
            Arc::clone(&item_read_repo),
            Arc::clone(&item_tag_repo),
            Arc::clone(&tag_repo),
            slug_service,
            Arc::clone(&clock),
        ));
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));
        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            clock,
        ));

        let user_queries = Arc::new(UserQueryService::new(user_repo, Arc::clone(&profile_repo)));
        let item_queries = Arc::new(ItemQueryService::new(
            Arc::clone(&item_read_repo),
            Arc::clone(&item_tag_repo),
            Arc::clone(&tag_repo),
        ));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));
        let profile_queries = Arc::new(ProfileQueryService::new(profile_repo));
        let export_queries = Arc::new(ExportQueryService::new(
            item_read_repo,
            item_tag_repo,
            tag_repo,
        ));

        Self {
            user_commands,
            item_commands,
            tag_commands,
            profile_commands,
            user_queries,
            item_queries,
            tag_queries,
            profile_queries,
            export_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verify a raw bearer token and return the caller it belongs to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
