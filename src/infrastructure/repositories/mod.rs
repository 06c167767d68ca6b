// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_item;
mod postgres_item_tag;
mod postgres_profile;
mod postgres_tag;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_item::{PostgresItemReadRepository, PostgresItemWriteRepository};
pub use postgres_item_tag::PostgresItemTagRepository;
pub use postgres_profile::PostgresProfileRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
