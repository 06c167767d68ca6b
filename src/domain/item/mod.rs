// src/domain/item/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;
pub mod visibility;

pub use entity::{Item, ItemFilter, ItemTag, NewItem};
pub use repository::{ItemReadRepository, ItemTagRepository, ItemWriteRepository};
pub use value_objects::{ItemId, ItemKind, ItemTitle, ShareSlug};
pub use visibility::{ShareSlugAction, plan_share_slug};
