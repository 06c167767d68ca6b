// src/domain/tag/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTag, Tag};
pub use repository::TagRepository;
pub use value_objects::{TagColor, TagId, TagName};
