// src/domain/profile/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Profile, ProfileChanges, Theme};
pub use repository::ProfileRepository;
