// src/domain/mod.rs
pub mod errors;
pub mod item;
pub mod profile;
pub mod tag;
pub mod user;
