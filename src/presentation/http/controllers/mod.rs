// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod export;
pub mod items;
pub mod profile;
pub mod public;
pub mod tags;
