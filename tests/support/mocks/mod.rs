// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

pub use security::{PlainPasswordHasher, StaticTokenManager, token_for};
pub use store::InMemoryStore;
pub use time::{TickingClock, fixed_now};
