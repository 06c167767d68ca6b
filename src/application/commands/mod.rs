pub mod items;
pub mod profile;
pub mod tags;
pub mod users;
