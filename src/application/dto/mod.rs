pub mod auth;
pub mod export;
pub mod items;
pub mod profile;
pub mod serde_time;
pub mod tags;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use export::ExportDto;
pub use items::ItemDto;
pub use profile::{ProfileDto, ThemeDto};
pub use tags::{TagDto, TagSummaryDto};
pub use users::{AuthSessionDto, UserDto};
