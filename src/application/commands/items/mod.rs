mod create;
mod delete;
mod service;
mod slug;
mod star;
mod update;

pub use create::CreateItemCommand;
pub use service::ItemCommandService;
pub use update::UpdateItemCommand;
