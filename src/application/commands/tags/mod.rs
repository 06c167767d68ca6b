mod create;
mod service;

pub use create::CreateTagCommand;
pub use service::TagCommandService;
