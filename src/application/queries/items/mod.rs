mod get_by_id;
mod list;
mod public;
mod service;
mod tags;

pub use list::ListItemsQuery;
pub use service::ItemQueryService;
pub(crate) use tags::{attach_tags, resolve_tags};
