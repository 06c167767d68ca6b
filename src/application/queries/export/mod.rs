mod service;

pub use service::ExportQueryService;
