pub mod content_service;
pub mod share_service;

pub use content_service::ContentService;
pub use share_service::ShareService;
