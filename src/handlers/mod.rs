use actix_web::web;

use crate::error::AppError;

pub mod auth;
pub mod brain;
pub mod content;

pub use auth::{signin, signup};
pub use brain::{get_shared_brain, share_brain};
pub use content::{create_content, delete_content, list_content};

/// JSON extractor configuration shared by every route.
///
/// Bodies with missing or wrongly-typed fields fail inside the `Json`
/// extractor; routing those failures through `AppError` keeps all 400s in
/// the same `{error, status}` shape as handler-level validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}
