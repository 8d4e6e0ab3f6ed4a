pub mod jwt_auth;
pub mod permissions;

pub use jwt_auth::{AuthUser, JwtAuthMiddleware};
pub use permissions::check_content_ownership;
