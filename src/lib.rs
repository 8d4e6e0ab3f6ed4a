/// Brain Service Library
///
/// An authenticated content-bookmarking API ("second brain"): users sign up,
/// sign in, and store/retrieve/delete tagged content links, with an opaque
/// share link exposing a read-only view of one user's content.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, tags, content and share links
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: Authentication middleware and ownership checks
/// - `security`: Password hashing and JWT issuing/verification
/// - `validators`: Signup input rules
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus counters and exposition
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
