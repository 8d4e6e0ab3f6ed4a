/// Ownership checks for content
///
/// The auth gate only proves identity; whether that identity may touch a
/// given record is decided here. Existence must be checked before calling
/// these, so "not found" and "forbidden" stay distinguishable.
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Content;

/// Check that a user owns a content entry
pub fn check_content_ownership(user_id: Uuid, content: &Content) -> Result<()> {
    if content.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Trying to delete a document you don't own".to_string(),
        ))
    }
}
