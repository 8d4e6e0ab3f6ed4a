/// Sharing service - opaque read-only capability for one user's content
///
/// The share link's final path segment is a random token stored against the
/// user, never the user id itself; possession of the token is the whole
/// capability, so the public fetch performs no further auth.
use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{share_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::ContentWithTags;
use crate::services::ContentService;

const SHARE_TOKEN_LEN: usize = 32;

pub struct ShareService {
    pool: PgPool,
    base_url: String,
}

fn generate_share_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_TOKEN_LEN)
        .map(char::from)
        .collect()
}

impl ShareService {
    pub fn new(pool: PgPool, base_url: impl Into<String>) -> Self {
        Self {
            pool,
            base_url: base_url.into(),
        }
    }

    /// Turn sharing on for a user and return the full share link.
    ///
    /// Idempotent: if a token is already stored it is reused, so a link
    /// handed out earlier keeps working.
    pub async fn enable(&self, user_id: Uuid) -> Result<String> {
        let token =
            share_repo::upsert_share_link(&self.pool, user_id, &generate_share_token()).await?;

        tracing::info!(%user_id, "share link enabled");

        Ok(format!(
            "{}/api/v1/brain/{}",
            self.base_url.trim_end_matches('/'),
            token
        ))
    }

    /// Revoke a user's share token; the old link stops resolving
    pub async fn disable(&self, user_id: Uuid) -> Result<()> {
        share_repo::revoke_share_link(&self.pool, user_id).await?;
        tracing::info!(%user_id, "share link revoked");
        Ok(())
    }

    /// Resolve a share link to its owner's username and content listing.
    ///
    /// Accepts either a bare token or a full link; only the substring after
    /// the last path separator counts.
    pub async fn resolve(&self, share_link: &str) -> Result<(String, Vec<ContentWithTags>)> {
        let token = share_link.rsplit('/').next().unwrap_or(share_link);

        let link = share_repo::get_share_link_by_token(&self.pool, token)
            .await?
            .ok_or_else(invalid_share_link)?;

        let user = user_repo::get_user_by_id(&self.pool, link.user_id)
            .await?
            .ok_or_else(invalid_share_link)?;

        let content = ContentService::new(self.pool.clone())
            .list_for_user(user.id)
            .await?;

        Ok((user.username, content))
    }
}

fn invalid_share_link() -> AppError {
    AppError::NotFound("Invalid share link or user not found".to_string())
}
