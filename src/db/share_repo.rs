use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ShareLink;

/// Store a share token for a user, one per user.
///
/// If a token already exists the no-op update leaves it untouched and
/// returns it, so re-enabling keeps previously handed-out links working.
pub async fn upsert_share_link(pool: &PgPool, user_id: Uuid, token: &str) -> Result<String> {
    let token = sqlx::query_scalar::<_, String>(
        r#"
        INSERT INTO share_links (user_id, token)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING token
        "#,
    )
    .bind(user_id)
    .bind(token)
    .fetch_one(pool)
    .await?;

    Ok(token)
}

/// Drop a user's share token, if any
pub async fn revoke_share_link(pool: &PgPool, user_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM share_links
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up a share link by its opaque token
pub async fn get_share_link_by_token(pool: &PgPool, token: &str) -> Result<Option<ShareLink>> {
    let link = sqlx::query_as::<_, ShareLink>(
        r#"
        SELECT user_id, token, created_at
        FROM share_links
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(link)
}
