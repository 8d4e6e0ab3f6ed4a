use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;

/// Get-or-create a tag by title, atomically.
///
/// The no-op `DO UPDATE` turns the conflict case into a returning row, so
/// concurrent creators of the same new title converge on a single tag id
/// without any check-then-act window or retry.
pub async fn resolve_tag(pool: &PgPool, title: &str) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO tags (title)
        VALUES ($1)
        ON CONFLICT (title) DO UPDATE SET title = EXCLUDED.title
        RETURNING id
        "#,
    )
    .bind(title)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
