use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Content;

/// Insert a content entry together with its ordered tag references.
///
/// Tag rows carry an explicit position so the input order, including
/// duplicate references to the same tag, survives storage.
pub async fn insert_content(
    pool: &PgPool,
    user_id: Uuid,
    content_type: &str,
    link: &str,
    title: &str,
    tag_ids: &[Uuid],
) -> Result<Content> {
    let mut tx = pool.begin().await?;

    let content = sqlx::query_as::<_, Content>(
        r#"
        INSERT INTO content (user_id, content_type, link, title)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, content_type, link, title, created_at
        "#,
    )
    .bind(user_id)
    .bind(content_type)
    .bind(link)
    .bind(title)
    .fetch_one(&mut *tx)
    .await?;

    for (position, tag_id) in tag_ids.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO content_tags (content_id, position, tag_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(content.id)
        .bind(position as i32)
        .bind(tag_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(content)
}

/// Get a content entry by ID
pub async fn get_content(pool: &PgPool, content_id: Uuid) -> Result<Option<Content>> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, user_id, content_type, link, title, created_at
        FROM content
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await?;

    Ok(content)
}

/// All content owned by a user, oldest first
pub async fn list_content_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Content>> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, user_id, content_type, link, title, created_at
        FROM content
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(content)
}

/// Tag titles for a set of content entries, in stored position order per
/// entry
pub async fn tag_titles_for_contents(
    pool: &PgPool,
    content_ids: &[Uuid],
) -> Result<Vec<(Uuid, String)>> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        r#"
        SELECT ct.content_id, t.title
        FROM content_tags ct
        JOIN tags t ON t.id = ct.tag_id
        WHERE ct.content_id = ANY($1)
        ORDER BY ct.content_id, ct.position
        "#,
    )
    .bind(content_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Delete a content entry; tag rows go with it via ON DELETE CASCADE
pub async fn delete_content(pool: &PgPool, content_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM content
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .execute(pool)
    .await?;

    Ok(())
}
