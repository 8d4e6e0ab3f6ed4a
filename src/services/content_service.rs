/// Content service - creation, listing and deletion of tagged links
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::{content_repo, tag_repo};
use crate::error::{AppError, Result};
use crate::middleware::check_content_ownership;
use crate::models::{ContentType, ContentWithTags};

pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a content entry for `user_id`.
    ///
    /// Tag titles are resolved to ids one by one, creating missing tags on
    /// the way; the resulting id list keeps the input order, duplicates
    /// included. The entry and its tag rows are written in one transaction.
    pub async fn create(
        &self,
        user_id: Uuid,
        content_type: ContentType,
        link: &str,
        title: &str,
        tag_titles: &[String],
    ) -> Result<ContentWithTags> {
        let mut tag_ids = Vec::with_capacity(tag_titles.len());
        for tag_title in tag_titles {
            tag_ids.push(tag_repo::resolve_tag(&self.pool, tag_title).await?);
        }

        let content = content_repo::insert_content(
            &self.pool,
            user_id,
            content_type.as_str(),
            link,
            title,
            &tag_ids,
        )
        .await?;

        tracing::info!(content_id = %content.id, %user_id, "content created");

        Ok(ContentWithTags::from_row(content, tag_titles.to_vec()))
    }

    /// All content owned by `user_id`, tags expanded to their titles
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ContentWithTags>> {
        let entries = content_repo::list_content_by_user(&self.pool, user_id).await?;

        let ids: Vec<Uuid> = entries.iter().map(|c| c.id).collect();
        let mut tags_by_content: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (content_id, title) in content_repo::tag_titles_for_contents(&self.pool, &ids).await? {
            tags_by_content.entry(content_id).or_default().push(title);
        }

        Ok(entries
            .into_iter()
            .map(|content| {
                let tags = tags_by_content.remove(&content.id).unwrap_or_default();
                ContentWithTags::from_row(content, tags)
            })
            .collect())
    }

    /// Delete a content entry owned by `user_id`.
    ///
    /// Existence is checked before ownership so a missing entry answers
    /// "not found" and someone else's entry answers "forbidden".
    pub async fn delete(&self, user_id: Uuid, content_id: Uuid) -> Result<()> {
        let content = content_repo::get_content(&self.pool, content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

        check_content_ownership(user_id, &content)?;

        content_repo::delete_content(&self.pool, content_id).await?;

        tracing::info!(%content_id, %user_id, "content deleted");

        Ok(())
    }
}
