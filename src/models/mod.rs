/// Data models for brain-service
///
/// Row structs map directly onto the Postgres schema in `migrations/`.
/// `ContentWithTags` is the wire shape shared by the owner listing and the
/// public shared-brain view; tag ids are never exposed to callers.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_type: String,
    pub link: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareLink {
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// The fixed enumeration of storable content kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Image,
    Video,
    Article,
    Audio,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Article => "article",
            ContentType::Audio => "audio",
        }
    }

    /// Parse a request-supplied type string, `None` for anything outside
    /// the enumeration
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "image" => Some(ContentType::Image),
            "video" => Some(ContentType::Video),
            "article" => Some(ContentType::Article),
            "audio" => Some(ContentType::Audio),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content entry as returned to clients, with tags expanded to titles
#[derive(Debug, Clone, Serialize)]
pub struct ContentWithTags {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl ContentWithTags {
    pub fn from_row(content: Content, tags: Vec<String>) -> Self {
        Self {
            id: content.id,
            content_type: content.content_type,
            link: content.link,
            title: content.title,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parses_the_fixed_enumeration() {
        assert_eq!(ContentType::parse("image"), Some(ContentType::Image));
        assert_eq!(ContentType::parse("video"), Some(ContentType::Video));
        assert_eq!(ContentType::parse("article"), Some(ContentType::Article));
        assert_eq!(ContentType::parse("audio"), Some(ContentType::Audio));
    }

    #[test]
    fn content_type_rejects_everything_else() {
        assert_eq!(ContentType::parse("text"), None);
        assert_eq!(ContentType::parse("Image"), None);
        assert_eq!(ContentType::parse(""), None);
    }

    #[test]
    fn content_type_round_trips_through_as_str() {
        for ty in [
            ContentType::Image,
            ContentType::Video,
            ContentType::Article,
            ContentType::Audio,
        ] {
            assert_eq!(ContentType::parse(ty.as_str()), Some(ty));
        }
    }
}
