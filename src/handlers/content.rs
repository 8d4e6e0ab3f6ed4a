/// Content handlers - HTTP endpoints for tagged-link CRUD
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::metrics;
use crate::middleware::AuthUser;
use crate::models::{ContentType, ContentWithTags};
use crate::services::ContentService;

#[derive(Debug, Deserialize)]
pub struct CreateContentRequest {
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateContentResponse {
    pub message: String,
    pub content: ContentWithTags,
}

#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub content: Vec<ContentWithTags>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContentRequest {
    pub content_id: Uuid,
}

/// Create a new content entry owned by the requester
pub async fn create_content(
    pool: web::Data<PgPool>,
    user: AuthUser,
    payload: web::Json<CreateContentRequest>,
) -> Result<HttpResponse, AppError> {
    if payload.content_type.is_empty() || payload.link.is_empty() || payload.title.is_empty() {
        return Err(AppError::Validation(
            "Missing or invalid input fields".to_string(),
        ));
    }

    let content_type = ContentType::parse(&payload.content_type)
        .ok_or_else(|| AppError::Validation("Invalid content type".to_string()))?;

    let service = ContentService::new(pool.get_ref().clone());
    let content = service
        .create(
            user.id,
            content_type,
            &payload.link,
            &payload.title,
            &payload.tags,
        )
        .await?;

    metrics::inc_content_created();

    Ok(HttpResponse::Created().json(CreateContentResponse {
        message: "Content created successfully".to_string(),
        content,
    }))
}

/// List the requester's content, tags expanded to titles
pub async fn list_content(
    pool: web::Data<PgPool>,
    user: AuthUser,
) -> Result<HttpResponse, AppError> {
    let service = ContentService::new(pool.get_ref().clone());
    let content = service.list_for_user(user.id).await?;

    Ok(HttpResponse::Ok().json(ContentListResponse { content }))
}

/// Delete one of the requester's content entries by id
pub async fn delete_content(
    pool: web::Data<PgPool>,
    user: AuthUser,
    payload: web::Json<DeleteContentRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ContentService::new(pool.get_ref().clone());
    service.delete(user.id, payload.content_id).await?;

    Ok(HttpResponse::Ok().body("Delete succeeded"))
}
