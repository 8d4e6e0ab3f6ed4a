/// Sharing handlers - share-link management and the public shared view
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::models::ContentWithTags;
use crate::services::ShareService;

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub share: bool,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct SharedBrainResponse {
    pub username: String,
    pub content: Vec<ContentWithTags>,
}

/// Enable or disable the requester's share link.
///
/// Disabling revokes the stored token and still answers 400 "Sharing is
/// disabled", the response shape this API has always had for `share: false`.
pub async fn share_brain(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user: AuthUser,
    payload: web::Json<ShareRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ShareService::new(pool.get_ref().clone(), config.share_base_url.clone());

    if payload.share {
        let link = service.enable(user.id).await?;
        Ok(HttpResponse::Ok().json(ShareResponse { link }))
    } else {
        service.disable(user.id).await?;
        Err(AppError::Validation("Sharing is disabled".to_string()))
    }
}

/// Public fetch of a shared brain. No token involved: the opaque share
/// token in the path is the whole capability.
pub async fn get_shared_brain(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let share_link = path.into_inner();
    if share_link.is_empty() {
        return Err(AppError::Validation("Share link is required".to_string()));
    }

    let service = ShareService::new(pool.get_ref().clone(), config.share_base_url.clone());
    let (username, content) = service.resolve(&share_link).await?;

    Ok(HttpResponse::Ok().json(SharedBrainResponse { username, content }))
}
