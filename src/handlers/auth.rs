/// Authentication handlers
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::AppError;
use crate::security::{jwt, password};
use crate::{metrics, validators};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
}

/// Signup endpoint handler
///
/// Validation failures answer 411 with every violated rule; a taken
/// username answers 403. The store's unique constraint is what decides the
/// conflict, not a prior lookup.
pub async fn signup(
    pool: web::Data<PgPool>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    metrics::inc_signup_requests();

    let violations = validators::signup_violations(&payload.username, &payload.password);
    if !violations.is_empty() {
        return Err(AppError::SignupValidation(violations));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = user_repo::create_user(pool.get_ref(), &payload.username, &password_hash).await?;

    tracing::info!(user_id = %user.id, "user signed up");

    Ok(HttpResponse::Ok().body("Signed up"))
}

/// Signin endpoint handler
///
/// Unknown username and wrong password produce the same generic error.
pub async fn signin(
    pool: web::Data<PgPool>,
    payload: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    metrics::inc_signin_requests();

    let user = match user_repo::get_user_by_username(pool.get_ref(), &payload.username).await? {
        Some(user) => user,
        None => {
            metrics::inc_signin_failures();
            return Err(AppError::WrongCredentials);
        }
    };

    if password::verify_password(&payload.password, &user.password_hash).is_err() {
        metrics::inc_signin_failures();
        return Err(AppError::WrongCredentials);
    }

    let token = jwt::issue_token(user.id, &user.username)?;

    Ok(HttpResponse::Ok().json(SigninResponse { token }))
}
