/// Behavior tests for the authentication gate, run against an in-process
/// actix service with a stub handler; no database involved.
///
/// Covers:
/// - Missing Authorization header -> 401
/// - Token that fails verification -> 403
/// - Valid token passes and the handler sees the decoded identity
use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use uuid::Uuid;

use brain_service::middleware::{AuthUser, JwtAuthMiddleware};
use brain_service::security::jwt;

fn init_jwt() {
    // Shared across the test binary; later calls are no-ops.
    let _ = jwt::initialize_jwt_secret("middleware-test-secret");
}

async fn whoami(user: AuthUser) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "id": user.id,
        "username": user.username,
    }))
}

/// Middleware rejections come back as service errors, not responses;
/// resolve either to the status a client would see.
async fn status_of<S, R, B>(app: &S, req: R) -> StatusCode
where
    S: actix_web::dev::Service<
        R,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(whoami)),
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn missing_authorization_header_is_401() {
    init_jwt();
    let app = test_app!();

    let req = test::TestRequest::get().uri("/protected").to_request();

    assert_eq!(status_of(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn invalid_token_is_403() {
    init_jwt();
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "definitely-not-a-jwt"))
        .to_request();

    assert_eq!(status_of(&app, req).await, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn valid_token_reaches_the_handler_with_the_right_identity() {
    init_jwt();
    let app = test_app!();

    let user_id = Uuid::new_v4();
    let token = jwt::issue_token(user_id, "alice").expect("token should be issued");

    // The raw header value is the token; no Bearer scheme.
    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], serde_json::json!(user_id));
    assert_eq!(body["username"], "alice");
}

#[actix_web::test]
async fn bearer_prefixed_token_is_rejected() {
    init_jwt();
    let app = test_app!();

    let token = jwt::issue_token(Uuid::new_v4(), "alice").expect("token should be issued");

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    // The contract takes the raw header value as the token, so a Bearer
    // prefix makes it fail verification.
    assert_eq!(status_of(&app, req).await, StatusCode::FORBIDDEN);
}
