/// brain-service - Main entry point
///
/// REST API for the "second brain" content-bookmarking service.
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use sqlx::PgPool;
use std::io;
use tracing_subscriber::EnvFilter;

use brain_service::{config::Config, db, handlers, metrics, middleware::JwtAuthMiddleware, security::jwt};

/// Health check endpoint; healthy once the database answers
async fn health_check(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "brain-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "brain-service",
        })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        "Starting brain-service on {}:{}",
        config.server_host,
        config.server_port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool initialized");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    jwt::initialize_jwt_secret(&config.jwt_secret).expect("Failed to initialize JWT secret");
    tracing::info!("JWT secret initialized");

    let bind_addr = (config.server_host.clone(), config.server_port);
    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .app_data(handlers::json_config())
            .route("/metrics", web::get().to(metrics::metrics_handler))
            .service(
                web::scope("/api/v1")
                    .route("/health", web::get().to(health_check))
                    .route("/signup", web::post().to(handlers::signup))
                    .route("/signin", web::post().to(handlers::signin))
                    .service(
                        web::scope("/content")
                            .wrap(JwtAuthMiddleware)
                            .route("", web::post().to(handlers::create_content))
                            .route("", web::get().to(handlers::list_content))
                            .route("", web::delete().to(handlers::delete_content)),
                    )
                    .service(
                        web::scope("/brain")
                            .service(
                                web::scope("/share")
                                    .wrap(JwtAuthMiddleware)
                                    .route("", web::post().to(handlers::share_brain)),
                            )
                            .route("/{share_link}", web::get().to(handlers::get_shared_brain)),
                    ),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
