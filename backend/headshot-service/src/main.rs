/// Headshot Service - HTTP Server
///
/// Resolves team rosters, fetches player headshots with a season-folder
/// fallback, normalizes them into square thumbnails, and serves single
/// images or whole-roster ZIP archives.
use std::io;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware as actix_middleware, web, App, HttpResponse, HttpServer};
use headshot_service::handlers;
use headshot_service::services::photos::{HeadshotPipeline, ImageFetcher, ThumbnailProcessor};
use headshot_service::services::RosterClient;
use headshot_service::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    let roster_client = RosterClient::new(
        &config.upstream,
        Duration::from_secs(config.fetch.roster_timeout_secs),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let fetcher = ImageFetcher::new(Duration::from_secs(config.fetch.timeout_secs))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let pipeline = HeadshotPipeline::new(
        fetcher,
        ThumbnailProcessor::with_defaults(),
        config.upstream.image_base_url.clone(),
    );

    let config_data = web::Data::new(config.clone());
    let roster_client = web::Data::new(roster_client);
    let pipeline = web::Data::new(pipeline);

    tracing::info!(bind_address = %bind_address, env = %config.app.env, "Headshot service starting");

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(config_data.clone())
            .app_data(roster_client.clone())
            .app_data(pipeline.clone())
            .wrap(cors)
            .wrap(actix_middleware::Logger::default())
            .route(
                "/api/v1/health",
                web::get()
                    .to(|| async { HttpResponse::Ok().json(serde_json::json!({"status": "ok"})) }),
            )
            .route(
                "/api/v1/health/ready",
                web::get().to(|| async { HttpResponse::Ok().finish() }),
            )
            .route(
                "/api/v1/health/live",
                web::get().to(|| async { HttpResponse::Ok().finish() }),
            )
            .service(
                web::scope("/api/v1")
                    .route("/roster/{team_code}", web::get().to(handlers::get_roster))
                    .route(
                        "/photos/{team_code}",
                        web::get().to(handlers::download_team_photos),
                    )
                    .route(
                        "/photos/{team_code}/{player_id}",
                        web::get().to(handlers::download_player_photo),
                    )
                    .route("/players/search", web::get().to(handlers::search_players)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
