//! HTTP validation tests
//!
//! Exercises the request-validation and static-lookup paths, which must
//! reject bad input before any upstream call is made. No network access.

use std::time::Duration;

use actix_web::{test, web, App};

use headshot_service::handlers;
use headshot_service::services::photos::{HeadshotPipeline, ImageFetcher, ThumbnailProcessor};
use headshot_service::services::RosterClient;
use headshot_service::Config;

fn app_data() -> (
    web::Data<Config>,
    web::Data<RosterClient>,
    web::Data<HeadshotPipeline>,
) {
    let config = Config::from_env().expect("load config");

    let roster_client = RosterClient::new(
        &config.upstream,
        Duration::from_secs(config.fetch.roster_timeout_secs),
    )
    .expect("roster client");

    let fetcher =
        ImageFetcher::new(Duration::from_secs(config.fetch.timeout_secs)).expect("fetcher");
    let pipeline = HeadshotPipeline::new(
        fetcher,
        ThumbnailProcessor::with_defaults(),
        config.upstream.image_base_url.clone(),
    );

    (
        web::Data::new(config),
        web::Data::new(roster_client),
        web::Data::new(pipeline),
    )
}

macro_rules! init_app {
    () => {{
        let (config, roster_client, pipeline) = app_data();
        test::init_service(
            App::new()
                .app_data(config)
                .app_data(roster_client)
                .app_data(pipeline)
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
                ),
        )
        .await
    }};
}

#[actix_web::test]
async fn malformed_team_code_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/photos/D4L").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn overlong_team_code_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/roster/DALLAS")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn non_numeric_player_id_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/photos/DAL/benn")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_type"], "validation_error");
}

#[actix_web::test]
async fn unknown_team_is_not_found_without_upstream_calls() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/roster/ZZZ").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Team not found"));
}

#[actix_web::test]
async fn unknown_team_archive_is_not_found_before_any_fetch() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/photos/ZZZ").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn short_search_query_is_rejected() {
    let app = init_app!();

    for uri in ["/api/v1/players/search", "/api/v1/players/search?q=x"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{uri}");
    }
}
