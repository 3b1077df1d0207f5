//! End-to-end tests over the fully wired app: middleware, metrics, docs and
//! the analytics routes sharing one in-memory repository.

use actix_web::{http::StatusCode, test, web, App};
use backend::analytics::{configure_routes, AnalyticsRepository, InMemoryAnalyticsRepository};
use backend::config::CorsConfig;
use backend::error::{json_error_handler, query_error_handler};
use serde_json::{json, Value};

macro_rules! full_app {
    ($repo:expr) => {{
        let repo = $repo;
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:50003".to_string()],
        };
        test::init_service(
            App::new()
                .wrap(backend::middleware::Logger)
                .wrap(backend::middleware::cors_middleware(&cors))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .service(backend::health::health_check)
                .service(backend::metrics::metrics_handler)
                .service(backend::openapi::openapi_json)
                .configure(move |cfg| configure_routes(cfg, repo.clone())),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_certification_review_flow() {
    let repo = InMemoryAnalyticsRepository::seeded();
    let app = full_app!(repo.clone());

    let req = test::TestRequest::put()
        .uri("/api/analytics/certifications/2/category")
        .set_json(json!({ "category": "SA" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let req = test::TestRequest::put()
        .uri("/api/analytics/certifications/1/completed")
        .set_json(json!({ "completed": "-5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The handle given to the app sees the same state
    let records = repo.certifications().await;
    assert_eq!(records[0].completed.count(), Some(0));
    assert_eq!(records[1].category.as_str(), "SA");
    assert_eq!(records[2].category.as_str(), "SA");
    assert_eq!(records[2].completed.count(), Some(0));

    let req = test::TestRequest::get()
        .uri("/api/analytics/certifications/2/credentials?q=postman")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["applicant"]["category"], "SA");
    assert_eq!(body["credentials"][0]["title"], "API Testing");
}

#[actix_web::test]
async fn test_concurrent_edits_all_apply() {
    let repo = InMemoryAnalyticsRepository::seeded();

    let edits = (0..3u32).map(|i| {
        let repo = repo.clone();
        tokio::spawn(async move {
            repo.apply_edit(&shared::CertificationEdit::SetCompleted {
                id: i + 1,
                input: shared::CompletedInput::from(f64::from(i + 10)),
            })
            .await
        })
    });

    for handle in edits.collect::<Vec<_>>() {
        let updated = handle.await.unwrap();
        assert!(updated.is_some());
    }

    let counts: Vec<Option<u32>> = repo
        .certifications()
        .await
        .iter()
        .map(|r| r.completed.count())
        .collect();
    assert_eq!(counts, vec![Some(10), Some(11), Some(12)]);
}

#[actix_web::test]
async fn test_metrics_track_matched_routes() {
    let app = full_app!(InMemoryAnalyticsRepository::seeded());

    let req = test::TestRequest::get().uri("/api/analytics/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("alumni_portal_http_http_requests_total"));
    assert!(text.contains("endpoint=\"/api/analytics/stats\""));
}

#[actix_web::test]
async fn test_health_and_docs_are_served() {
    let app = full_app!(InMemoryAnalyticsRepository::seeded());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let paths = body["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/health"));
    assert!(paths.keys().any(|path| path.ends_with("/engagement")));
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = full_app!(InMemoryAnalyticsRepository::seeded());
    let req = test::TestRequest::put()
        .uri("/api/analytics/certifications/1/completed")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"completed\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 400);
}
