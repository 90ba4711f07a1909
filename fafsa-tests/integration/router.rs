//! End-to-end router tests through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use fafsa_core::FafsaConfig;
use fafsa_web::{AppState, build_router};
use tower::ServiceExt;

fn router(config: FafsaConfig) -> Router {
    build_router(AppState::new(Arc::new(config)), None)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_pages_render_in_standalone_mode() {
    let app = router(FafsaConfig::for_testing());

    for (uri, marker) in [
        ("/", "Federal student aid, step by step"),
        ("/features", "Dependency status"),
        ("/apply", "Student information"),
        ("/documents", "Documents to gather"),
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.starts_with("<!DOCTYPE html>"), "{uri}");
        assert!(body.contains(marker), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (status, body) = get(router(FafsaConfig::for_testing()), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_health_reports_mode_and_version() {
    let (status, body) = get(router(FafsaConfig::for_testing()), "/api/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["mode"], "standalone");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_routes_nest_under_base_path() {
    let app = router(FafsaConfig::for_static_export());

    let (status, body) = get(app.clone(), "/fafsa-guide/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/fafsa-guide/apply/""#));

    let (status, _) = get(app.clone(), "/fafsa-guide/documents/").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app.clone(), "/fafsa-guide/documents").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app.clone(), "/fafsa-guide/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""mode":"export""#));

    let (status, _) = get(app, "/documents").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_apply_post_returns_fragment_with_errors() {
    let app = router(FafsaConfig::for_testing());
    let (status, body) = send(
        app,
        post_form("/apply", "first_name=Ana&email=ana%40example&phone=123"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<form id="application-form""#));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Invalid email"));
    assert!(body.contains("Enter a 10-digit US phone number"));
    assert!(body.contains("Last name is required"));
    assert!(!body.contains("First name is required"));
    assert!(body.contains(r#"value="Ana""#));
}

#[tokio::test]
async fn test_apply_post_success_alert() {
    let app = router(FafsaConfig::for_testing());
    let form = "first_name=Ana&last_name=Lopez&email=ana%40example.com&phone=555-123-4567\
                &date_of_birth=2006-04-12&state=NM&dependency_status=dependent\
                &enrollment=full_time&notes=&certify=yes";
    let (status, body) = send(app, post_form("/apply", form)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Student information saved"));
    assert!(body.contains(r#"role="status""#));
    assert!(!body.contains(r#"aria-invalid="true""#));
}

#[tokio::test]
async fn test_apply_post_without_htmx_returns_full_page() {
    let app = router(FafsaConfig::for_testing());
    let request = Request::post("/apply")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("first_name=Ana"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Start your application"));
    assert!(body.contains(r#"<form id="application-form""#));
    assert!(body.contains("Last name is required"));
    assert!(body.contains(r#"value="Ana""#));
}
