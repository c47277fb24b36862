mod common;

use axum::http::{Method, header};
use axum_test::TestServer;
use course_review::prelude::*;

#[test]
fn test_missing_root_element_aborts_startup() {
    let err = AppState::mount("<!doctype html><html><body><div id=\"app\"></div></body></html>")
        .err()
        .unwrap();

    assert_eq!(err.to_string(), "root element not found");
}

#[test]
fn test_missing_root_element_through_anyhow() {
    let result: anyhow::Result<AppState> = AppState::mount("<body></body>").map_err(Into::into);

    assert_eq!(
        format!("{}", result.err().unwrap()),
        "root element not found"
    );
}

#[tokio::test]
async fn test_custom_host_page_is_used() {
    let host = r#"<html><head><title>custom</title></head><body><header>banner</header><section id="root"><p>loading...</p></section><footer>foot</footer></body></html>"#;
    let state = AppState::mount(host).unwrap();
    let server = TestServer::new(site_router(state)).unwrap();

    let body = server.get("/").await.text();

    assert!(body.starts_with("<html><head><title>custom</title></head><body><header>banner</header><section id=\"root\"><div class=\"app-shell\">"));
    assert!(body.ends_with("</section><footer>foot</footer></body></html>"));
    assert!(!body.contains("loading..."));
}

#[tokio::test]
async fn test_not_found_is_mounted_too() {
    let server = common::create_test_server();

    let body = server.get("/nowhere").await.text();

    assert!(body.starts_with("<!doctype html>"));
    assert!(body.contains(r#"<div id="root"><div class="app-shell">"#));
}

#[tokio::test]
async fn test_content_length_matches_mounted_document() {
    let server = common::create_test_server();

    for path in ["/", "/login", "/course/101", "/does-not-exist"] {
        let response = server.get(path).await;
        let body = response.text();
        let length = response.header(header::CONTENT_LENGTH);

        assert_eq!(length.to_str().unwrap(), body.len().to_string(), "{path}");
    }
}

#[tokio::test]
async fn test_head_reports_same_length_as_get() {
    let server = common::create_test_server();

    for path in ["/", "/stats", "/course/abc%20xyz"] {
        let get = server.get(path).await;
        let head = server.method(Method::HEAD, path).await;

        assert_eq!(get.status_code(), head.status_code(), "{path}");
        assert_eq!(
            head.header(header::CONTENT_LENGTH),
            get.header(header::CONTENT_LENGTH),
            "{path}"
        );
        assert!(head.text().is_empty(), "{path}");
    }
}
