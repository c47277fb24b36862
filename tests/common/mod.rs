#![allow(dead_code)]

use axum_test::TestServer;
use course_review::routes::site_router;
use course_review::state::AppState;
use course_review::web::host::DEFAULT_HOST_PAGE;

pub fn create_test_state() -> AppState {
    AppState::mount(DEFAULT_HOST_PAGE).unwrap()
}

pub fn create_test_server() -> TestServer {
    TestServer::new(site_router(create_test_state())).unwrap()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Labels of the navigation links marked active.
pub fn active_nav_labels(body: &str) -> Vec<String> {
    body.split("<a ")
        .filter(|tag| tag.contains(r#"class="active""#))
        .filter_map(|tag| {
            let label = tag.split_once('>')?.1;
            Some(label.split_once("</a>")?.0.to_string())
        })
        .collect()
}
