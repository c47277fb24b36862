mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_home_page_lists_every_page() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("<h1>Course Review Site</h1>"));
    assert!(body.contains("<p>browse classes, ratings, and student feedback.</p>"));
    assert_eq!(common::count(&body, r#"<article class="mini-card">"#), 4);

    for name in ["home", "login", "stats", "sample course"] {
        assert!(body.contains(&format!("<h3>{name}</h3>")), "missing card {name}");
    }

    for path in ["/", "/login", "/stats", "/course/101"] {
        assert!(body.contains(&format!(r#"<a href="{path}">open page</a>"#)));
    }
}

#[tokio::test]
async fn test_responses_are_full_html_documents() {
    let server = common::create_test_server();

    let response = server.get("/stats").await;

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.starts_with("<!doctype html>"));
    assert!(body.contains(r#"<div id="root"><div class="app-shell">"#));
    assert_eq!(common::count(&body, r#"<div class="app-shell">"#), 1);
    assert_eq!(common::count(&body, r#"<header class="site-header">"#), 1);
    assert_eq!(common::count(&body, r#"<main class="page">"#), 1);
    assert!(body.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn test_login_form_is_inert() {
    let server = common::create_test_server();

    let response = server.get("/login").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains(r#"<section class="panel form-panel">"#));
    assert!(body.contains(r#"<form class="simple-form">"#));
    assert!(body.contains(r#"<label for="username">username</label>"#));
    assert!(body.contains(
        r#"<input id="username" name="username" type="text" placeholder="admin" />"#
    ));
    assert!(body.contains(r#"<label for="password">password</label>"#));
    assert!(body.contains(
        r#"<input id="password" name="password" type="password" placeholder="password" />"#
    ));
    assert!(body.contains(r#"<button type="button">sign in</button>"#));
    assert!(!body.contains(r#"type="submit""#));
    assert!(!body.contains("action="));
    assert!(body.contains(r#"<a href="/">go back home</a>"#));
}

#[tokio::test]
async fn test_login_form_cannot_be_posted() {
    let server = common::create_test_server();

    let response = server.post("/login").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_stats_cards() {
    let server = common::create_test_server();

    let response = server.get("/stats").await;

    response.assert_status_ok();
    let body = response.text();

    assert_eq!(
        common::count(&body, r#"<article class="mini-card stat-card">"#),
        3
    );

    for (label, value) in [
        ("total courses", "2284"),
        ("total reviews", "126"),
        ("average rating", "4.2 / 5"),
    ] {
        let card = format!("<h3>{label}</h3>\n          <p class=\"stat-value\">{value}</p>");
        assert!(body.contains(&card), "missing stat card {label}");
    }

    let courses = body.find("total courses").unwrap();
    let reviews = body.find("total reviews").unwrap();
    let rating = body.find("average rating").unwrap();
    assert!(courses < reviews && reviews < rating);

    assert!(body.contains(r#"<a href="/">go back home</a>"#));
}

#[tokio::test]
async fn test_course_detail() {
    let server = common::create_test_server();

    let response = server.get("/course/101").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("<h2>course detail</h2>"));
    assert!(body.contains("showing course id: <strong>101</strong>"));
    assert!(body.contains("<p>sample metrics: overall 4.3, workload 3.4, interest 4.6</p>"));
    assert!(body.contains(r#"<ul class="review-list">"#));
    assert_eq!(common::count(&body, "<li>"), 3);
    assert!(body.contains("<li>good class, fair grading, and clear homework expectations.</li>"));
    assert!(body.contains(r#"<a href="/">go back home</a>"#));
}

#[tokio::test]
async fn test_course_detail_decodes_id() {
    let server = common::create_test_server();

    let response = server.get("/course/abc%20xyz").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("showing course id: <strong>abc xyz</strong>"));
    assert!(body.contains("sample metrics: overall 4.3, workload 3.4, interest 4.6"));
    assert_eq!(common::count(&body, "<li>"), 3);
}

#[tokio::test]
async fn test_course_detail_renders_any_id_verbatim() {
    let server = common::create_test_server();

    for id in ["0", "cs-101", "not_a_number", "999999999999999999999"] {
        let response = server.get(&format!("/course/{id}")).await;

        response.assert_status_ok();
        assert!(
            response
                .text()
                .contains(&format!("<strong>{id}</strong>")),
            "course id {id} not rendered"
        );
    }
}

#[tokio::test]
async fn test_course_detail_keeps_undecodable_id() {
    let server = common::create_test_server();

    let response = server.get("/course/%FF").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("<h1>Course Review Site</h1>"));
    assert!(body.contains("showing course id: <strong>%FF</strong>"));
    assert!(body.contains("sample metrics: overall 4.3, workload 3.4, interest 4.6"));
    assert_eq!(common::count(&body, "<li>"), 3);
}

#[tokio::test]
async fn test_course_detail_escapes_markup() {
    let server = common::create_test_server();

    let response = server.get("/course/%3Cb%3E").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<strong>&lt;b&gt;</strong>"));
    assert!(!body.contains("<strong><b></strong>"));
}

#[tokio::test]
async fn test_not_found_echoes_path() {
    let server = common::create_test_server();

    let response = server.get("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.text();

    assert!(body.contains("<h1>Course Review Site</h1>"));
    assert!(body.contains("<h2>404</h2>"));
    assert!(body.contains("page not found: /does-not-exist"));
    assert!(body.contains(r#"<a href="/">go back home</a>"#));
}

#[tokio::test]
async fn test_unhandled_paths_fall_through_to_not_found() {
    let server = common::create_test_server();

    for path in ["/course", "/course/101/reviews", "/logins", "/stats/today", "/LOGIN"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(
            response.text().contains(&format!("page not found: {path}")),
            "{path} not echoed"
        );
    }
}

#[tokio::test]
async fn test_not_found_answers_every_method() {
    let server = common::create_test_server();

    let response = server.post("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("page not found: /does-not-exist"));
}

#[tokio::test]
async fn test_rendering_is_idempotent() {
    let server = common::create_test_server();

    for path in ["/", "/login", "/stats", "/course/101", "/does-not-exist"] {
        let first = server.get(path).await.text();
        let second = server.get(path).await.text();

        assert_eq!(first, second, "{path} rendered differently");
    }
}
