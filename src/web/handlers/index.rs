//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::web::shell::Shell;

/// A page of the site, shown as a card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCard {
    pub path: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PROJECT_SUMMARY: &str =
    "this demo lets students browse classes, read short reviews, and post quick ratings.";

/// Cards rendered on the home page, in display order. Paths are unique.
pub const PAGES: [PageCard; 4] = [
    PageCard {
        path: "/",
        name: "home",
        description: "list classes and links to other pages",
    },
    PageCard {
        path: "/login",
        name: "login",
        description: "basic sign-in form mockup",
    },
    PageCard {
        path: "/stats",
        name: "stats",
        description: "simple boxes with rating summaries",
    },
    PageCard {
        path: "/course/101",
        name: "sample course",
        description: "single course page with fake reviews",
    },
];

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - Project summary
/// - One card per page of the site
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub shell: Shell,
    pub summary: &'static str,
    pub pages: &'static [PageCard],
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(shell: Shell) -> impl IntoResponse {
    IndexTemplate {
        shell,
        summary: PROJECT_SUMMARY,
        pages: &PAGES,
    }
}
