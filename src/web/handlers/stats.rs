//! Site statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::web::shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: &'static str,
}

/// Summary numbers, in display order. Labels are unique.
pub const STAT_ITEMS: [StatItem; 3] = [
    StatItem {
        label: "total courses",
        value: "2284",
    },
    StatItem {
        label: "total reviews",
        value: "126",
    },
    StatItem {
        label: "average rating",
        value: "4.2 / 5",
    },
];

/// Template for the statistics page.
///
/// Renders `templates/stats.html` with one `stat-card` per item.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub shell: Shell,
    pub items: &'static [StatItem],
}

/// Renders the statistics page.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_handler(shell: Shell) -> impl IntoResponse {
    StatsTemplate {
        shell,
        items: &STAT_ITEMS,
    }
}
