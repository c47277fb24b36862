//! Route table: which view answers which path.
//!
//! Entries are tried in order; [`ViewKind::NotFound`] is the fallback and is
//! only reached when nothing else matches.

use axum::{
    Router,
    routing::{MethodRouter, any, get},
};

use crate::web::handlers::{
    course_detail_handler, index_handler, login_handler, not_found_handler, stats_handler,
};

/// The views the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Index,
    Login,
    Stats,
    CourseDetail,
    NotFound,
}

impl ViewKind {
    /// Handler serving this view.
    ///
    /// Regular views answer `GET` (and `HEAD`); the fallback answers any method.
    pub fn method_router(self) -> MethodRouter {
        match self {
            ViewKind::Index => get(index_handler),
            ViewKind::Login => get(login_handler),
            ViewKind::Stats => get(stats_handler),
            ViewKind::CourseDetail => get(course_detail_handler),
            ViewKind::NotFound => any(not_found_handler),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub view: ViewKind,
}

/// Path patterns, in match order. `{courseid}` captures one non-empty segment.
pub const ROUTES: [RouteEntry; 4] = [
    RouteEntry {
        pattern: "/",
        view: ViewKind::Index,
    },
    RouteEntry {
        pattern: "/login",
        view: ViewKind::Login,
    },
    RouteEntry {
        pattern: "/stats",
        view: ViewKind::Stats,
    },
    RouteEntry {
        pattern: "/course/{courseid}",
        view: ViewKind::CourseDetail,
    },
];

/// View rendered for every path missing from [`ROUTES`].
pub const FALLBACK: ViewKind = ViewKind::NotFound;

/// Builds the view router from [`ROUTES`] and [`FALLBACK`].
///
/// # Endpoints
///
/// - `GET /` - Home page with links to every page
/// - `GET /login` - Login form mockup
/// - `GET /stats` - Site statistics
/// - `GET /course/{courseid}` - Course detail
/// - anything else - Not found page (`404`)
pub fn view_routes() -> Router {
    ROUTES
        .iter()
        .fold(Router::new(), |router, entry| {
            router.route(entry.pattern, entry.view.method_router())
        })
        .fallback_service(FALLBACK.method_router())
}
