//! Course detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, rejection::PathRejection},
    http::Uri,
    response::IntoResponse,
};

use crate::web::shell::Shell;

pub const SAMPLE_METRICS: &str = "sample metrics: overall 4.3, workload 3.4, interest 4.6";

/// Recent comments shown for every course. Snippets are unique.
pub const REVIEW_SNIPPETS: [&str; 3] = [
    "good class, fair grading, and clear homework expectations.",
    "workload can be heavy during project weeks but still manageable.",
    "lectures are straightforward and examples help a lot for quizzes.",
];

/// Template for the course detail page.
///
/// Renders `templates/course_detail.html` with:
/// - The requested course id, emphasized
/// - Sample metrics
/// - Review snippets
#[derive(Template, WebTemplate)]
#[template(path = "course_detail.html")]
pub struct CourseDetailTemplate {
    pub shell: Shell,
    pub course_id: String,
    pub metrics: &'static str,
    pub reviews: &'static [&'static str],
}

/// Renders the detail page for a course.
///
/// # Endpoint
///
/// `GET /course/{courseid}`
///
/// The id is shown as decoded by the router and is never validated. An id
/// that does not decode to UTF-8 is shown exactly as it appears in the URL.
/// Without a captured id the emphasized element stays empty.
pub async fn course_detail_handler(
    shell: Shell,
    uri: Uri,
    course_id: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let course_id = match course_id {
        Ok(Path(id)) => id,
        Err(PathRejection::FailedToDeserializePathParams(e)) => {
            tracing::debug!(error = %e, "Course id kept undecoded");
            raw_last_segment(uri.path()).to_string()
        }
        Err(_) => String::new(),
    };

    tracing::debug!(course_id = %course_id, "Rendering course detail");

    CourseDetailTemplate {
        shell,
        course_id,
        metrics: SAMPLE_METRICS,
        reviews: &REVIEW_SNIPPETS,
    }
}

fn raw_last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
