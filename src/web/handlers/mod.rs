//! HTML template rendering handlers, one per view.

mod course_detail;
mod index;
mod login;
mod not_found;
mod stats;

pub use course_detail::{
    CourseDetailTemplate, REVIEW_SNIPPETS, SAMPLE_METRICS, course_detail_handler,
};
pub use index::{IndexTemplate, PAGES, PROJECT_SUMMARY, PageCard, index_handler};
pub use login::{LOGIN_FIELDS, LoginField, LoginTemplate, login_handler};
pub use not_found::{NotFoundTemplate, not_found_handler};
pub use stats::{STAT_ITEMS, StatItem, StatsTemplate, stats_handler};
