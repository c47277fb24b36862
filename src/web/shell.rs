//! Persistent page frame: header, tagline and navigation.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::web::location::Location;
use crate::web::nav::{NavEntry, nav_entries};

pub const SITE_TITLE: &str = "Course Review Site";
pub const SITE_TAGLINE: &str = "browse classes, ratings, and student feedback.";

/// Data rendered by `templates/shell.html` around every view.
///
/// Extracted per request, so the navigation always reflects the current
/// location. Every view template embeds one as its `shell` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub title: &'static str,
    pub tagline: &'static str,
    pub nav: Vec<NavEntry>,
}

impl Shell {
    pub fn for_location(location: &Location) -> Self {
        Self {
            title: SITE_TITLE,
            tagline: SITE_TAGLINE,
            nav: nav_entries(location),
        }
    }
}

impl<S> FromRequestParts<S> for Shell
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let location = Location::from_request_parts(parts, state).await?;
        Ok(Self::for_location(&location))
    }
}
