//! Site navigation bar.
//!
//! The link table is fixed. Whether a link is active is a pure function of
//! its target, its [`MatchMode`] and the current [`Location`].

use crate::web::location::Location;

/// How a navigation target is compared against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Active only when the location equals the target.
    Exact,
    /// Active when the location equals the target or lies below it.
    #[default]
    Prefix,
}

impl MatchMode {
    pub fn matches(self, target: &str, location: &str) -> bool {
        if location == target {
            return true;
        }

        match self {
            MatchMode::Exact => false,
            MatchMode::Prefix => location.strip_prefix(target).is_some_and(|rest| {
                target.ends_with('/') || rest.starts_with('/')
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub mode: MatchMode,
}

/// Header links, in display order.
///
/// `home` is matched exactly, otherwise it would light up on every page.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "home",
        target: "/",
        mode: MatchMode::Exact,
    },
    NavLink {
        label: "login",
        target: "/login",
        mode: MatchMode::Prefix,
    },
    NavLink {
        label: "stats",
        target: "/stats",
        mode: MatchMode::Prefix,
    },
    NavLink {
        label: "sample course",
        target: "/course/101",
        mode: MatchMode::Prefix,
    },
];

/// A navigation link resolved against the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
    pub active: bool,
}

impl NavEntry {
    /// CSS class for the link: `active` or empty.
    pub fn class_name(&self) -> &'static str {
        if self.active { "active" } else { "" }
    }
}

pub fn is_active(link: &NavLink, location: &Location) -> bool {
    link.mode.matches(link.target, location.path())
}

/// Resolves every navigation link against `location`.
pub fn nav_entries(location: &Location) -> Vec<NavEntry> {
    NAV_LINKS
        .iter()
        .map(|link| NavEntry {
            label: link.label,
            target: link.target,
            active: is_active(link, location),
        })
        .collect()
}
