use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::web::host::MountPoint;

/// Shared, read-only application state.
///
/// Built once at startup; there is no mutable state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub mount: Arc<MountPoint>,
}

impl AppState {
    /// Mounts the site into `document`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MountMissing`] if `document` has no `root` element.
    pub fn mount(document: &str) -> Result<Self, AppError> {
        Ok(Self {
            mount: Arc::new(MountPoint::attach(document)?),
        })
    }

    /// Mounts the site into the host document selected by `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            mount: Arc::new(MountPoint::load(config.host_page.as_deref())?),
        })
    }
}
