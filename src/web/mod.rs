//! Web layer: the browser-facing site.
//!
//! Every response is a full HTML document: the host page with the shell
//! (header, navigation and the active view) mounted into its `root` element.
//! Views are Askama templates rendered on the server.
//!
//! # Modules
//!
//! - [`handlers`] - One template and handler per view
//! - [`host`] - Host document and mount point
//! - [`location`] - Current path extractor
//! - [`middleware`] - Mounting and request tracing
//! - [`nav`] - Navigation links and active-link matching
//! - [`routes`] - Route table
//! - [`shell`] - Header and navigation frame

pub mod handlers;
pub mod host;
pub mod location;
pub mod middleware;
pub mod nav;
pub mod routes;
pub mod shell;
