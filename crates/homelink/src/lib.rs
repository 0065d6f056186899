//! Home page link and breadcrumb helpers.
//!
//! This crate provides:
//! - [`HomeLink`]: renders a link and breadcrumb entries pointing back to a
//!   project's home page, driven by a configured named route and label
//! - [`escape_html`]: HTML escaping for fragment interpolation
//!
//! The home route name and default label come from configuration
//! ([`homelink_config::Config`]); the route-name-to-URL lookup is delegated
//! to a [`RouteResolver`] implemented over the host application's router.
//! When no home route is configured, every helper renders nothing, so pages
//! can call them unconditionally.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use homelink::{HomeLink, StaticRoutes};
//!
//! let routes = Arc::new(StaticRoutes::new().with_route("home", "/"));
//! let home = HomeLink::new(Some("home".to_owned()), "Home", routes);
//!
//! assert_eq!(home.home_url(), "/");
//! assert_eq!(
//!     home.breadcrumb_bs3(None),
//!     r#"<li><a href="/">Home</a></li>"#
//! );
//! ```

mod html;
mod tags;

pub use html::escape_html;
pub use tags::{Breadcrumb, HomeLink};

// Re-export the resolver seam for convenience
pub use homelink_routes::{NullResolver, ResolveError, RouteResolver, StaticRoutes};
