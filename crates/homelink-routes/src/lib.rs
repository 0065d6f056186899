//! Named route lookup seam for homelink.
//!
//! This crate decouples the helper functions from whatever routing layer the
//! host application uses. One trait forms the core API:
//!
//! - [`RouteResolver`]: turn a route name into a URL
//!
//! # Implementations
//!
//! - [`StaticRoutes`]: in-memory name-to-URL table for fixed route sets
//! - [`NullResolver`]: always fails (no routing configured)
//!
//! Applications with a real router implement [`RouteResolver`] over it; the
//! helpers never inspect URLs, they use whatever the resolver returns.
//!
//! # Example
//!
//! ```
//! use homelink_routes::{RouteResolver, StaticRoutes};
//!
//! let routes = StaticRoutes::new().with_route("home", "/");
//! assert_eq!(routes.resolve("home").unwrap(), "/");
//! assert!(routes.resolve("dashboard").is_err());
//! ```

mod static_routes;
pub use static_routes::StaticRoutes;

/// Error returned when a route name cannot be turned into a URL.
///
/// Lookup failure is an expected outcome for the helpers built on top of
/// this crate, not a fault: they degrade to label-only output.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// No route is registered under the given name.
    #[error("no route named '{0}'")]
    UnknownRoute(String),
    /// The route exists but no URL can be produced for it, e.g. it requires
    /// parameters the caller cannot supply.
    #[error("route '{name}' cannot be turned into a URL: {reason}")]
    NotReversible {
        /// Route name as given by the caller.
        name: String,
        /// Backend-specific explanation.
        reason: String,
    },
}

/// Route-name-to-URL lookup.
///
/// Implementations map a route name (e.g. `"home"`, `"accounts:index"`) to
/// the URL the host router would serve it under. The returned URL is used
/// verbatim; it may be absolute (`https://…`) or root-relative (`/`).
pub trait RouteResolver: Send + Sync {
    /// Resolve a route name to a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the name is unknown or the route cannot
    /// be reduced to a single URL.
    fn resolve(&self, name: &str) -> Result<String, ResolveError>;
}

/// [`RouteResolver`] that knows no routes.
///
/// Every lookup fails with [`ResolveError::UnknownRoute`]. Use when the host
/// has no routing layer at all; helpers then render label-only output.
pub struct NullResolver;

impl RouteResolver for NullResolver {
    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        Err(ResolveError::UnknownRoute(name.to_owned()))
    }
}
