//! In-memory route table.

use std::collections::HashMap;

use crate::{ResolveError, RouteResolver};

/// In-memory name-to-URL route table.
///
/// Suitable for applications whose route set is fixed at startup, and as a
/// test double. Use the builder methods to register routes.
///
/// # Example
///
/// ```
/// use homelink_routes::{RouteResolver, StaticRoutes};
///
/// let routes = StaticRoutes::new()
///     .with_route("home", "/")
///     .with_route("docs", "/docs/");
///
/// assert_eq!(routes.resolve("docs").unwrap(), "/docs/");
/// ```
#[derive(Debug, Default)]
pub struct StaticRoutes {
    routes: HashMap<String, String>,
}

impl StaticRoutes {
    /// Create an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, consuming and returning the table.
    ///
    /// Re-registering a name replaces the previous URL.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.routes.insert(name.into(), url.into());
        self
    }

    /// Register a route on an existing table.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.routes.insert(name.into(), url.into());
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteResolver for StaticRoutes {
    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownRoute(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_registered_route() {
        let routes = StaticRoutes::new().with_route("home", "/");

        assert_eq!(routes.resolve("home").unwrap(), "/");
    }

    #[test]
    fn test_resolve_unknown_route() {
        let routes = StaticRoutes::new().with_route("home", "/");

        let err = routes.resolve("dashboard").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownRoute(ref name) if name == "dashboard"));
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let routes = StaticRoutes::new();

        assert!(routes.is_empty());
        assert!(routes.resolve("home").is_err());
    }

    #[test]
    fn test_with_route_replaces_existing() {
        let routes = StaticRoutes::new()
            .with_route("home", "/old")
            .with_route("home", "/new");

        assert_eq!(routes.len(), 1);
        assert_eq!(routes.resolve("home").unwrap(), "/new");
    }

    #[test]
    fn test_insert_after_construction() {
        let mut routes = StaticRoutes::new();
        routes.insert("home", "/");

        assert_eq!(routes.len(), 1);
        assert_eq!(routes.resolve("home").unwrap(), "/");
    }

    #[test]
    fn test_absolute_urls_returned_verbatim() {
        let routes = StaticRoutes::new().with_route("home", "https://example.com/app/");

        assert_eq!(routes.resolve("home").unwrap(), "https://example.com/app/");
    }
}
