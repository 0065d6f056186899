//! Home link and breadcrumb rendering.
//!
//! [`HomeLink`] makes one decision per call: no route configured renders
//! nothing, a route that fails to resolve renders a label without a link,
//! and a resolved route renders an anchor. The two Bootstrap flavors are
//! formatted from the same structured [`Breadcrumb`].

use std::sync::Arc;

use homelink_config::Config;
use homelink_routes::RouteResolver;

use crate::html::escape_html;

/// A single breadcrumb entry for the project home page.
///
/// `url` is `None` when the configured route did not resolve; the HTML
/// flavors then render the label without a hyperlink. JSON frontends can
/// serialize this directly (enable the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Breadcrumb {
    /// Display label.
    pub label: String,
    /// Link target, if the home route resolved.
    pub url: Option<String>,
}

/// Home page link and breadcrumb helpers.
///
/// Holds the configured home route name, the project-wide default label,
/// and a shared [`RouteResolver`]. All rendering methods are cheap and
/// side-effect free; construct once at startup and share.
pub struct HomeLink {
    route: Option<String>,
    label: String,
    resolver: Arc<dyn RouteResolver>,
}

impl HomeLink {
    /// Create helpers from explicit configuration values.
    ///
    /// `route` is the named route of the project home page; `None` disables
    /// all output. `label` is the default used when a caller supplies none.
    #[must_use]
    pub fn new(
        route: Option<String>,
        label: impl Into<String>,
        resolver: Arc<dyn RouteResolver>,
    ) -> Self {
        Self {
            route,
            label: label.into(),
            resolver,
        }
    }

    /// Create helpers from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config, resolver: Arc<dyn RouteResolver>) -> Self {
        Self::new(config.home.route.clone(), config.home.label.clone(), resolver)
    }

    /// URL of the project home page.
    ///
    /// Returns the resolved URL, or an empty string when no home route is
    /// configured or the lookup fails. The value is not HTML-escaped; it is
    /// meant for attribute/value positions chosen by the caller.
    #[must_use]
    pub fn home_url(&self) -> String {
        self.resolve_home().unwrap_or_default()
    }

    /// Structured home breadcrumb.
    ///
    /// Returns `None` when no home route is configured. Otherwise the
    /// breadcrumb carries the effective label (caller-supplied over the
    /// configured default) and the resolved URL, if any.
    #[must_use]
    pub fn crumb(&self, label: Option<&str>) -> Option<Breadcrumb> {
        self.route.as_ref()?;
        Some(Breadcrumb {
            label: label.unwrap_or(&self.label).to_owned(),
            url: self.resolve_home(),
        })
    }

    /// Bootstrap 3 breadcrumb list item for the home page.
    ///
    /// Renders `<li><a href="URL">LABEL</a></li>` when the home route
    /// resolves, `<li>LABEL</li>` when it does not, and nothing when no home
    /// route is configured.
    #[must_use]
    pub fn breadcrumb_bs3(&self, label: Option<&str>) -> String {
        match self.crumb(label) {
            Some(Breadcrumb {
                label,
                url: Some(url),
            }) => format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&url),
                escape_html(&label)
            ),
            Some(Breadcrumb { label, url: None }) => {
                format!("<li>{}</li>", escape_html(&label))
            }
            None => String::new(),
        }
    }

    /// Bootstrap 4 breadcrumb list item for the home page.
    ///
    /// Same dispatch as [`breadcrumb_bs3`](Self::breadcrumb_bs3) with
    /// Bootstrap 4 classes on the `<li>`.
    #[must_use]
    pub fn breadcrumb_bs4(&self, label: Option<&str>) -> String {
        match self.crumb(label) {
            Some(Breadcrumb {
                label,
                url: Some(url),
            }) => format!(
                r#"<li class="breadcrumb-item" aria-label="breadcrumb"><a href="{}">{}</a></li>"#,
                escape_html(&url),
                escape_html(&label)
            ),
            Some(Breadcrumb { label, url: None }) => format!(
                r#"<li class="breadcrumb-item" aria-label="breadcrumb">{}</li>"#,
                escape_html(&label)
            ),
            None => String::new(),
        }
    }

    /// Resolve the configured home route, swallowing lookup failures.
    fn resolve_home(&self) -> Option<String> {
        let route = self.route.as_deref()?;
        match self.resolver.resolve(route) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(route = %route, error = %e, "Home route did not resolve");
                None
            }
        }
    }
}
