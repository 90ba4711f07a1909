//! Full page renderers
//!
//! Pages compose components into complete HTML documents. Every page is a
//! plain function of a [`PageContext`]; the axum handlers and the static
//! export both call these functions.

pub mod apply;
pub mod documents;
pub mod features;
pub mod home;
pub mod layout;
pub mod not_found;

use fafsa_core::FafsaConfig;

// Re-export page renderers
pub use apply::{ApplicationForm, FieldErrors, apply_form, apply_page, apply_page_with};
pub use documents::documents_page;
pub use features::features_page;
pub use home::home_page;
pub use layout::{FAVICON_FILE, FAVICON_SVG, render_page};
pub use not_found::not_found_page;

/// Navigable pages of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Features,
    Apply,
    Documents,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Features, Page::Apply, Page::Documents];

    /// Route relative to the base path.
    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Features => "/features",
            Page::Apply => "/apply",
            Page::Documents => "/documents",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Apply => "Start Application",
            Page::Documents => "Documents",
        }
    }

    /// Renders the full document for this page.
    pub fn render(self, ctx: &PageContext<'_>) -> String {
        match self {
            Page::Home => home_page(ctx),
            Page::Features => features_page(ctx),
            Page::Apply => apply_page(ctx),
            Page::Documents => documents_page(ctx),
        }
    }
}

/// What a page needs to know about where it is served from.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a FafsaConfig,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a FafsaConfig) -> Self {
        Self { config }
    }

    /// Internal link honoring the base path and trailing slash policy.
    pub fn href(&self, route: &str) -> String {
        self.config.build.href(route)
    }

    /// Static asset URL.
    pub fn asset(&self, path: &str) -> String {
        self.config.build.asset(path)
    }

    pub fn api_base(&self) -> &str {
        &self.config.api.base_url
    }

    pub fn is_static_export(&self) -> bool {
        self.config.build.mode.is_static_export()
    }
}
