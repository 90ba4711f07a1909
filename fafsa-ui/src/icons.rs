//! Inline SVG icons (outline style, 24x24 viewBox)

/// Icons used by the components and pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    Info,
    CheckCircle,
    Warning,
    XCircle,
    QuestionCircle,
    ChevronDown,
    Close,
    Document,
    Calendar,
    Shield,
    Clipboard,
    Academic,
    Currency,
}

impl Icon {
    fn paths(self) -> &'static str {
        match self {
            Icon::AlertCircle => {
                r#"<circle cx="12" cy="12" r="9"></circle><path d="M12 8v4m0 4h.01"></path>"#
            }
            Icon::Info => {
                r#"<circle cx="12" cy="12" r="9"></circle><path d="M12 16v-4m0-4h.01"></path>"#
            }
            Icon::CheckCircle => {
                r#"<circle cx="12" cy="12" r="9"></circle><path d="M9 12l2 2 4-4"></path>"#
            }
            Icon::Warning => {
                r#"<path d="M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z"></path><path d="M12 9v4m0 4h.01"></path>"#
            }
            Icon::XCircle => {
                r#"<circle cx="12" cy="12" r="9"></circle><path d="M15 9l-6 6m0-6l6 6"></path>"#
            }
            Icon::QuestionCircle => {
                r#"<circle cx="12" cy="12" r="9"></circle><path d="M9.09 9a3 3 0 015.83 1c0 2-3 3-3 3m.08 4h.01"></path>"#
            }
            Icon::ChevronDown => r#"<path d="M6 9l6 6 6-6"></path>"#,
            Icon::Close => r#"<path d="M6 18L18 6M6 6l12 12"></path>"#,
            Icon::Document => {
                r#"<path d="M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8z"></path><path d="M14 2v6h6M16 13H8m8 4H8m2-8H8"></path>"#
            }
            Icon::Calendar => {
                r#"<rect x="3" y="4" width="18" height="18" rx="2"></rect><path d="M16 2v4M8 2v4M3 10h18"></path>"#
            }
            Icon::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path>"#,
            Icon::Clipboard => {
                r#"<path d="M16 4h2a2 2 0 012 2v14a2 2 0 01-2 2H6a2 2 0 01-2-2V6a2 2 0 012-2h2"></path><rect x="8" y="2" width="8" height="4" rx="1"></rect>"#
            }
            Icon::Academic => {
                r#"<path d="M22 10L12 5 2 10l10 5 10-5z"></path><path d="M6 12v5c3 3 9 3 12 0v-5"></path>"#
            }
            Icon::Currency => {
                r#"<path d="M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6"></path>"#
            }
        }
    }

    /// Renders the icon as decorative SVG (hidden from assistive technology).
    pub fn svg(self, class: &str) -> String {
        format!(
            r#"<svg class="{class}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" focusable="false">{}</svg>"#,
            self.paths()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_decorative() {
        let svg = Icon::AlertCircle.svg("h-4 w-4");
        assert!(svg.starts_with(r#"<svg class="h-4 w-4""#));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.ends_with("</svg>"));
    }
}
