//! Document shell, navigation and shared page sections

use fafsa_ui::html::{escape_attr, escape_html};
use fafsa_ui::{Attributes, ButtonSize, ButtonStyle, ButtonVariant, TOOLTIP_SCRIPT, link_button};

use super::{Page, PageContext};

const SITE_NAME: &str = "FAFSA Guide";

/// Favicon path relative to the asset prefix.
pub const FAVICON_FILE: &str = "favicon.svg";
pub const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><rect width="32" height="32" rx="6" fill="#1d4ed8"/><path d="M16 7 3 13l13 6 13-6-13-6Zm-8 9v5c0 2 4 4 8 4s8-2 8-4v-5l-8 4-8-4Z" fill="#fff"/></svg>"##;

/// Renders a full HTML document around `content`.
///
/// `active` highlights a navigation entry; pages outside the navigation
/// (the 404 page) pass `None`.
pub fn render_page(
    ctx: &PageContext<'_>,
    title: &str,
    active: Option<Page>,
    content: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{} - {SITE_NAME}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="api-base" content="{}">
    <meta name="build-mode" content="{}">
    <link rel="icon" type="image/svg+xml" href="{}">
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.2s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="flex min-h-screen flex-col bg-gray-50 font-sans text-gray-900">
    {}
    <main id="main" class="mx-auto w-full max-w-6xl flex-1 px-4 py-10">
        {content}
    </main>
    {}
    <script>{TOOLTIP_SCRIPT}</script>
</body>
</html>"#,
        escape_html(title),
        escape_attr(ctx.api_base()),
        ctx.config.build.mode,
        escape_attr(&ctx.asset(FAVICON_FILE)),
        nav_bar(ctx, active),
        footer(ctx)
    )
}

/// Renders the top navigation bar.
pub fn nav_bar(ctx: &PageContext<'_>, active: Option<Page>) -> String {
    let items: String = Page::ALL
        .iter()
        .filter(|page| **page != Page::Apply)
        .map(|&page| {
            let (class, current) = if Some(page) == active {
                ("bg-blue-50 text-blue-700", r#" aria-current="page""#)
            } else {
                ("text-gray-600 hover:bg-gray-100 hover:text-gray-900", "")
            };
            format!(
                r#"<a href="{}" class="rounded-md px-3 py-2 text-sm font-medium transition-colors {class}"{current}>{}</a>"#,
                escape_attr(&ctx.href(page.route())),
                page.nav_label()
            )
        })
        .collect();

    let mut cta_attrs = Attributes::new();
    if active == Some(Page::Apply) {
        cta_attrs.set("aria-current", "page");
    }
    let cta = link_button(
        &ctx.href(Page::Apply.route()),
        ButtonStyle::new(ButtonVariant::Primary, ButtonSize::Sm),
        Page::Apply.nav_label(),
        cta_attrs,
    );

    format!(
        r#"<nav class="sticky top-0 z-40 border-b border-gray-200 bg-white">
        <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
            <div class="flex items-center gap-8">
                <a href="{}" class="text-xl font-bold text-blue-700">{SITE_NAME}</a>
                <div class="hidden gap-2 md:flex">{items}</div>
            </div>
            {cta}
        </div>
    </nav>"#,
        escape_attr(&ctx.href(Page::Home.route()))
    )
}

fn footer(ctx: &PageContext<'_>) -> String {
    let links: String = Page::ALL
        .iter()
        .map(|page| {
            format!(
                r#"<a href="{}" class="hover:text-gray-900">{}</a>"#,
                escape_attr(&ctx.href(page.route())),
                page.nav_label()
            )
        })
        .collect::<Vec<_>>()
        .join(r#"<span aria-hidden="true">&middot;</span>"#);

    format!(
        r#"<footer class="border-t border-gray-200 bg-white">
        <div class="mx-auto flex max-w-6xl flex-col gap-2 px-4 py-6 text-sm text-gray-500 md:flex-row md:justify-between">
            <p>An independent guide to the Free Application for Federal Student Aid.</p>
            <div class="flex gap-3">{links}</div>
        </div>
    </footer>"#
    )
}

/// Renders a page header with title, optional subtitle and actions.
pub fn page_header(title: &str, subtitle: Option<&str>, actions: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="mt-2 text-lg text-gray-600">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    let actions_html = actions
        .map(|a| format!(r#"<div class="flex items-center gap-3">{a}</div>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8 flex flex-col gap-4 md:flex-row md:items-start md:justify-between">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{}</h1>
                {subtitle_html}
            </div>
            {actions_html}
        </div>"#,
        escape_html(title)
    )
}

/// Renders a titled content section.
pub fn section(title: &str, content: &str) -> String {
    format!(
        r#"<section class="mb-12">
            <h2 class="mb-6 text-2xl font-semibold text-gray-900">{}</h2>
            {content}
        </section>"#,
        escape_html(title)
    )
}

/// Responsive grid; `columns` are Tailwind grid column classes.
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid gap-6 {columns}">{content}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fafsa_core::FafsaConfig;

    #[test]
    fn test_document_shell() {
        let config = FafsaConfig::for_testing();
        let ctx = PageContext::new(&config);
        let html = render_page(&ctx, "Home & more", Some(Page::Home), "<p>body</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home &amp; more - FAFSA Guide</title>"));
        assert!(html.contains(r#"<meta name="api-base" content="http://localhost:3001">"#));
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains("data-tooltip"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_nav_highlights_active_page() {
        let config = FafsaConfig::for_testing();
        let ctx = PageContext::new(&config);
        let nav = nav_bar(&ctx, Some(Page::Features));

        assert!(nav.contains(r#"href="/features" class="rounded-md px-3 py-2 text-sm font-medium transition-colors bg-blue-50 text-blue-700" aria-current="page""#));
        assert_eq!(nav.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_links_follow_base_path() {
        let config = FafsaConfig::for_static_export();
        let ctx = PageContext::new(&config);
        let html = render_page(&ctx, "Documents", Some(Page::Documents), "");

        assert!(html.contains(r#"href="/fafsa-guide/documents/""#));
        assert!(html.contains(r#"href="/fafsa-guide/apply/""#));
        assert!(html.contains(r#"href="/fafsa-guide/""#));
        assert!(!html.contains(r#"href="/features""#));
        assert!(html.contains(r#"<meta name="build-mode" content="export">"#));
    }

    #[test]
    fn test_not_found_shell_has_no_active_entry() {
        let config = FafsaConfig::for_testing();
        let ctx = PageContext::new(&config);
        let html = render_page(&ctx, "Not found", None, "");

        assert!(!html.contains("aria-current"));
    }
}
