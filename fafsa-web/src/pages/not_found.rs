//! 404 page

use fafsa_ui::{Attributes, ButtonSize, ButtonStyle, ButtonVariant, Icon, link_button};

use super::{Page, PageContext, render_page};

/// Renders the not found page
pub fn not_found_page(ctx: &PageContext<'_>) -> String {
    let home = link_button(
        &ctx.href(Page::Home.route()),
        ButtonStyle::new(ButtonVariant::Primary, ButtonSize::Md),
        "Back to the guide",
        Attributes::new(),
    );

    let content = format!(
        r#"<div class="py-24 text-center">
            <div class="mb-6 inline-flex text-gray-300">{}</div>
            <h1 class="mb-4 text-3xl font-bold text-gray-900">Page not found</h1>
            <p class="mb-8 text-gray-600">The page you are looking for does not exist or has moved.</p>
            {home}
        </div>"#,
        Icon::QuestionCircle.svg("h-16 w-16")
    );

    render_page(ctx, "Page not found", None, &content)
}
