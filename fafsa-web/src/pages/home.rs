//! Home page - hero, highlights and calls to action

use fafsa_ui::{
    Attributes, ButtonSize, ButtonStyle, ButtonVariant, FeatureCardParams, Icon, StatTone,
    StatsCardParams, feature_card, link_button, stats_card,
};

use super::layout::{grid, section};
use super::{Page, PageContext, render_page};

/// Renders the home page
pub fn home_page(ctx: &PageContext<'_>) -> String {
    let start = link_button(
        &ctx.href(Page::Apply.route()),
        ButtonStyle::new(ButtonVariant::Primary, ButtonSize::Lg),
        "Start your application",
        Attributes::new(),
    );
    let learn = link_button(
        &ctx.href(Page::Features.route()),
        ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Lg),
        "See how it works",
        Attributes::new().with("class", "border-white bg-white text-blue-700 hover:bg-blue-50"),
    );

    let hero = format!(
        r#"<div class="mb-16 rounded-2xl bg-gradient-to-br from-blue-700 to-blue-500 px-8 py-16 text-center text-white">
            <h1 class="mb-4 text-4xl font-bold md:text-5xl">Federal student aid, step by step</h1>
            <p class="mx-auto mb-8 max-w-2xl text-lg text-blue-100">Understand every question on the FAFSA, gather the right documents, and submit with confidence.</p>
            <div class="flex flex-col justify-center gap-4 sm:flex-row">{start}{learn}</div>
        </div>"#
    );

    let highlights = [
        FeatureCardParams {
            icon: Some(Icon::Clipboard),
            title: "Guided form",
            description: "Answer one section at a time with plain-language help on every field.",
            href: Some(&ctx.href(Page::Apply.route())),
            ..Default::default()
        },
        FeatureCardParams {
            icon: Some(Icon::Document),
            title: "Document checklist",
            description: "Know which tax records and IDs to have ready before you begin.",
            href: Some(&ctx.href(Page::Documents.route())),
            ..Default::default()
        },
        FeatureCardParams {
            icon: Some(Icon::Shield),
            title: "Private by default",
            description: "Nothing you type here leaves your browser until you choose to submit.",
            ..Default::default()
        },
    ]
    .map(feature_card)
    .concat();

    let stats = [
        StatsCardParams {
            value: "$120B+",
            label: "Federal aid awarded each year",
            ..Default::default()
        },
        StatsCardParams {
            value: "17M",
            label: "Students who file annually",
            ..Default::default()
        },
        StatsCardParams {
            value: "45",
            unit: Some("min"),
            label: "Typical time to complete",
            trend: Some("down from over an hour"),
            tone: StatTone::Positive,
            ..Default::default()
        },
    ]
    .map(stats_card)
    .concat();

    let content = format!(
        "{hero}{}{}",
        section(
            "Everything you need in one place",
            &grid("grid-cols-1 md:grid-cols-3", &highlights)
        ),
        section("Aid at a glance", &grid("grid-cols-1 sm:grid-cols-3", &stats))
    );

    render_page(ctx, "Home", Some(Page::Home), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fafsa_core::FafsaConfig;

    #[test]
    fn test_home_links_to_application() {
        let config = FafsaConfig::for_testing();
        let html = home_page(&PageContext::new(&config));

        assert!(html.contains(r#"<a href="/apply" class="#));
        assert!(html.contains("Start your application"));
        assert!(html.contains("Guided form"));
        assert!(html.contains("$120B+"));
        assert!(html.contains("text-green-600"));
    }

    #[test]
    fn test_home_under_base_path() {
        let config = FafsaConfig::for_static_export();
        let html = home_page(&PageContext::new(&config));

        assert!(html.contains(r#"href="/fafsa-guide/documents/""#));
        assert!(html.contains(r#"href="/fafsa-guide/features/""#));
    }
}
