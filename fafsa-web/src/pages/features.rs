//! Features page - what the guide helps with

use fafsa_ui::{FeatureCardParams, Icon, TooltipPosition, feature_card, help_tooltip};

use super::layout::{grid, page_header};
use super::{Page, PageContext, render_page};

struct Feature {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    help: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Clipboard,
        title: "Student information",
        description: "Name, contact details and state of legal residence, checked as you type.",
        help: "Use your name exactly as it appears on your Social Security card.",
    },
    Feature {
        icon: Icon::Academic,
        title: "Dependency status",
        description: "A short questionnaire that tells you whether parent information is required.",
        help: "Most undergraduates under 24 are dependent students.",
    },
    Feature {
        icon: Icon::Currency,
        title: "Financial information",
        description: "Where to find each tax figure and how the IRS data transfer fills them in.",
        help: "The FAFSA uses income from two years before the award year.",
    },
    Feature {
        icon: Icon::Calendar,
        title: "Deadlines",
        description: "Federal, state and school deadlines side by side so none slip by.",
        help: "Some state grants are first come, first served. File early.",
    },
    Feature {
        icon: Icon::Document,
        title: "Document checklist",
        description: "Tax returns, W-2s, bank statements and records of untaxed income.",
        help: "Keep copies of everything you submit.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Privacy",
        description: "Sensitive numbers stay in your browser until you submit them yourself.",
        help: "Never share your FSA ID with anyone, including this guide.",
    },
];

/// Renders the features page
pub fn features_page(ctx: &PageContext<'_>) -> String {
    let cards: String = FEATURES
        .iter()
        .map(|feature| {
            let card = feature_card(FeatureCardParams {
                icon: Some(feature.icon),
                title: feature.title,
                description: feature.description,
                class_name: Some("h-full"),
                ..Default::default()
            });
            format!(
                r#"<div class="relative">{card}<div class="absolute right-4 top-4">{}</div></div>"#,
                help_tooltip(feature.help, TooltipPosition::Left)
            )
        })
        .collect();

    let content = format!(
        "{}{}",
        page_header(
            "Features",
            Some("Every part of the application, explained before you need it."),
            None
        ),
        grid("grid-cols-1 md:grid-cols-2 lg:grid-cols-3", &cards)
    );

    render_page(ctx, "Features", Some(Page::Features), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fafsa_ui::VariantAxis;
    use fafsa_core::FafsaConfig;

    #[test]
    fn test_every_feature_has_help() {
        let config = FafsaConfig::for_testing();
        let html = features_page(&PageContext::new(&config));

        assert_eq!(html.matches(r#"role="tooltip""#).count(), FEATURES.len());
        assert!(html.contains("Dependency status"));
        assert!(html.contains(TooltipPosition::Left.class()));
    }
}
