//! Documents page - what to gather before starting

use fafsa_ui::html::escape_html;
use fafsa_ui::{AlertParams, AlertVariant, FeatureCardParams, Icon, alert, feature_card};

use super::layout::{grid, page_header, section};
use super::{Page, PageContext, render_page};

struct DocumentGroup {
    title: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const GROUPS: &[DocumentGroup] = &[
    DocumentGroup {
        title: "Identity",
        items: &[
            ("Social Security number", "Found on your Social Security card."),
            ("Driver's license number", "Only if you have one."),
            ("Alien registration number", "For eligible noncitizens."),
        ],
    },
    DocumentGroup {
        title: "Income and taxes",
        items: &[
            ("Federal tax return", "From two years before the award year."),
            ("W-2 forms", "One from each employer."),
            ("Records of untaxed income", "Child support received, veterans benefits and similar."),
        ],
    },
    DocumentGroup {
        title: "Assets",
        items: &[
            ("Bank statements", "Current balances of checking and savings accounts."),
            ("Investment records", "Stocks, bonds and real estate other than your home."),
        ],
    },
];

/// Renders the documents page
pub fn documents_page(ctx: &PageContext<'_>) -> String {
    let notice = alert(AlertParams {
        variant: AlertVariant::Warning,
        title: Some("Dependent students"),
        children: "If you are a dependent student you will need the same documents for your parents.",
        class_name: Some("mb-10"),
        ..Default::default()
    });

    let groups: String = GROUPS
        .iter()
        .map(|group| {
            let cards: String = group
                .items
                .iter()
                .map(|&(title, description)| {
                    feature_card(FeatureCardParams {
                        icon: Some(Icon::Document),
                        title,
                        description,
                        ..Default::default()
                    })
                })
                .collect();
            section(group.title, &grid("grid-cols-1 md:grid-cols-3", &cards))
        })
        .collect();

    let tip = alert(AlertParams {
        variant: AlertVariant::Info,
        title: Some("Ready?"),
        children: &format!(
            r#"Once everything is at hand, <a href="{}" class="font-medium underline">start the application</a>."#,
            escape_html(&ctx.href(Page::Apply.route()))
        ),
        ..Default::default()
    });

    let content = format!(
        "{}{notice}{groups}{tip}",
        page_header(
            "Documents to gather",
            Some("Having these ready turns a long evening into a short sitting."),
            None
        )
    );

    render_page(ctx, "Documents", Some(Page::Documents), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fafsa_core::FafsaConfig;

    #[test]
    fn test_documents_grouped_with_alerts() {
        let config = FafsaConfig::for_testing();
        let html = documents_page(&PageContext::new(&config));

        assert!(html.contains("Income and taxes"));
        assert!(html.contains("Driver&#39;s license number"));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"<a href="/apply" class="font-medium underline">"#));
    }
}
