//! Feature and statistics cards

use crate::html::{escape_attr, escape_html};
use crate::icons::Icon;
use crate::variant::{VariantAxis, resolve};

const FEATURE_CARD: &str = "block rounded-xl border border-gray-200 bg-white p-6 shadow-sm transition-shadow hover:shadow-md";
const STATS_CARD: &str = "rounded-xl border border-gray-200 bg-white p-6 text-center shadow-sm";

/// Parameters for rendering a feature card
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureCardParams<'a> {
    pub icon: Option<Icon>,
    pub title: &'a str,
    pub description: &'a str,
    /// Makes the whole card a link
    pub href: Option<&'a str>,
    pub class_name: Option<&'a str>,
}

/// Renders a card presenting one feature of the guide.
///
/// With `href` the card is an `<a>` and gains a focus ring; otherwise it is
/// a plain `<div>`.
pub fn feature_card(params: FeatureCardParams<'_>) -> String {
    let icon_html = params
        .icon
        .map(|icon| {
            format!(
                r#"<div class="mb-4 inline-flex h-12 w-12 items-center justify-center rounded-lg bg-blue-100 text-blue-600">{}</div>"#,
                icon.svg("h-6 w-6")
            )
        })
        .unwrap_or_default();
    let body = format!(
        r#"{icon_html}<h3 class="mb-2 text-lg font-semibold text-gray-900">{}</h3><p class="text-sm text-gray-600">{}</p>"#,
        escape_html(params.title),
        escape_html(params.description)
    );

    match params.href {
        Some(href) => {
            let class = resolve(
                FEATURE_CARD,
                &["hover:border-blue-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500"],
                params.class_name,
            );
            format!(r#"<a href="{}" class="{class}">{body}</a>"#, escape_attr(href))
        }
        None => {
            let class = resolve(FEATURE_CARD, &[], params.class_name);
            format!(r#"<div class="{class}">{body}</div>"#)
        }
    }
}

crate::variant_axis! {
    /// Colour of a statistic's value.
    pub enum StatTone {
        Neutral => ("neutral", "text-gray-900"),
        Positive => ("positive", "text-green-600"),
        Negative => ("negative", "text-red-600"),
    }
    default = Neutral;
}

/// Parameters for rendering a statistics card
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsCardParams<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub unit: Option<&'a str>,
    /// Short note under the label, e.g. "+12% since 2023"
    pub trend: Option<&'a str>,
    pub tone: StatTone,
    pub class_name: Option<&'a str>,
}

/// Renders a statistics card with value, label, and optional trend.
pub fn stats_card(params: StatsCardParams<'_>) -> String {
    let unit_html = params
        .unit
        .map(|u| format!(r#"<span class="ml-1 text-sm text-gray-500">{}</span>"#, escape_html(u)))
        .unwrap_or_default();

    let trend_html = params
        .trend
        .map(|t| format!(r#"<div class="mt-1 text-xs text-gray-500">{}</div>"#, escape_html(t)))
        .unwrap_or_default();

    let value_class = resolve("mb-1 text-3xl font-bold", &[params.tone.class()], None);
    let class = resolve(STATS_CARD, &[], params.class_name);

    format!(
        r#"<div class="{class}"><div class="{value_class}">{}{unit_html}</div><div class="text-sm text-gray-600">{}</div>{trend_html}</div>"#,
        escape_html(params.value),
        escape_html(params.label)
    )
}
