//! Radio buttons and radio groups

use super::{FieldChrome, REQUIRED_MARKER, caller_classes, control_id};
use crate::html::{Attributes, escape_attr, escape_html, slugify};
use crate::variant::{VariantAxis, resolve};

const RADIO_BASE: &str = "h-4 w-4 border transition-colors focus:ring-2 focus:ring-offset-0 disabled:cursor-not-allowed disabled:opacity-50";
const RADIO_COLOR: &str = "text-blue-600";
const OPTION_LABEL: &str = "text-sm font-medium text-gray-700";
const LEGEND_BASE: &str = "mb-2 block text-sm font-medium text-gray-700";

crate::variant_axis! {
    /// Layout of the options inside a group.
    pub enum RadioOrientation {
        Vertical => ("vertical", "flex flex-col gap-2"),
        Horizontal => ("horizontal", "flex flex-row flex-wrap gap-6"),
    }
    default = Vertical;
}

/// Parameters for a single radio button
#[derive(Debug, Clone, Default)]
pub struct RadioParams<'a> {
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub checked: bool,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders one radio input with its label to the right and its message
/// under the description.
pub fn radio(params: RadioParams<'_>) -> String {
    render_radio(params, true)
}

/// Inside a group the fieldset owns the message, so options only take the
/// error styling.
fn render_radio(params: RadioParams<'_>, with_message: bool) -> String {
    let RadioParams {
        label,
        description,
        error,
        helper_text,
        checked,
        mut attrs,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required: false,
    };

    let id = control_id(&attrs, label, "radio");
    attrs.set("id", id.as_str());
    if checked {
        attrs.set_flag("checked");
    }
    let message = if with_message {
        chrome.apply_aria(&id, &mut attrs);
        chrome.render_message(&id)
    } else {
        if chrome.state().is_error() {
            attrs.set("aria-invalid", "true");
        }
        String::new()
    };

    let overrides = caller_classes(class_name, &mut attrs);
    let class = resolve(
        RADIO_BASE,
        &[chrome.state().class(), RADIO_COLOR],
        overrides.as_deref(),
    );

    let label_html = label
        .map(|label| {
            format!(
                r#"<label for="{}" class="{OPTION_LABEL}">{}</label>"#,
                escape_attr(&id),
                escape_html(label)
            )
        })
        .unwrap_or_default();
    let description_html = description
        .map(|d| format!(r#"<p class="text-sm text-gray-500">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-start gap-3"><div class="flex h-5 items-center"><input type="radio" class="{class}"{} /></div><div class="text-sm">{label_html}{description_html}{message}</div></div>"#,
        attrs.render()
    )
}

/// One choice in a [`radio_group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub description: Option<&'a str>,
    pub disabled: bool,
}

impl<'a> RadioOption<'a> {
    pub const fn new(value: &'a str, label: &'a str) -> Self {
        Self {
            value,
            label,
            description: None,
            disabled: false,
        }
    }
}

/// Parameters for a group of radios sharing one `name`
#[derive(Debug, Clone, Default)]
pub struct RadioGroupParams<'a> {
    /// Rendered as the fieldset legend
    pub label: Option<&'a str>,
    pub name: &'a str,
    pub options: &'a [RadioOption<'a>],
    pub selected: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
    pub orientation: RadioOrientation,
    pub class_name: Option<&'a str>,
}

/// Renders a `<fieldset>` of radios in option order.
///
/// The error message or helper text is attached to the fieldset, so the
/// individual radios carry no message of their own.
pub fn radio_group(params: RadioGroupParams<'_>) -> String {
    let RadioGroupParams {
        label,
        name,
        options,
        selected,
        error,
        helper_text,
        required,
        orientation,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required,
    };

    let group_id = {
        let slug = slugify(name);
        if slug.is_empty() {
            "radio-group".to_string()
        } else {
            slug
        }
    };

    let mut items = String::new();
    for option in options {
        let mut attrs = Attributes::new()
            .with("id", format!("{group_id}-{}", slugify(option.value)))
            .with("name", name)
            .with("value", option.value);
        if required {
            attrs.set_flag("required");
        }
        if option.disabled {
            attrs.set_flag("disabled");
        }
        items.push_str(&render_radio(
            RadioParams {
                label: Some(option.label),
                description: option.description,
                error,
                checked: selected == Some(option.value),
                attrs,
                ..Default::default()
            },
            false,
        ));
    }

    let legend = label
        .map(|label| {
            let required = if required { REQUIRED_MARKER } else { "" };
            format!(
                r#"<legend class="{}">{}</legend>"#,
                resolve(LEGEND_BASE, &[required], None),
                escape_html(label)
            )
        })
        .unwrap_or_default();

    let described_by = chrome
        .described_by(&group_id)
        .map(|id| format!(r#" aria-describedby="{}""#, escape_attr(&id)))
        .unwrap_or_default();
    let fieldset_class = resolve("w-full", &[], class_name);

    format!(
        r#"<fieldset id="{group_id}" class="{fieldset_class}"{described_by}>{legend}<div class="{}">{items}</div>{}</fieldset>"#,
        orientation.class(),
        chrome.render_message(&group_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPENDENCY: &[RadioOption<'static>] = &[
        RadioOption::new("dependent", "Dependent student"),
        RadioOption::new("independent", "Independent student"),
    ];

    #[test]
    fn test_single_radio() {
        let html = radio(RadioParams {
            label: Some("Yes"),
            checked: true,
            attrs: Attributes::new().with("id", "married-yes").with("name", "married"),
            ..Default::default()
        });

        assert!(html.contains(r#"type="radio""#));
        assert!(html.contains(r#"id="married-yes""#));
        assert!(html.contains(" checked"));
        assert!(html.contains(r#"<label for="married-yes""#));
    }

    #[test]
    fn test_group_selects_matching_option() {
        let html = radio_group(RadioGroupParams {
            label: Some("Dependency status"),
            name: "dependency_status",
            options: DEPENDENCY,
            selected: Some("independent"),
            ..Default::default()
        });

        assert!(html.starts_with("<fieldset"));
        assert!(html.contains("<legend"));
        assert!(html.contains(r#"id="dependency-status-independent" name="dependency_status" value="independent" checked"#));
        assert!(!html.contains(r#"value="dependent" checked"#));
        assert!(html.contains(RadioOrientation::Vertical.class()));
        assert!(html.find("Dependent student") < html.find("Independent student"));
    }

    #[test]
    fn test_group_error_replaces_helper() {
        let html = radio_group(RadioGroupParams {
            label: Some("Dependency status"),
            name: "dependency",
            options: DEPENDENCY,
            error: Some("Choose one"),
            helper_text: Some("See the dependency guide"),
            required: true,
            orientation: RadioOrientation::Horizontal,
            ..Default::default()
        });

        assert!(html.contains("Choose one"));
        assert!(html.contains(r#"aria-describedby="dependency-error""#));
        assert!(!html.contains("dependency guide"));
        assert!(html.contains("after:content-['*']"));
        assert!(html.contains("flex-row"));
        assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 2);
        assert_eq!(html.matches("Choose one").count(), 1);
        assert!(!html.contains(r#"aria-describedby="dependency-dependent-error""#));
    }

    #[test]
    fn test_single_radio_shows_its_error() {
        let html = radio(RadioParams {
            label: Some("Yes"),
            error: Some("Pick one"),
            helper_text: Some("Only if married"),
            attrs: Attributes::new().with("id", "married-yes").with("name", "married"),
            ..Default::default()
        });

        assert!(html.contains("Pick one"));
        assert!(html.contains(r#"id="married-yes-error""#));
        assert!(html.contains(r#"aria-describedby="married-yes-error""#));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(!html.contains("Only if married"));
    }

    #[test]
    fn test_single_radio_shows_helper_without_error() {
        let html = radio(RadioParams {
            label: Some("No"),
            helper_text: Some("Only if married"),
            attrs: Attributes::new().with("id", "married-no"),
            ..Default::default()
        });

        assert!(html.contains("Only if married"));
        assert!(html.contains(r#"aria-describedby="married-no-helper""#));
        assert!(!html.contains("aria-invalid"));
    }
}
