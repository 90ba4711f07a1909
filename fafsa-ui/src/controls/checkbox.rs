//! Checkbox control

use super::{FieldChrome, REQUIRED_MARKER, caller_classes, control_id};
use crate::html::{Attributes, escape_attr, escape_html};
use crate::variant::{VariantAxis, resolve};

const CHECKBOX_BASE: &str = "h-4 w-4 rounded border transition-colors focus:ring-2 focus:ring-offset-0 disabled:cursor-not-allowed disabled:opacity-50";
/// Check mark colour, resolved after the state fragment
const CHECK_COLOR: &str = "text-blue-600";
const LABEL_CLASSES: &str = "text-sm font-medium text-gray-700";

/// Parameters for rendering a checkbox
#[derive(Debug, Clone, Default)]
pub struct CheckboxParams<'a> {
    pub label: Option<&'a str>,
    /// Secondary line under the label
    pub description: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
    pub checked: bool,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders a checkbox with its label to the right.
pub fn checkbox(params: CheckboxParams<'_>) -> String {
    let CheckboxParams {
        label,
        description,
        error,
        helper_text,
        required,
        checked,
        mut attrs,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required,
    };

    let id = control_id(&attrs, label, "checkbox");
    attrs.set("id", id.as_str());
    if checked {
        attrs.set_flag("checked");
    }
    chrome.apply_aria(&id, &mut attrs);

    let overrides = caller_classes(class_name, &mut attrs);
    let class = resolve(
        CHECKBOX_BASE,
        &[chrome.state().class(), CHECK_COLOR],
        overrides.as_deref(),
    );

    let label_html = label
        .map(|label| {
            let required = if required { REQUIRED_MARKER } else { "" };
            format!(
                r#"<label for="{}" class="{}">{}</label>"#,
                escape_attr(&id),
                resolve(LABEL_CLASSES, &[required], None),
                escape_html(label)
            )
        })
        .unwrap_or_default();
    let description_html = description
        .map(|d| format!(r#"<p class="text-sm text-gray-500">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let message = chrome.render_message(&id);

    format!(
        r#"<div class="flex items-start gap-3"><div class="flex h-5 items-center"><input type="checkbox" class="{class}"{} /></div><div class="text-sm">{label_html}{description_html}{message}</div></div>"#,
        attrs.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_checkbox_with_description() {
        let html = checkbox(CheckboxParams {
            label: Some("I agree to the terms"),
            description: Some("You can withdraw consent at any time."),
            checked: true,
            attrs: Attributes::new().with("name", "consent"),
            ..Default::default()
        });

        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains(r#"id="consent""#));
        assert!(html.contains(" checked"));
        assert!(html.contains(r#"<label for="consent""#));
        assert!(html.contains("withdraw consent"));
    }

    #[test]
    fn test_unchecked_by_default() {
        let html = checkbox(CheckboxParams {
            label: Some("Subscribe"),
            ..Default::default()
        });

        assert!(!html.contains(" checked"));
        assert!(html.contains(r#"id="subscribe""#));
    }

    #[test]
    fn test_required_error_checkbox() {
        let html = checkbox(CheckboxParams {
            label: Some("Certify"),
            required: true,
            error: Some("You must certify"),
            helper_text: Some("Read carefully"),
            ..Default::default()
        });

        assert!(html.contains("after:content-['*']"));
        assert!(html.contains("You must certify"));
        assert!(html.contains("border-red-500"));
        assert!(!html.contains("Read carefully"));
    }
}
