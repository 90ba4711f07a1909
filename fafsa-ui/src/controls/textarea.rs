//! Multi-line `<textarea>` control

use super::{FieldChrome, caller_classes, control_id, field_wrapper};
use crate::html::{Attributes, escape_html};
use crate::variant::{VariantAxis, resolve};

const TEXTAREA_BASE: &str = "block w-full rounded-md border bg-white px-3 py-2 text-base shadow-sm transition-colors placeholder:text-gray-400 focus:outline-none focus:ring-2 disabled:cursor-not-allowed disabled:bg-gray-100 disabled:opacity-60";

const DEFAULT_ROWS: u32 = 4;

/// Parameters for rendering a textarea
#[derive(Debug, Clone, Default)]
pub struct TextareaParams<'a> {
    pub label: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
    /// Visible rows, 4 when unset
    pub rows: Option<u32>,
    /// Let the user drag the height
    pub resizable: bool,
    /// Initial text content
    pub value: Option<&'a str>,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders a labelled textarea with error or helper text.
pub fn textarea(params: TextareaParams<'_>) -> String {
    let TextareaParams {
        label,
        error,
        helper_text,
        required,
        rows,
        resizable,
        value,
        mut attrs,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required,
    };

    let id = control_id(&attrs, label, "textarea");
    attrs.set("id", id.as_str());
    attrs.set("rows", rows.unwrap_or(DEFAULT_ROWS).to_string());
    chrome.apply_aria(&id, &mut attrs);

    let resize = if resizable { "resize-y" } else { "resize-none" };
    let overrides = caller_classes(class_name, &mut attrs);
    let class = resolve(
        TEXTAREA_BASE,
        &[resize, chrome.state().class()],
        overrides.as_deref(),
    );

    let control = format!(
        r#"<textarea class="{class}"{}>{}</textarea>"#,
        attrs.render(),
        escape_html(value.unwrap_or_default())
    );

    field_wrapper(&chrome.render_label(&id), &control, &chrome.render_message(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows_and_resize() {
        let html = textarea(TextareaParams {
            label: Some("Notes"),
            ..Default::default()
        });

        assert!(html.contains(r#"rows="4""#));
        assert!(html.contains("resize-none"));
        assert!(html.contains(r#"id="notes""#));
    }

    #[test]
    fn test_value_is_escaped_content() {
        let html = textarea(TextareaParams {
            value: Some("</textarea><script>"),
            rows: Some(6),
            resizable: true,
            ..Default::default()
        });

        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;</textarea>"));
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains("resize-y"));
    }

    #[test]
    fn test_error_and_helper_never_render_together() {
        let html = textarea(TextareaParams {
            error: Some("Tell us more"),
            helper_text: Some("Optional"),
            ..Default::default()
        });

        assert!(html.contains("Tell us more"));
        assert!(html.contains("border-red-500"));
        assert!(!html.contains("Optional"));
    }
}
