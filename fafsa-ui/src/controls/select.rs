//! `<select>` control

use super::{FieldChrome, caller_classes, control_id, field_wrapper};
use crate::html::{Attributes, escape_attr, escape_html};
use crate::icons::Icon;
use crate::variant::{VariantAxis, resolve};

const SELECT_BASE: &str = "block h-10 w-full appearance-none rounded-md border bg-white py-2 pl-3 pr-10 text-base shadow-sm transition-colors focus:outline-none focus:ring-2 disabled:cursor-not-allowed disabled:bg-gray-100 disabled:opacity-60";

/// One `<option>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub disabled: bool,
}

impl<'a> SelectOption<'a> {
    pub const fn new(value: &'a str, label: &'a str) -> Self {
        Self {
            value,
            label,
            disabled: false,
        }
    }
}

/// Parameters for rendering a select field
#[derive(Debug, Clone, Default)]
pub struct SelectParams<'a> {
    pub label: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
    /// Rendered in this exact order
    pub options: &'a [SelectOption<'a>],
    /// Disabled first option with an empty value
    pub placeholder: Option<&'a str>,
    /// Value of the option to mark selected
    pub selected: Option<&'a str>,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders a labelled select with error or helper text.
pub fn select(params: SelectParams<'_>) -> String {
    let SelectParams {
        label,
        error,
        helper_text,
        required,
        options,
        placeholder,
        selected,
        mut attrs,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required,
    };

    let id = control_id(&attrs, label, "select");
    attrs.set("id", id.as_str());
    chrome.apply_aria(&id, &mut attrs);

    let overrides = caller_classes(class_name, &mut attrs);
    let class = resolve(SELECT_BASE, &[chrome.state().class()], overrides.as_deref());

    let has_selection = selected.is_some_and(|value| options.iter().any(|o| o.value == value));

    let mut options_html = String::new();
    if let Some(placeholder) = placeholder {
        let selected_attr = if has_selection { "" } else { " selected" };
        options_html.push_str(&format!(
            r#"<option value="" disabled{selected_attr}>{}</option>"#,
            escape_html(placeholder)
        ));
    }
    for option in options {
        let selected_attr = if selected == Some(option.value) {
            " selected"
        } else {
            ""
        };
        let disabled_attr = if option.disabled { " disabled" } else { "" };
        options_html.push_str(&format!(
            r#"<option value="{}"{selected_attr}{disabled_attr}>{}</option>"#,
            escape_attr(option.value),
            escape_html(option.label)
        ));
    }

    let control = format!(
        r#"<div class="relative"><select class="{class}"{}>{options_html}</select><span class="pointer-events-none absolute inset-y-0 right-0 flex items-center pr-3 text-gray-400">{}</span></div>"#,
        attrs.render(),
        Icon::ChevronDown.svg("h-4 w-4")
    );

    field_wrapper(&chrome.render_label(&id), &control, &chrome.render_message(&id))
}
