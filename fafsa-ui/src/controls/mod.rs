//! Form controls
//!
//! Every control wraps one native element and adds the same chrome: an
//! optional label (with a CSS required marker), and beneath the element
//! either the error message with an alert icon or the helper text, never
//! both. Controls do not validate anything; callers compute the error
//! message and pass it in.

pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use checkbox::{CheckboxParams, checkbox};
pub use input::{InputParams, InputSize, InputType, input};
pub use radio::{RadioGroupParams, RadioOption, RadioOrientation, RadioParams, radio, radio_group};
pub use select::{SelectOption, SelectParams, select};
pub use textarea::{TextareaParams, textarea};

use crate::html::{Attributes, escape_attr, escape_html, slugify};
use crate::icons::Icon;
use crate::variant::join_classes;

crate::variant_axis! {
    /// Visual state of a control. Neutral until an error message is present.
    pub enum FieldState {
        Neutral => (
            "neutral",
            "border-gray-300 text-gray-900 focus:border-blue-600 focus:ring-blue-600"
        ),
        Error => (
            "error",
            "border-red-500 text-red-900 focus:border-red-500 focus:ring-red-500"
        ),
    }
    default = Neutral;
}

impl FieldState {
    /// Error iff the message is present and not blank.
    pub fn from_error(error: Option<&str>) -> Self {
        match error {
            Some(message) if !message.trim().is_empty() => FieldState::Error,
            _ => FieldState::Neutral,
        }
    }

    pub fn is_error(self) -> bool {
        self == FieldState::Error
    }
}

/// Classes marking a label as required. CSS only, no DOM attribute.
pub const REQUIRED_MARKER: &str = "after:ml-0.5 after:text-red-600 after:content-['*']";

const LABEL_BASE: &str = "mb-1 block text-sm font-medium text-gray-700";
const ERROR_MESSAGE: &str = "mt-1 flex items-center gap-1 text-sm text-red-600";
const HELPER_MESSAGE: &str = "mt-1 text-sm text-gray-500";

/// Label, error and helper text shared by all controls.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldChrome<'a> {
    pub label: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
}

impl<'a> FieldChrome<'a> {
    pub fn state(&self) -> FieldState {
        FieldState::from_error(self.error)
    }

    /// Error message to show, if the field is in the error state.
    fn error_message(&self) -> Option<&'a str> {
        self.error.filter(|e| !e.trim().is_empty())
    }

    /// Helper text to show; suppressed while an error is shown.
    fn helper_message(&self) -> Option<&'a str> {
        if self.state().is_error() {
            return None;
        }
        self.helper_text.filter(|h| !h.trim().is_empty())
    }

    pub fn error_id(id: &str) -> String {
        format!("{id}-error")
    }

    pub fn helper_id(id: &str) -> String {
        format!("{id}-helper")
    }

    /// Id of the message element the control should be described by.
    pub fn described_by(&self, id: &str) -> Option<String> {
        if self.error_message().is_some() {
            Some(Self::error_id(id))
        } else if self.helper_message().is_some() {
            Some(Self::helper_id(id))
        } else {
            None
        }
    }

    pub fn label_classes(&self, extra: &str) -> String {
        let required = if self.required { REQUIRED_MARKER } else { "" };
        crate::variant::resolve(LABEL_BASE, &[required], Some(extra))
    }

    /// `<label for=id>` or nothing when there is no label.
    pub fn render_label(&self, id: &str) -> String {
        self.label
            .map(|label| {
                format!(
                    r#"<label for="{}" class="{}">{}</label>"#,
                    escape_attr(id),
                    self.label_classes(""),
                    escape_html(label)
                )
            })
            .unwrap_or_default()
    }

    /// Error message with icon, or helper text, or nothing.
    pub fn render_message(&self, id: &str) -> String {
        if let Some(error) = self.error_message() {
            return format!(
                r#"<p id="{}" class="{ERROR_MESSAGE}" role="alert">{}<span>{}</span></p>"#,
                escape_attr(&Self::error_id(id)),
                Icon::AlertCircle.svg("h-4 w-4 flex-shrink-0"),
                escape_html(error)
            );
        }
        self.helper_message()
            .map(|helper| {
                format!(
                    r#"<p id="{}" class="{HELPER_MESSAGE}">{}</p>"#,
                    escape_attr(&Self::helper_id(id)),
                    escape_html(helper)
                )
            })
            .unwrap_or_default()
    }

    /// Adds `aria-invalid` and `aria-describedby` to the control's attributes.
    pub fn apply_aria(&self, id: &str, attrs: &mut Attributes) {
        if self.state().is_error() {
            attrs.set("aria-invalid", "true");
        }
        if let Some(described_by) = self.described_by(id) {
            attrs.set("aria-describedby", described_by);
        }
    }
}

/// Resolves the element id the label and messages point at: `id`, then
/// `name`, then a slug of the label, then `fallback`. Returned unescaped.
pub(crate) fn control_id(attrs: &Attributes, label: Option<&str>, fallback: &str) -> String {
    attrs
        .get("id")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| {
            attrs
                .get("name")
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .or_else(|| label.map(slugify).filter(|slug| !slug.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Caller classes from the props and from a `class` pass-through attribute.
pub(crate) fn caller_classes(class_name: Option<&str>, attrs: &mut Attributes) -> Option<String> {
    let attr_class = attrs.take_class();
    join_classes([class_name, attr_class.as_deref()])
}

/// Stacks label, control and message in the field wrapper.
pub(crate) fn field_wrapper(label: &str, control: &str, message: &str) -> String {
    format!(r#"<div class="w-full">{label}{control}{message}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome<'a>(error: Option<&'a str>, helper_text: Option<&'a str>) -> FieldChrome<'a> {
        FieldChrome {
            label: Some("Email"),
            error,
            helper_text,
            required: true,
        }
    }

    #[test]
    fn test_state_transitions_follow_error_message() {
        assert_eq!(FieldState::from_error(None), FieldState::Neutral);
        assert_eq!(FieldState::from_error(Some("")), FieldState::Neutral);
        assert_eq!(FieldState::from_error(Some("  ")), FieldState::Neutral);
        assert_eq!(FieldState::from_error(Some("Required")), FieldState::Error);
    }

    #[test]
    fn test_error_suppresses_helper_text() {
        let field = chrome(Some("Invalid email"), Some("We never share it"));
        let message = field.render_message("email");

        assert!(message.contains("Invalid email"));
        assert!(message.contains(r#"id="email-error""#));
        assert!(!message.contains("We never share it"));
        assert_eq!(field.described_by("email"), Some("email-error".to_string()));
    }

    #[test]
    fn test_helper_text_without_error() {
        let field = chrome(Some(""), Some("We never share it"));
        let message = field.render_message("email");

        assert!(message.contains("We never share it"));
        assert!(!message.contains("text-red-600"));
        assert_eq!(field.described_by("email"), Some("email-helper".to_string()));
    }

    #[test]
    fn test_required_marker_is_css_only() {
        let label = chrome(None, None).render_label("email");

        assert!(label.contains("after:content-['*']"));
        assert!(label.contains(">Email</label>"));
        assert!(!label.contains("required"));
    }

    #[test]
    fn test_control_id_fallbacks() {
        let with_id = Attributes::new().with("id", "ssn").with("name", "ssn_field");
        assert_eq!(control_id(&with_id, Some("SSN"), "input"), "ssn");

        let with_name = Attributes::new().with("name", "first_name");
        assert_eq!(control_id(&with_name, Some("First"), "input"), "first_name");

        let none = Attributes::new();
        assert_eq!(control_id(&none, Some("Date of Birth"), "input"), "date-of-birth");
        assert_eq!(control_id(&none, None, "input"), "input");
    }
}
