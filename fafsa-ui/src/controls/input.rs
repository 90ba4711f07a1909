//! Text-like `<input>` control

use super::{FieldChrome, caller_classes, control_id, field_wrapper};
use crate::html::Attributes;
use crate::variant::{VariantAxis, resolve};

const INPUT_BASE: &str = "block w-full rounded-md border bg-white shadow-sm transition-colors placeholder:text-gray-400 focus:outline-none focus:ring-2 disabled:cursor-not-allowed disabled:bg-gray-100 disabled:opacity-60";

/// Native input types the control supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    Date,
    Password,
    Search,
    Url,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Password => "password",
            InputType::Search => "search",
            InputType::Url => "url",
        }
    }
}

crate::variant_axis! {
    /// Height, padding and font size of the input.
    pub enum InputSize {
        Sm => ("sm", "h-8 px-2 text-sm"),
        Md => ("md", "h-10 px-3 text-base"),
        Lg => ("lg", "h-12 px-4 text-lg"),
    }
    default = Md;
}

/// Parameters for rendering an input field
#[derive(Debug, Clone, Default)]
pub struct InputParams<'a> {
    pub label: Option<&'a str>,
    pub error: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub required: bool,
    pub input_type: InputType,
    pub size: InputSize,
    /// Pass-through native attributes (`id`, `name`, `value`, `placeholder`, ...)
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders a labelled input with error or helper text.
pub fn input(params: InputParams<'_>) -> String {
    let InputParams {
        label,
        error,
        helper_text,
        required,
        input_type,
        size,
        mut attrs,
        class_name,
    } = params;
    let chrome = FieldChrome {
        label,
        error,
        helper_text,
        required,
    };

    let id = control_id(&attrs, label, "input");
    attrs.set("id", id.as_str());
    chrome.apply_aria(&id, &mut attrs);

    let overrides = caller_classes(class_name, &mut attrs);
    let class = resolve(
        INPUT_BASE,
        &[size.class(), chrome.state().class()],
        overrides.as_deref(),
    );

    let control = format!(
        r#"<input type="{}" class="{class}"{} />"#,
        input_type.as_str(),
        attrs.render()
    );

    field_wrapper(&chrome.render_label(&id), &control, &chrome.render_message(&id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::FieldState;

    #[test]
    fn test_email_input_with_error() {
        let html = input(InputParams {
            label: Some("Email"),
            required: true,
            error: Some("Invalid email"),
            helper_text: Some("We'll send your confirmation here"),
            input_type: InputType::Email,
            attrs: Attributes::new().with("name", "email"),
            ..Default::default()
        });

        assert!(html.contains(">Email</label>"));
        assert!(html.contains("after:content-['*']"));
        assert!(html.contains("border-red-500"));
        assert!(html.contains("Invalid email"));
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains(r#"aria-describedby="email-error""#));
        assert!(!html.contains("confirmation"));
        assert!(html.contains(r#"type="email""#));
    }

    #[test]
    fn test_neutral_input_shows_helper_text() {
        let html = input(InputParams {
            label: Some("Phone"),
            helper_text: Some("Digits only"),
            attrs: Attributes::new().with("id", "phone"),
            ..Default::default()
        });

        assert!(html.contains("Digits only"));
        assert!(html.contains(FieldState::Neutral.class()));
        assert!(!html.contains("border-red-500"));
        assert!(!html.contains("aria-invalid"));
    }

    #[test]
    fn test_caller_class_overrides_size_padding() {
        let html = input(InputParams {
            size: InputSize::Lg,
            class_name: Some("px-6"),
            attrs: Attributes::new().with("class", "mt-2").with("name", "q"),
            ..Default::default()
        });

        assert!(html.contains("px-6"));
        assert!(!html.contains("px-4"));
        assert!(html.contains("mt-2"));
        assert!(html.contains("h-12"));
        assert!(!html.contains(r#" class="mt-2""#));
    }

    #[test]
    fn test_pass_through_attributes_are_escaped() {
        let html = input(InputParams {
            attrs: Attributes::new()
                .with("name", "first_name")
                .with("value", "<b>Ana</b>")
                .flag("disabled"),
            ..Default::default()
        });

        assert!(html.contains(r#"value="&lt;b>Ana&lt;/b>""#));
        assert!(html.contains(" disabled"));
        assert!(html.contains(r#"id="first_name""#));
        assert!(html.contains(r#"name="first_name""#));
    }
}
