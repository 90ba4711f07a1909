//! Buttons and button-styled links
//!
//! A button's look is a [`ButtonStyle`] (variant, size, full width).
//! [`button_classes`] turns a style into a class string that any element can
//! carry; [`button`] and [`link_button`] are the two elements rendered here.

use crate::html::{Attributes, escape_attr};
use crate::variant::{VariantAxis, join_classes, resolve};

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";
const FULL_WIDTH: &str = "w-full";

crate::variant_axis! {
    /// Colour scheme of a button.
    pub enum ButtonVariant {
        Primary => (
            "primary",
            "bg-blue-600 text-white hover:bg-blue-700 focus-visible:ring-blue-500"
        ),
        Secondary => (
            "secondary",
            "bg-gray-100 text-gray-900 hover:bg-gray-200 focus-visible:ring-gray-400"
        ),
        Ghost => (
            "ghost",
            "bg-transparent text-gray-700 hover:bg-gray-100 focus-visible:ring-gray-400"
        ),
        Danger => (
            "danger",
            "bg-red-600 text-white hover:bg-red-700 focus-visible:ring-red-500"
        ),
        Success => (
            "success",
            "bg-green-600 text-white hover:bg-green-700 focus-visible:ring-green-500"
        ),
        Accent => (
            "accent",
            "bg-amber-500 text-gray-900 hover:bg-amber-600 focus-visible:ring-amber-400"
        ),
        Outline => (
            "outline",
            "border border-gray-300 bg-transparent text-gray-900 hover:bg-gray-50 focus-visible:ring-gray-400"
        ),
    }
    default = Primary;
}

crate::variant_axis! {
    /// Height, padding and font size of a button.
    pub enum ButtonSize {
        Sm => ("sm", "h-8 px-3 text-sm"),
        Md => ("md", "h-10 px-4 text-sm"),
        Lg => ("lg", "h-12 px-6 text-base"),
        Xl => ("xl", "h-14 px-8 text-lg"),
    }
    default = Md;
}

/// Native `type` of a `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Visual configuration shared by buttons and button-styled elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl ButtonStyle {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            variant,
            size,
            full_width: false,
        }
    }

    #[must_use]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

/// Resolved class string for anything that should look like a button.
pub fn button_classes(style: &ButtonStyle, class_name: Option<&str>) -> String {
    let full_width = if style.full_width { FULL_WIDTH } else { "" };
    resolve(
        BUTTON_BASE,
        &[style.variant.class(), style.size.class(), full_width],
        class_name,
    )
}

/// Parameters for rendering a button
#[derive(Debug, Clone, Default)]
pub struct ButtonParams<'a> {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub button_type: ButtonType,
    pub disabled: bool,
    /// Inner HTML, inserted as-is
    pub children: &'a str,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

impl ButtonParams<'_> {
    pub fn style(&self) -> ButtonStyle {
        ButtonStyle {
            variant: self.variant,
            size: self.size,
            full_width: self.full_width,
        }
    }
}

/// Renders a native `<button>`.
pub fn button(params: ButtonParams<'_>) -> String {
    let style = params.style();
    let ButtonParams {
        button_type,
        disabled,
        children,
        mut attrs,
        class_name,
        ..
    } = params;

    attrs.remove("type");
    if disabled {
        attrs.set_flag("disabled");
    }
    let attr_class = attrs.take_class();
    let class = button_classes(&style, join_classes([class_name, attr_class.as_deref()]).as_deref());

    format!(
        r#"<button type="{}" class="{class}"{}>{children}</button>"#,
        button_type.as_str(),
        attrs.render()
    )
}

/// Renders an `<a>` with button styling.
pub fn link_button(href: &str, style: ButtonStyle, children: &str, mut attrs: Attributes) -> String {
    attrs.remove("href");
    let attr_class = attrs.take_class();
    let class = button_classes(&style, attr_class.as_deref());

    format!(
        r#"<a href="{}" class="{class}"{}>{children}</a>"#,
        escape_attr(href),
        attrs.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    fn has_all(class: &str, fragment: &str) -> bool {
        let present = tokens(class);
        fragment.split_whitespace().all(|t| present.contains(&t))
    }

    fn class_attr(html: &str) -> &str {
        let start = html.find(r#"class=""#).unwrap() + 7;
        let end = start + html[start..].find('"').unwrap();
        &html[start..end]
    }

    #[test]
    fn test_every_combination_carries_exactly_its_fragments() {
        for &variant in ButtonVariant::ALL {
            for &size in ButtonSize::ALL {
                for full_width in [false, true] {
                    let style = ButtonStyle {
                        variant,
                        size,
                        full_width,
                    };
                    let class = button_classes(&style, None);

                    assert!(has_all(&class, variant.class()), "{variant} {size}");
                    assert!(has_all(&class, size.class()), "{variant} {size}");
                    assert_eq!(tokens(&class).contains(&FULL_WIDTH), full_width);

                    for &other in ButtonVariant::ALL.iter().filter(|v| **v != variant) {
                        assert!(!has_all(&class, other.class()), "{variant} has {other}");
                    }
                    for &other in ButtonSize::ALL.iter().filter(|s| **s != size) {
                        assert!(!has_all(&class, other.class()), "{size} has {other}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_primary_md() {
        let html = button(ButtonParams {
            children: "Continue",
            ..Default::default()
        });

        assert!(html.starts_with(r#"<button type="button""#));
        assert!(has_all(class_attr(&html), ButtonVariant::Primary.class()));
        assert!(has_all(class_attr(&html), ButtonSize::Md.class()));
        assert!(!tokens(class_attr(&html)).contains(&"w-full"));
        assert!(html.ends_with(">Continue</button>"));
    }

    #[test]
    fn test_danger_large_delete() {
        let html = button(ButtonParams {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Lg,
            children: "Delete",
            ..Default::default()
        });
        let class = class_attr(&html);

        assert!(has_all(class, "bg-red-600 text-white hover:bg-red-700"));
        assert!(has_all(class, "h-12 px-6 text-base"));
        assert!(!class.contains("bg-blue-600"));
        assert!(html.contains(">Delete</button>"));
    }

    #[test]
    fn test_submit_disabled_with_attributes() {
        let html = button(ButtonParams {
            button_type: ButtonType::Submit,
            disabled: true,
            children: "Save",
            attrs: Attributes::new()
                .with("type", "reset")
                .with("name", "action")
                .with("class", "mt-4"),
            ..Default::default()
        });

        assert!(html.starts_with(r#"<button type="submit""#));
        assert!(!html.contains("reset"));
        assert!(html.contains(r#" name="action" disabled>"#));
        assert!(tokens(class_attr(&html)).contains(&"mt-4"));
    }

    #[test]
    fn test_caller_class_overrides_variant() {
        let class = button_classes(&ButtonStyle::default(), Some("bg-purple-600 px-10"));

        assert!(class.contains("bg-purple-600"));
        assert!(!class.contains("bg-blue-600 "));
        assert!(!class.contains("px-4"));
        assert!(class.ends_with("bg-purple-600 px-10"));
    }

    #[test]
    fn test_link_button_is_an_anchor() {
        let html = link_button(
            "/apply?step=1&lang=en",
            ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Xl).full_width(),
            "Start",
            Attributes::new().with("hx-boost", "true"),
        );

        assert!(html.starts_with(r#"<a href="/apply?step=1&amp;lang=en""#));
        assert!(!html.contains("<button"));
        assert!(has_all(class_attr(&html), ButtonVariant::Outline.class()));
        assert!(has_all(class_attr(&html), "h-14 px-8 text-lg w-full"));
        assert!(html.contains(r#" hx-boost="true">Start</a>"#));
    }
}
