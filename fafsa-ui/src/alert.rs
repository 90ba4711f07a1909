//! Inline alerts

use crate::html::{Attributes, escape_html};
use crate::icons::Icon;
use crate::variant::{VariantAxis, join_classes, resolve};

const ALERT_BASE: &str = "flex items-start gap-3 rounded-lg border p-4 text-sm";

crate::variant_axis! {
    /// Background, border and text colour of an alert; see [`AlertVariant::icon`].
    pub enum AlertVariant {
        Info => ("info", "bg-blue-50 border-blue-200 text-blue-800"),
        Success => ("success", "bg-green-50 border-green-200 text-green-800"),
        Warning => ("warning", "bg-amber-50 border-amber-200 text-amber-800"),
        Error => ("error", "bg-red-50 border-red-200 text-red-800"),
    }
    default = Info;
}

impl AlertVariant {
    pub fn icon(self) -> Icon {
        match self {
            AlertVariant::Info => Icon::Info,
            AlertVariant::Success => Icon::CheckCircle,
            AlertVariant::Warning => Icon::Warning,
            AlertVariant::Error => Icon::XCircle,
        }
    }

    /// Problems interrupt screen readers, other messages wait their turn.
    pub fn role(self) -> &'static str {
        match self {
            AlertVariant::Error | AlertVariant::Warning => "alert",
            AlertVariant::Info | AlertVariant::Success => "status",
        }
    }
}

/// Parameters for rendering an alert
#[derive(Debug, Clone, Default)]
pub struct AlertParams<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    /// Body HTML, inserted as-is
    pub children: &'a str,
    /// Adds a close button that removes the alert
    pub dismissible: bool,
    pub attrs: Attributes,
    pub class_name: Option<&'a str>,
}

/// Renders an alert box with icon, optional title and body.
pub fn alert(params: AlertParams<'_>) -> String {
    let AlertParams {
        variant,
        title,
        children,
        dismissible,
        mut attrs,
        class_name,
    } = params;

    attrs.remove("role");
    let attr_class = attrs.take_class();
    let class = resolve(
        ALERT_BASE,
        &[variant.class()],
        join_classes([class_name, attr_class.as_deref()]).as_deref(),
    );

    let title_html = title
        .map(|t| format!(r#"<h3 class="mb-1 font-semibold">{}</h3>"#, escape_html(t)))
        .unwrap_or_default();

    let dismiss_button = if dismissible {
        format!(
            r#"<button type="button" class="ml-auto rounded p-1 opacity-70 hover:opacity-100" aria-label="Dismiss" onclick="this.closest('[data-alert]').remove()">{}</button>"#,
            Icon::Close.svg("h-4 w-4")
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="{class}" role="{}" data-alert="{variant}"{}>{}<div class="flex-1">{title_html}<div>{children}</div></div>{dismiss_button}</div>"#,
        variant.role(),
        attrs.render(),
        variant.icon().svg("h-5 w-5 flex-shrink-0")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_by_severity() {
        assert_eq!(AlertVariant::Error.role(), "alert");
        assert_eq!(AlertVariant::Warning.role(), "alert");
        assert_eq!(AlertVariant::Info.role(), "status");
        assert_eq!(AlertVariant::Success.role(), "status");
    }

    #[test]
    fn test_success_alert_with_title() {
        let html = alert(AlertParams {
            variant: AlertVariant::Success,
            title: Some("Saved <draft>"),
            children: "<p>Your information was saved.</p>",
            ..Default::default()
        });

        assert!(html.contains(r#"role="status""#));
        assert!(html.contains("bg-green-50 border-green-200 text-green-800"));
        assert!(html.contains("Saved &lt;draft&gt;"));
        assert!(html.contains("<p>Your information was saved.</p>"));
        assert!(!html.contains("Dismiss"));
    }

    #[test]
    fn test_default_is_info() {
        let html = alert(AlertParams {
            children: "Deadline is June 30",
            ..Default::default()
        });

        assert!(html.contains(AlertVariant::Info.class()));
        assert!(html.contains(r#"data-alert="info""#));
        assert!(!html.contains("<h3"));
    }

    #[test]
    fn test_dismissible_error_with_caller_classes() {
        let html = alert(AlertParams {
            variant: AlertVariant::Error,
            children: "Something went wrong",
            dismissible: true,
            attrs: Attributes::new().with("role", "note").with("id", "form-error"),
            class_name: Some("mt-6 p-6"),
            ..Default::default()
        });

        assert!(html.contains(r#"role="alert""#));
        assert!(!html.contains("note"));
        assert!(html.contains(r#"id="form-error""#));
        assert!(html.contains(r#"aria-label="Dismiss""#));
        assert!(html.contains("mt-6 p-6"));
        assert!(!html.contains(" p-4 "));
    }
}
