//! Application page - the "Student information" step
//!
//! `GET /apply` renders an empty form. `POST /apply` (htmx) runs the checks
//! below and swaps the form for a re-rendered copy carrying per-field
//! errors, or a success alert when everything passed. Controls only display
//! the messages; all checking happens here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use fafsa_ui::{
    AlertParams, AlertVariant, Attributes, ButtonParams, ButtonSize, ButtonType, CheckboxParams,
    InputParams, InputType, RadioGroupParams, RadioOption, RadioOrientation, SelectOption,
    SelectParams, TextareaParams, TooltipPosition, alert, button, checkbox, help_tooltip, input,
    radio_group, select, textarea,
};
use regex::Regex;
use serde::Deserialize;

use super::layout::page_header;
use super::{Page, PageContext, render_page};

pub const FORM_ID: &str = "application-form";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

const STATES: &[SelectOption<'static>] = &[
    SelectOption::new("AL", "Alabama"),
    SelectOption::new("AK", "Alaska"),
    SelectOption::new("AZ", "Arizona"),
    SelectOption::new("AR", "Arkansas"),
    SelectOption::new("CA", "California"),
    SelectOption::new("CO", "Colorado"),
    SelectOption::new("CT", "Connecticut"),
    SelectOption::new("DE", "Delaware"),
    SelectOption::new("DC", "District of Columbia"),
    SelectOption::new("FL", "Florida"),
    SelectOption::new("GA", "Georgia"),
    SelectOption::new("HI", "Hawaii"),
    SelectOption::new("ID", "Idaho"),
    SelectOption::new("IL", "Illinois"),
    SelectOption::new("IN", "Indiana"),
    SelectOption::new("IA", "Iowa"),
    SelectOption::new("KS", "Kansas"),
    SelectOption::new("KY", "Kentucky"),
    SelectOption::new("LA", "Louisiana"),
    SelectOption::new("ME", "Maine"),
    SelectOption::new("MD", "Maryland"),
    SelectOption::new("MA", "Massachusetts"),
    SelectOption::new("MI", "Michigan"),
    SelectOption::new("MN", "Minnesota"),
    SelectOption::new("MS", "Mississippi"),
    SelectOption::new("MO", "Missouri"),
    SelectOption::new("MT", "Montana"),
    SelectOption::new("NE", "Nebraska"),
    SelectOption::new("NV", "Nevada"),
    SelectOption::new("NH", "New Hampshire"),
    SelectOption::new("NJ", "New Jersey"),
    SelectOption::new("NM", "New Mexico"),
    SelectOption::new("NY", "New York"),
    SelectOption::new("NC", "North Carolina"),
    SelectOption::new("ND", "North Dakota"),
    SelectOption::new("OH", "Ohio"),
    SelectOption::new("OK", "Oklahoma"),
    SelectOption::new("OR", "Oregon"),
    SelectOption::new("PA", "Pennsylvania"),
    SelectOption::new("RI", "Rhode Island"),
    SelectOption::new("SC", "South Carolina"),
    SelectOption::new("SD", "South Dakota"),
    SelectOption::new("TN", "Tennessee"),
    SelectOption::new("TX", "Texas"),
    SelectOption::new("UT", "Utah"),
    SelectOption::new("VT", "Vermont"),
    SelectOption::new("VA", "Virginia"),
    SelectOption::new("WA", "Washington"),
    SelectOption::new("WV", "West Virginia"),
    SelectOption::new("WI", "Wisconsin"),
    SelectOption::new("WY", "Wyoming"),
];

const DEPENDENCY: &[SelectOption<'static>] = &[
    SelectOption::new("dependent", "Dependent student"),
    SelectOption::new("independent", "Independent student"),
];

const ENROLLMENT: &[RadioOption<'static>] = &[
    RadioOption {
        value: "full_time",
        label: "Full time",
        description: Some("12 or more credit hours per term"),
        disabled: false,
    },
    RadioOption {
        value: "half_time",
        label: "Half time",
        description: Some("6 to 11 credit hours per term"),
        disabled: false,
    },
    RadioOption {
        value: "less_than_half_time",
        label: "Less than half time",
        description: None,
        disabled: false,
    },
];

/// Submitted values of the student information step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub state: String,
    pub dependency_status: String,
    pub enrollment: String,
    pub notes: String,
    /// Present only when the box was ticked
    pub certify: Option<String>,
}

/// Error message per field name, in field name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value.trim()))
}

/// Ten digits, or eleven with a leading country code 1. Punctuation is ignored.
fn is_us_phone(value: &str) -> bool {
    if value
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '-' | '.' | '(' | ')' | '+'))
    {
        return false;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => true,
        11 => digits.starts_with('1'),
        _ => false,
    }
}

impl ApplicationForm {
    /// Presence and format checks for every field.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if is_blank(&self.first_name) {
            errors.insert("first_name", "First name is required");
        }
        if is_blank(&self.last_name) {
            errors.insert("last_name", "Last name is required");
        }
        if is_blank(&self.email) {
            errors.insert("email", "Email is required");
        } else if !is_email(&self.email) {
            errors.insert("email", "Invalid email");
        }
        if is_blank(&self.phone) {
            errors.insert("phone", "Phone number is required");
        } else if !is_us_phone(&self.phone) {
            errors.insert("phone", "Enter a 10-digit US phone number");
        }
        if is_blank(&self.date_of_birth) {
            errors.insert("date_of_birth", "Date of birth is required");
        }
        if !STATES.iter().any(|s| s.value == self.state) {
            errors.insert("state", "Select your state of legal residence");
        }
        if !DEPENDENCY.iter().any(|d| d.value == self.dependency_status) {
            errors.insert("dependency_status", "Select your dependency status");
        }
        if !ENROLLMENT.iter().any(|e| e.value == self.enrollment) {
            errors.insert("enrollment", "Choose an enrollment plan");
        }
        if self.certify.is_none() {
            errors.insert("certify", "You must certify that your answers are accurate");
        }

        errors
    }
}

fn text_field(
    label: &'static str,
    name: &'static str,
    value: &str,
    input_type: InputType,
    errors: &FieldErrors,
    helper_text: Option<&'static str>,
) -> String {
    let mut attrs = Attributes::new().with("name", name).with("value", value);
    match input_type {
        InputType::Email => attrs.set("autocomplete", "email"),
        InputType::Tel => attrs.set("autocomplete", "tel"),
        _ => {}
    }
    input(InputParams {
        label: Some(label),
        error: errors.get(name),
        helper_text,
        required: true,
        input_type,
        attrs,
        ..Default::default()
    })
}

/// Renders the form alone, the htmx swap target.
///
/// `submitted` marks a POST round trip; it turns an empty error set into
/// the success alert.
pub fn apply_form(
    ctx: &PageContext<'_>,
    form: &ApplicationForm,
    errors: &FieldErrors,
    submitted: bool,
) -> String {
    let status = if !submitted {
        String::new()
    } else if errors.is_empty() {
        alert(AlertParams {
            variant: AlertVariant::Success,
            title: Some("Student information saved"),
            children: "Everything looks good. Continue to the dependency questions when you are ready.",
            class_name: Some("mb-6"),
            ..Default::default()
        })
    } else {
        let count = errors.len();
        let noun = if count == 1 { "field needs" } else { "fields need" };
        alert(AlertParams {
            variant: AlertVariant::Error,
            title: Some("Please review your answers"),
            children: &format!("{count} {noun} attention."),
            class_name: Some("mb-6"),
            ..Default::default()
        })
    };

    let static_notice = if ctx.is_static_export() {
        alert(AlertParams {
            variant: AlertVariant::Info,
            children: "This is a static preview. Answers are checked only when the guide runs with its server.",
            class_name: Some("mb-6"),
            ..Default::default()
        })
    } else {
        String::new()
    };

    let names = format!(
        r#"<div class="grid grid-cols-1 gap-6 md:grid-cols-2">{}{}</div>"#,
        text_field("First name", "first_name", &form.first_name, InputType::Text, errors, None),
        text_field("Last name", "last_name", &form.last_name, InputType::Text, errors, None),
    );
    let contact = format!(
        r#"<div class="grid grid-cols-1 gap-6 md:grid-cols-2">{}{}</div>"#,
        text_field(
            "Email",
            "email",
            &form.email,
            InputType::Email,
            errors,
            Some("We'll send your confirmation here"),
        ),
        text_field(
            "Phone",
            "phone",
            &form.phone,
            InputType::Tel,
            errors,
            Some("US numbers only"),
        ),
    );
    let date_of_birth = text_field(
        "Date of birth",
        "date_of_birth",
        &form.date_of_birth,
        InputType::Date,
        errors,
        None,
    );

    let residence = select(SelectParams {
        label: Some("State of legal residence"),
        error: errors.get("state"),
        required: true,
        options: STATES,
        placeholder: Some("Select a state"),
        selected: Some(form.state.as_str()),
        attrs: Attributes::new().with("name", "state"),
        ..Default::default()
    });
    let dependency = select(SelectParams {
        label: Some("Dependency status"),
        error: errors.get("dependency_status"),
        helper_text: Some("Not sure? The features page explains how it is decided."),
        required: true,
        options: DEPENDENCY,
        placeholder: Some("Select one"),
        selected: Some(form.dependency_status.as_str()),
        attrs: Attributes::new().with("name", "dependency_status"),
        ..Default::default()
    });

    let enrollment = radio_group(RadioGroupParams {
        label: Some("Enrollment plan"),
        name: "enrollment",
        options: ENROLLMENT,
        selected: Some(form.enrollment.as_str()),
        error: errors.get("enrollment"),
        required: true,
        orientation: RadioOrientation::Vertical,
        ..Default::default()
    });

    let notes = textarea(TextareaParams {
        label: Some("Anything else we should know?"),
        helper_text: Some("Optional. Special circumstances such as a recent job loss."),
        value: Some(form.notes.as_str()),
        resizable: true,
        attrs: Attributes::new().with("name", "notes"),
        ..Default::default()
    });

    let certify = checkbox(CheckboxParams {
        label: Some("I certify that this information is accurate"),
        description: Some("Giving false information can result in fines or loss of aid."),
        error: errors.get("certify"),
        required: true,
        checked: form.certify.is_some(),
        attrs: Attributes::new().with("name", "certify").with("value", "yes"),
        ..Default::default()
    });

    let submit = button(ButtonParams {
        button_type: ButtonType::Submit,
        size: ButtonSize::Lg,
        children: r#"Save and continue<span class="htmx-indicator">&hellip;</span>"#,
        ..Default::default()
    });

    let action = ctx.href(Page::Apply.route());

    format!(
        r##"<form id="{FORM_ID}" method="post" action="{action}" hx-post="{action}" hx-target="#{FORM_ID}" hx-swap="outerHTML" novalidate class="space-y-6 rounded-xl border border-gray-200 bg-white p-8 shadow-sm">
            {static_notice}{status}
            <div class="flex items-center gap-2">
                <h2 class="text-xl font-semibold text-gray-900">Student information</h2>
                {}
            </div>
            {names}
            {contact}
            {date_of_birth}
            {residence}
            {dependency}
            {enrollment}
            {notes}
            {certify}
            <div class="flex justify-end">{submit}</div>
        </form>"##,
        help_tooltip(
            "Answer for the student, even if a parent is filling this in.",
            TooltipPosition::Right
        )
    )
}

/// Renders the application page with an empty form
pub fn apply_page(ctx: &PageContext<'_>) -> String {
    apply_page_with(ctx, &ApplicationForm::default(), &FieldErrors::default(), false)
}

/// The application page with a submitted form in place, for browsers that
/// post without htmx.
pub fn apply_page_with(
    ctx: &PageContext<'_>,
    form: &ApplicationForm,
    errors: &FieldErrors,
    submitted: bool,
) -> String {
    let content = format!(
        r#"{}<div class="mx-auto max-w-3xl">{}</div>"#,
        page_header(
            "Start your application",
            Some("Step 1 of 4: tell us about the student."),
            None
        ),
        apply_form(ctx, form, errors, submitted)
    );

    render_page(ctx, "Start Application", Some(Page::Apply), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fafsa_core::FafsaConfig;

    fn complete_form() -> ApplicationForm {
        ApplicationForm {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            date_of_birth: "2006-04-12".to_string(),
            state: "NM".to_string(),
            dependency_status: "dependent".to_string(),
            enrollment: "full_time".to_string(),
            notes: String::new(),
            certify: Some("yes".to_string()),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(complete_form().validate().is_empty());
    }

    #[test]
    fn test_empty_form_flags_every_required_field() {
        let errors = ApplicationForm::default().validate();

        assert_eq!(errors.len(), 9);
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("notes"), None);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("student@college.edu"));
        assert!(is_email("  a.b+c@d.co "));
        assert!(!is_email("student@college"));
        assert!(!is_email("student college@x.edu"));
        assert!(!is_email("@college.edu"));

        let form = ApplicationForm {
            email: "not-an-email".to_string(),
            ..complete_form()
        };
        assert_eq!(form.validate().get("email"), Some("Invalid email"));
    }

    #[test]
    fn test_us_phone_digits() {
        assert!(is_us_phone("555-123-4567"));
        assert!(is_us_phone("+1 (555) 123-4567"));
        assert!(!is_us_phone("+2 (555) 123-4567"));
        assert!(!is_us_phone("555-1234"));
        assert!(!is_us_phone("555-123-456x"));
    }

    #[test]
    fn test_unknown_choices_are_rejected() {
        let form = ApplicationForm {
            state: "ZZ".to_string(),
            dependency_status: "both".to_string(),
            enrollment: "nightly".to_string(),
            ..complete_form()
        };
        let errors = form.validate();

        assert_eq!(errors.len(), 3);
        assert!(errors.get("state").is_some());
        assert!(errors.get("dependency_status").is_some());
        assert!(errors.get("enrollment").is_some());
    }

    #[test]
    fn test_rerender_keeps_values_and_shows_errors() {
        let config = FafsaConfig::for_testing();
        let ctx = PageContext::new(&config);
        let form = ApplicationForm {
            email: "ana@".to_string(),
            ..complete_form()
        };
        let errors = form.validate();
        let html = apply_form(&ctx, &form, &errors, true);

        assert!(html.contains("Invalid email"));
        assert!(html.contains(r#"value="ana@""#));
        assert!(html.contains(r#"<option value="NM" selected>New Mexico</option>"#));
        assert!(html.contains("1 field needs attention."));
        assert!(!html.contains("We&#39;ll send your confirmation here"));
        assert!(html.contains(r##"hx-target="#application-form""##));
    }

    #[test]
    fn test_success_alert_after_valid_submit() {
        let config = FafsaConfig::for_testing();
        let ctx = PageContext::new(&config);
        let html = apply_form(&ctx, &complete_form(), &FieldErrors::default(), true);

        assert!(html.contains(r#"role="status""#));
        assert!(html.contains("Student information saved"));
        assert!(!html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn test_page_starts_clean() {
        let config = FafsaConfig::for_testing();
        let html = apply_page(&PageContext::new(&config));

        assert!(!html.contains(r#"role="alert""#));
        assert!(html.contains("We&#39;ll send your confirmation here"));
        assert!(html.contains(r#"<option value="" disabled selected>Select a state</option>"#));
        assert!(html.contains(r#"hx-post="/apply""#));
    }

    #[test]
    fn test_static_preview_notice() {
        let config = FafsaConfig::for_static_export();
        let html = apply_page(&PageContext::new(&config));

        assert!(html.contains("static preview"));
        assert!(html.contains(r#"action="/fafsa-guide/apply/""#));
    }
}
