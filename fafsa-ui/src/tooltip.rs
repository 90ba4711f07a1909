//! Tooltips with an explicit open/closed state
//!
//! The markup reveals itself through `group-hover` and `group-focus-within`
//! so it works without script. [`TOOLTIP_SCRIPT`] layers the
//! [`TooltipState`] machine on top, keeping `data-state` in sync and
//! honouring Escape.

use crate::html::{escape_attr, escape_html, slugify};
use crate::icons::Icon;
use crate::variant::{VariantAxis, resolve};

const WRAPPER: &str = "group relative inline-flex items-center";
const TRIGGER: &str = "inline-flex cursor-help items-center rounded-full text-gray-400 hover:text-gray-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500";
const CONTENT_BASE: &str = "pointer-events-none absolute z-50 whitespace-nowrap rounded bg-gray-900 px-2 py-1 text-xs text-white shadow-lg transition-opacity";
const ARROW_BASE: &str = "absolute h-2 w-2 rotate-45 bg-gray-900";
const REVEAL_CLOSED: &str = "invisible opacity-0 group-hover:visible group-hover:opacity-100 group-focus-within:visible group-focus-within:opacity-100";
const REVEAL_OPEN: &str = "visible opacity-100";
const MAX_ID_LEN: usize = 40;

crate::variant_axis! {
    /// Side of the trigger the tooltip appears on.
    pub enum TooltipPosition {
        Top => ("top", "bottom-full left-1/2 -translate-x-1/2 mb-2"),
        Bottom => ("bottom", "top-full inset-x-0 mx-auto w-max mt-2"),
        Left => ("left", "right-full top-1/2 -translate-y-1/2 mr-2"),
        Right => ("right", "left-full inset-y-0 my-auto h-max ml-2"),
    }
    default = Top;
}

impl TooltipPosition {
    /// Placement of the arrow on the edge facing the trigger.
    pub fn arrow_class(self) -> &'static str {
        match self {
            TooltipPosition::Top => "-bottom-1 left-1/2 -ml-1",
            TooltipPosition::Bottom => "-top-1 inset-x-0 mx-auto",
            TooltipPosition::Left => "-right-1 top-1/2 -mt-1",
            TooltipPosition::Right => "-left-1 inset-y-0 my-auto",
        }
    }
}

/// Input that can change a tooltip's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    Escape,
}

/// Hover and focus are tracked separately; the tooltip is open while either
/// holds, unless Escape dismissed it. A dismissal lasts until both end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipState {
    hovered: bool,
    focused: bool,
    dismissed: bool,
}

impl TooltipState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// State of a tooltip rendered already visible.
    pub fn open() -> Self {
        Self {
            hovered: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn apply(self, event: TooltipEvent) -> Self {
        let mut next = self;
        match event {
            TooltipEvent::PointerEnter => next.hovered = true,
            TooltipEvent::PointerLeave => next.hovered = false,
            TooltipEvent::FocusIn => next.focused = true,
            TooltipEvent::FocusOut => next.focused = false,
            TooltipEvent::Escape => next.dismissed = next.hovered || next.focused,
        }
        if !next.hovered && !next.focused {
            next.dismissed = false;
        }
        next
    }

    pub fn is_open(self) -> bool {
        (self.hovered || self.focused) && !self.dismissed
    }

    /// Value for the `data-state` attribute.
    pub fn data_state(self) -> &'static str {
        if self.is_open() { "open" } else { "closed" }
    }
}

/// Parameters for rendering a tooltip around a trigger
#[derive(Debug, Clone, Default)]
pub struct TooltipParams<'a> {
    /// Tooltip text, escaped
    pub content: &'a str,
    /// Trigger inner HTML, inserted as-is
    pub trigger: &'a str,
    /// Accessible name of the trigger when it has no text of its own
    pub trigger_label: Option<&'a str>,
    pub position: TooltipPosition,
    pub state: TooltipState,
    /// Id of the content element; derived from the text when unset
    pub id: Option<&'a str>,
    pub class_name: Option<&'a str>,
}

fn tooltip_id(content: &str) -> String {
    let slug = slugify(content);
    let mut end = slug.len().min(MAX_ID_LEN);
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let slug = slug[..end].trim_end_matches('-');
    if slug.is_empty() {
        "tooltip".to_string()
    } else {
        format!("tooltip-{slug}")
    }
}

/// Renders a focusable trigger with its tooltip content.
pub fn tooltip(params: TooltipParams<'_>) -> String {
    let TooltipParams {
        content,
        trigger,
        trigger_label,
        position,
        state,
        id,
        class_name,
    } = params;

    let id = id
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| tooltip_id(content));
    let data_state = state.data_state();
    let reveal = if state.is_open() {
        REVEAL_OPEN
    } else {
        REVEAL_CLOSED
    };

    let aria_label = trigger_label
        .map(|label| format!(r#" aria-label="{}""#, escape_attr(label)))
        .unwrap_or_default();
    let wrapper_class = resolve(WRAPPER, &[], class_name);
    let content_class = resolve(CONTENT_BASE, &[position.class(), reveal], None);
    let arrow_class = resolve(ARROW_BASE, &[position.arrow_class()], None);

    format!(
        r#"<span class="{wrapper_class}" data-tooltip data-position="{position}" data-state="{data_state}"><span class="{TRIGGER}" tabindex="0" aria-describedby="{id}"{aria_label}>{trigger}</span><span id="{id}" role="tooltip" data-state="{data_state}" class="{content_class}">{}<span class="{arrow_class}" aria-hidden="true"></span></span></span>"#,
        escape_html(content)
    )
}

/// Circled question mark that explains a form field.
pub fn help_tooltip(text: &str, position: TooltipPosition) -> String {
    tooltip(TooltipParams {
        content: text,
        trigger: &Icon::QuestionCircle.svg("h-4 w-4"),
        trigger_label: Some("More information"),
        position,
        ..Default::default()
    })
}

/// Client-side driver for [`TooltipState`]: the same transitions, applied to
/// every `[data-tooltip]` element through delegated listeners.
pub const TOOLTIP_SCRIPT: &str = r#"(() => {
  const states = new WeakMap();
  const rootOf = (node) => (node instanceof Element ? node.closest("[data-tooltip]") : null);
  const update = (root, change) => {
    const s = states.get(root) || { hovered: false, focused: false, dismissed: false };
    change(s);
    if (!s.hovered && !s.focused) s.dismissed = false;
    states.set(root, s);
    const value = (s.hovered || s.focused) && !s.dismissed ? "open" : "closed";
    root.dataset.state = value;
    const content = root.querySelector("[role=tooltip]");
    if (content) {
      content.dataset.state = value;
      content.style.visibility = s.dismissed ? "hidden" : "";
    }
  };
  const on = (type, change, leaving) => {
    document.addEventListener(type, (event) => {
      const root = rootOf(event.target);
      if (!root || (leaving && root.contains(event.relatedTarget))) return;
      update(root, change);
    });
  };
  on("pointerover", (s) => { s.hovered = true; }, false);
  on("pointerout", (s) => { s.hovered = false; }, true);
  on("focusin", (s) => { s.focused = true; }, false);
  on("focusout", (s) => { s.focused = false; }, true);
  document.addEventListener("keydown", (event) => {
    if (event.key !== "Escape") return;
    document.querySelectorAll("[data-tooltip][data-state=open]").forEach((root) => {
      update(root, (s) => { s.dismissed = s.hovered || s.focused; });
    });
  });
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn token_set(class: &str) -> HashSet<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn test_positions_have_disjoint_class_sets() {
        let positions = TooltipPosition::ALL;
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(
                    token_set(a.class()).is_disjoint(&token_set(b.class())),
                    "placement {a} overlaps {b}"
                );
                assert!(
                    token_set(a.arrow_class()).is_disjoint(&token_set(b.arrow_class())),
                    "arrow {a} overlaps {b}"
                );
            }
        }
        assert_eq!(TooltipPosition::default(), TooltipPosition::Top);
    }

    #[test]
    fn test_hover_and_focus_are_independent() {
        let state = TooltipState::closed()
            .apply(TooltipEvent::PointerEnter)
            .apply(TooltipEvent::FocusIn)
            .apply(TooltipEvent::PointerLeave);
        assert!(state.is_open());

        let state = state.apply(TooltipEvent::FocusOut);
        assert!(!state.is_open());
        assert_eq!(state, TooltipState::closed());
    }

    #[test]
    fn test_escape_dismisses_until_both_end() {
        let state = TooltipState::closed()
            .apply(TooltipEvent::FocusIn)
            .apply(TooltipEvent::Escape);
        assert!(!state.is_open());

        // still focused, hovering does not reopen
        let state = state.apply(TooltipEvent::PointerEnter);
        assert!(!state.is_open());

        let state = state
            .apply(TooltipEvent::FocusOut)
            .apply(TooltipEvent::PointerLeave);
        assert_eq!(state, TooltipState::closed());

        let state = state.apply(TooltipEvent::PointerEnter);
        assert!(state.is_open());
        assert_eq!(state.data_state(), "open");
    }

    #[test]
    fn test_escape_while_closed_is_a_no_op() {
        let state = TooltipState::closed().apply(TooltipEvent::Escape);
        assert_eq!(state, TooltipState::closed());
        assert!(state.apply(TooltipEvent::FocusIn).is_open());
    }

    #[test]
    fn test_markup_links_trigger_to_content() {
        let html = tooltip(TooltipParams {
            content: "Adjusted Gross Income",
            trigger: "AGI",
            position: TooltipPosition::Bottom,
            ..Default::default()
        });

        assert!(html.contains(r#"tabindex="0" aria-describedby="tooltip-adjusted-gross-income""#));
        assert!(html.contains(r#"id="tooltip-adjusted-gross-income" role="tooltip""#));
        assert!(html.contains(r#"data-state="closed""#));
        assert!(html.contains("group-hover:visible"));
        assert!(html.contains("group-focus-within:visible"));
        assert!(html.contains("top-full inset-x-0 mx-auto w-max mt-2"));
        assert!(html.contains(r#"data-position="bottom""#));
    }

    #[test]
    fn test_open_state_renders_visible() {
        let html = tooltip(TooltipParams {
            content: "Shown",
            trigger: "?",
            state: TooltipState::open(),
            id: Some("tip"),
            ..Default::default()
        });

        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains("visible opacity-100"));
        assert!(!html.contains("invisible"));
        assert!(html.contains(r#"aria-describedby="tip""#));
    }

    #[test]
    fn test_help_tooltip_escapes_text() {
        let html = help_tooltip("Use <your> SSN", TooltipPosition::Right);

        assert!(html.contains("Use &lt;your&gt; SSN"));
        assert!(html.contains(r#"aria-label="More information""#));
        assert!(html.contains("<svg"));
        assert!(html.contains(TooltipPosition::Right.arrow_class()));
    }
}
