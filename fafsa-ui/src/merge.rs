//! Tailwind class merging
//!
//! Concatenated class strings often carry two utilities for the same CSS
//! property (`bg-blue-600` from a variant, `bg-red-600` from the caller). The
//! browser resolves those by stylesheet order, not attribute order, so the
//! merge keeps only the last utility of every conflict group and drops exact
//! duplicates. Classes outside the known groups never conflict.

use std::collections::HashSet;

/// Identity of a class for conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ClassKey<'a> {
    Group {
        modifiers: String,
        important: bool,
        group: &'static str,
    },
    Literal(&'a str),
}

/// Merges a whitespace separated class list, later classes winning.
///
/// Surviving classes keep their original relative order.
pub fn merge_classes(input: &str) -> String {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        if seen.insert(class_key(token)) {
            kept.push(*token);
        }
    }

    kept.reverse();
    kept.join(" ")
}

fn class_key(token: &str) -> ClassKey<'_> {
    let (mut modifiers, utility) = split_modifiers(token);

    let (utility, important) = if let Some(rest) = utility.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = utility.strip_suffix('!') {
        (rest, true)
    } else {
        (utility, false)
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    match classify(utility) {
        Some(group) => {
            modifiers.sort_unstable();
            ClassKey::Group {
                modifiers: modifiers.join(":"),
                important,
                group,
            }
        }
        None => ClassKey::Literal(token),
    }
}

/// Splits `md:hover:bg-red-500` into `["md", "hover"]` and `bg-red-500`.
/// Colons inside arbitrary values (`bg-[url(http://x)]`) are not separators.
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => {
                modifiers.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (modifiers, &token[start..])
}

const KEYWORDS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("hidden", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("sr-only", "sr-only"),
    ("not-sr-only", "sr-only"),
    ("truncate", "truncate"),
    ("antialiased", "font-smoothing"),
    ("subpixel-antialiased", "font-smoothing"),
    ("grow", "flex-grow"),
    ("shrink", "flex-shrink"),
];

/// Prefix families, longest prefix of a family first.
const PREFIXES: &[(&str, &str)] = &[
    ("min-w", "min-width"),
    ("min-h", "min-height"),
    ("max-w", "max-width"),
    ("max-h", "max-height"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("px", "padding-x"),
    ("py", "padding-y"),
    ("pt", "padding-top"),
    ("pr", "padding-right"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
    ("ps", "padding-start"),
    ("pe", "padding-end"),
    ("p", "padding"),
    ("mx", "margin-x"),
    ("my", "margin-y"),
    ("mt", "margin-top"),
    ("mr", "margin-right"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("ms", "margin-start"),
    ("me", "margin-end"),
    ("m", "margin"),
    ("w", "width"),
    ("h", "height"),
    ("size", "size"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("z", "z-index"),
    ("opacity", "opacity"),
    ("cursor", "cursor"),
    ("items", "align-items"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("justify", "justify-content"),
    ("self", "align-self"),
    ("place-items", "place-items"),
    ("place-content", "place-content"),
    ("place-self", "place-self"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("col-span", "col-span"),
    ("row-span", "row-span"),
    ("leading", "line-height"),
    ("tracking", "letter-spacing"),
    ("whitespace", "whitespace"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("transition", "transition"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("rotate", "rotate"),
    ("scale-x", "scale-x"),
    ("scale-y", "scale-y"),
    ("scale", "scale"),
    ("pointer-events", "pointer-events"),
    ("select", "user-select"),
    ("resize", "resize"),
    ("appearance", "appearance"),
    ("placeholder", "placeholder-color"),
    ("accent", "accent-color"),
    ("caret", "caret-color"),
    ("fill", "fill"),
    ("order", "order"),
    ("basis", "flex-basis"),
    ("line-clamp", "line-clamp"),
    ("aspect", "aspect-ratio"),
    ("object", "object-fit"),
    ("list", "list-style"),
];

fn classify(utility: &str) -> Option<&'static str> {
    if let Some((_, group)) = KEYWORDS.iter().find(|(keyword, _)| *keyword == utility) {
        return Some(*group);
    }

    let (prefix, value) = utility.split_once('-').unwrap_or((utility, ""));
    match prefix {
        "text" => Some(text_group(value)),
        "font" => Some(font_group(value)),
        "bg" => Some(bg_group(value)),
        "border" => Some(border_group(value)),
        "ring" => Some(ring_group(value)),
        "shadow" => Some(shadow_group(value)),
        "rounded" => Some(rounded_group(value)),
        "outline" => Some(outline_group(value)),
        "content" => Some(content_group(value)),
        "flex" => flex_group(value),
        "stroke" => Some(if is_numeric(value) {
            "stroke-width"
        } else {
            "stroke-color"
        }),
        _ => PREFIXES
            .iter()
            .find(|(prefix, _)| has_prefix(utility, prefix))
            .map(|(_, group)| *group),
    }
}

fn has_prefix(utility: &str, prefix: &str) -> bool {
    utility == prefix
        || utility
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Plain numbers and bracketed values starting with a digit (`[3px]`).
fn is_numeric(value: &str) -> bool {
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
            || inner.starts_with("length:");
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_color_arbitrary(value: &str) -> bool {
    value
        .strip_prefix('[')
        .is_some_and(|inner| {
            inner.starts_with('#')
                || inner.starts_with("rgb")
                || inner.starts_with("hsl")
                || inner.starts_with("color:")
        })
}

fn text_group(value: &str) -> &'static str {
    const SIZES: &[&str] = &[
        "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
    ];
    // `text-sm/6` carries a line height after the slash
    let size_part = value.split('/').next().unwrap_or(value);

    if SIZES.contains(&size_part) {
        return "font-size";
    }
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        _ if value.starts_with('[') && !is_color_arbitrary(value) && is_numeric(value) => {
            "font-size"
        }
        _ => "text-color",
    }
}

fn font_group(value: &str) -> &'static str {
    match value {
        "sans" | "serif" | "mono" => "font-family",
        _ => "font-weight",
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "cover" | "contain" | "auto" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        _ if value.starts_with("gradient-") || value.starts_with("[url") => "bg-image",
        _ if value.starts_with("opacity-") => "bg-opacity",
        _ if value.starts_with("clip-") => "bg-clip",
        _ if value.starts_with("origin-") => "bg-origin",
        _ => "bg-color",
    }
}

fn border_group(value: &str) -> &'static str {
    if value.is_empty() || is_numeric(value) {
        return "border-width";
    }
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => return "border-style",
        "collapse" | "separate" => return "border-collapse",
        _ => {}
    }
    if value.starts_with("opacity-") {
        return "border-opacity";
    }

    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    let width = rest.is_empty() || is_numeric(rest);
    match (side, width) {
        ("x", true) => "border-width-x",
        ("y", true) => "border-width-y",
        ("t", true) => "border-width-top",
        ("r", true) => "border-width-right",
        ("b", true) => "border-width-bottom",
        ("l", true) => "border-width-left",
        ("x", false) => "border-color-x",
        ("y", false) => "border-color-y",
        ("t", false) => "border-color-top",
        ("r", false) => "border-color-right",
        ("b", false) => "border-color-bottom",
        ("l", false) => "border-color-left",
        _ => "border-color",
    }
}

fn ring_group(value: &str) -> &'static str {
    if value.is_empty() || is_numeric(value) {
        return "ring-width";
    }
    if value == "inset" {
        return "ring-inset";
    }
    if let Some(offset) = value.strip_prefix("offset-") {
        return if is_numeric(offset) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        };
    }
    if value.starts_with("opacity-") {
        return "ring-opacity";
    }
    "ring-color"
}

fn shadow_group(value: &str) -> &'static str {
    match value {
        "" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
        _ => "shadow-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let (side, _) = value.split_once('-').unwrap_or((value, ""));
    match side {
        "t" => "rounded-top",
        "r" => "rounded-right",
        "b" => "rounded-bottom",
        "l" => "rounded-left",
        "s" => "rounded-start",
        "e" => "rounded-end",
        "tl" => "rounded-top-left",
        "tr" => "rounded-top-right",
        "br" => "rounded-bottom-right",
        "bl" => "rounded-bottom-left",
        _ => "rounded",
    }
}

fn outline_group(value: &str) -> &'static str {
    match value {
        "" | "none" | "dashed" | "dotted" | "double" | "solid" => "outline-style",
        _ if value.starts_with("offset-") => "outline-offset",
        _ if is_numeric(value) => "outline-width",
        _ => "outline-color",
    }
}

fn content_group(value: &str) -> &'static str {
    if value == "none" || value.starts_with('[') {
        "content"
    } else {
        "align-content"
    }
}

fn flex_group(value: &str) -> Option<&'static str> {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => Some("flex-direction"),
        "wrap" | "wrap-reverse" | "nowrap" => Some("flex-wrap"),
        "1" | "auto" | "initial" | "none" => Some("flex"),
        "grow" | "grow-0" => Some("flex-grow"),
        "shrink" | "shrink-0" => Some("flex-shrink"),
        _ if value.starts_with('[') => Some("flex"),
        _ => None,
    }
}
