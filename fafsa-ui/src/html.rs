//! HTML escaping and attribute pass-through

/// Escapes text content.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Lower-case, dash separated form of a label, usable as an element id.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

/// Native attributes passed through to a rendered element.
///
/// Insertion order is kept so the markup is deterministic. Setting a name
/// twice replaces the earlier value in place. A `None` value renders as a
/// boolean attribute (`disabled`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    /// Creates an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Attributes::set_flag`].
    #[must_use]
    pub fn flag(mut self, name: &str) -> Self {
        self.set_flag(name);
        self
    }

    /// Sets `name="value"`.
    ///
    /// Names that cannot appear in an HTML tag are dropped with a warning.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.insert(name, Some(value.into()));
    }

    /// Sets a boolean attribute.
    pub fn set_flag(&mut self, name: &str) {
        self.insert(name, None);
    }

    fn insert(&mut self, name: &str, value: Option<String>) {
        if !is_valid_name(name) {
            tracing::warn!(attribute = name, "Dropping invalid attribute name");
            return;
        }
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Value of an attribute; boolean attributes read as `""`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        let (_, value) = self.entries.remove(index);
        Some(value.unwrap_or_default())
    }

    /// Removes a caller `class` attribute so it can be merged into the
    /// component's own class string.
    pub fn take_class(&mut self) -> Option<String> {
        self.remove("class").filter(|c| !c.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every attribute with a leading space, ready to splice into a tag.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| match value {
                Some(value) => format!(r#" {name}="{}""#, escape_attr(value)),
                None => format!(" {name}"),
            })
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_attr(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Date of Birth"), "date-of-birth");
        assert_eq!(slugify("  E-mail (primary)!"), "e-mail-primary");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_attributes_render_in_insertion_order() {
        let attrs = Attributes::new()
            .with("name", "email")
            .with("placeholder", "you@example.com")
            .flag("disabled")
            .with("name", "contact_email");

        assert_eq!(
            attrs.render(),
            r#" name="contact_email" placeholder="you@example.com" disabled"#
        );
        assert_eq!(attrs.get("disabled"), Some(""));
        assert!(attrs.contains("placeholder"));
    }

    #[test]
    fn test_attribute_values_are_escaped_and_names_validated() {
        let attrs = Attributes::new()
            .with("value", r#"" onmouseover="steal()"#)
            .with("bad name", "x")
            .with("onclick=\"x\"", "y");

        assert_eq!(attrs.render(), r#" value="&quot; onmouseover=&quot;steal()""#);
    }

    #[test]
    fn test_take_class() {
        let mut attrs: Attributes = [("class", "mt-4"), ("id", "ssn")].into_iter().collect();

        assert_eq!(attrs.take_class(), Some("mt-4".to_string()));
        assert!(!attrs.contains("class"));
        assert_eq!(attrs.get("id"), Some("ssn"));
    }
}
