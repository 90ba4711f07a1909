//! Style-variant resolution
//!
//! Every styling axis of a component (button variant, size, field state...)
//! is a closed enum. Picking a value outside the axis is a compile error in
//! Rust code and an [`UnknownVariant`] error at string boundaries such as
//! query parameters.

use crate::merge::merge_classes;

/// A string did not name any value of an axis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {axis} value '{value}'")]
pub struct UnknownVariant {
    pub axis: &'static str,
    pub value: String,
}

/// One styling axis: a closed set of values, each with a class fragment.
pub trait VariantAxis: Copy + Default + Eq + 'static {
    /// Axis name, used in error messages
    const AXIS: &'static str;
    /// Every value in declaration order
    const ALL: &'static [Self];

    /// Class fragment applied when this value is active.
    fn class(self) -> &'static str;

    /// Lower-case name used in markup and parsing.
    fn key(self) -> &'static str;
}

/// Declares an axis enum with its keys, fragments and default value.
///
/// Generates the enum, `Default`, [`VariantAxis`], `Display` and `FromStr`.
#[macro_export]
macro_rules! variant_axis {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $class:literal)
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::variant::VariantAxis for $name {
            const AXIS: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn class(self) -> &'static str {
                match self {
                    $(Self::$variant => $class),+
                }
            }

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::variant::VariantAxis::key(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::variant::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($key => Ok(Self::$variant),)+
                    _ => Err($crate::variant::UnknownVariant {
                        axis: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Resolves a component's class string.
///
/// Base classes come first, then the active fragments in axis order, then
/// the caller's classes; conflicting utilities resolve to the later one.
pub fn resolve(base: &str, fragments: &[&str], class_name: Option<&str>) -> String {
    let capacity = base.len()
        + fragments.iter().map(|f| f.len() + 1).sum::<usize>()
        + class_name.map_or(0, |c| c.len() + 1);
    let mut combined = String::with_capacity(capacity);

    combined.push_str(base);
    for fragment in fragments {
        combined.push(' ');
        combined.push_str(fragment);
    }
    if let Some(class_name) = class_name {
        combined.push(' ');
        combined.push_str(class_name);
    }

    merge_classes(&combined)
}

/// Joins optional class lists, skipping empty ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let joined = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    variant_axis! {
        /// Test axis
        enum Tone {
            Calm => ("calm", "bg-blue-100 text-blue-900"),
            Loud => ("loud", "bg-red-600 text-white"),
        }
        default = Calm;
    }

    #[test]
    fn test_default_applies_when_unspecified() {
        let tone = Tone::default();
        assert_eq!(
            resolve("rounded p-2", &[tone.class()], None),
            "rounded p-2 bg-blue-100 text-blue-900"
        );
    }

    #[test]
    fn test_caller_classes_override_fragments() {
        assert_eq!(
            resolve("rounded p-2", &[Tone::Loud.class()], Some("bg-green-600 p-4")),
            "rounded text-white bg-green-600 p-4"
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve("a b", &["c", "d"], Some("e"));
        let second = resolve("a b", &["c", "d"], Some("e"));
        assert_eq!(first, second);
        assert_eq!(first, "a b c d e");
    }

    #[test]
    fn test_parsing_rejects_unknown_values() {
        assert_eq!("LOUD".parse::<Tone>(), Ok(Tone::Loud));
        assert_eq!(
            "shouty".parse::<Tone>(),
            Err(UnknownVariant {
                axis: "Tone",
                value: "shouty".to_string()
            })
        );
        assert_eq!(Tone::ALL, &[Tone::Calm, Tone::Loud]);
        assert_eq!(Tone::Loud.to_string(), "loud");
    }

    #[test]
    fn test_join_classes_skips_empty_parts() {
        assert_eq!(
            join_classes([Some("mt-2 "), None, Some("  "), Some("w-1/2")]),
            Some("mt-2 w-1/2".to_string())
        );
        assert_eq!(join_classes([None, Some("")]), None);
    }
}
