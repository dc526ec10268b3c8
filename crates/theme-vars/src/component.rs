//! Color components and color values.
//!
//! A [`Component`] is a single channel of a color as it will be written into
//! CSS: either a number (`255`, `0.5`) or a token kept verbatim (`"50%"`,
//! `"120deg"`). A [`ColorValue`] is what a theme config holds for one color:
//! a CSS color string to be parsed, or a component list that is already final.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single color component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    /// Numeric component, written without a trailing `.0`.
    Number(f64),
    /// Component kept as source text.
    Text(String),
}

impl Component {
    /// Coerces the component to a number.
    ///
    /// Text is trimmed and parsed; blank text is `0` and anything that is not
    /// a plain number (including `"50%"`) is `NaN`. No range checks are made.
    pub fn to_f64(&self) -> f64 {
        match self {
            Component::Number(n) => *n,
            Component::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => f.write_str(&format_number(*n)),
            Component::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Component {
    fn from(n: f64) -> Self {
        Component::Number(n)
    }
}

impl From<u8> for Component {
    fn from(n: u8) -> Self {
        Component::Number(f64::from(n))
    }
}

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Component::Text(s.to_string())
    }
}

impl From<String> for Component {
    fn from(s: String) -> Self {
        Component::Text(s)
    }
}

/// Formats a number the way it appears in CSS output.
///
/// Uses the shortest round-trip representation, drops `.0` on integral
/// values and never prints a negative zero. Infinities are spelled
/// `Infinity` / `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 + 0.0 == +0.0
    format!("{}", n + 0.0)
}

/// Joins components with the given separator.
pub(crate) fn join(components: &[Component], separator: &str) -> String {
    components
        .iter()
        .map(Component::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// One color as written in a theme config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A CSS color string such as `#ff0000` or `rgb(255 0 0 / 50%)`.
    Css(String),
    /// Components that are already in their final form.
    Components(Vec<Component>),
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Css(s.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::Css(s)
    }
}

impl From<Vec<Component>> for ColorValue {
    fn from(components: Vec<Component>) -> Self {
        ColorValue::Components(components)
    }
}

impl<C: Into<Component>, const N: usize> From<[C; N]> for ColorValue {
    fn from(components: [C; N]) -> Self {
        ColorValue::Components(components.into_iter().map(Into::into).collect())
    }
}
