//! Theme color configuration and flattening.
//!
//! A theme config maps color names to either one color shared by the default
//! theme, or a color per theme variant:
//!
//! ```yaml
//! primary: "#ff0000"          # default theme only
//! surface:
//!   light: "#ffffff"
//!   dark: "#1e1e1e"
//! ```
//!
//! Flattening turns that into `theme -> name -> components`:
//!
//! ```text
//! light: { primary: "255 0 0", surface: "255 255 255" }
//! dark:  { surface: "30 30 30" }
//! ```
//!
//! A color that only lists variants does not appear under the default theme
//! unless one of its variants is named after it.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::component::{ColorValue, Component};
use crate::parse::{ColorParser, CssColorParser};
use crate::resolve::{resolve_color, ColorFormat};

/// Flattened output: theme name to color name to component string.
pub type OutputMap = BTreeMap<String, BTreeMap<String, String>>;

/// The color(s) configured for one name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColorValue {
    /// One color, placed under the default theme.
    Single(ColorValue),
    /// A color per theme variant.
    Variants(BTreeMap<String, ColorValue>),
}

impl ThemeColorValue {
    /// Builds a per-variant value from `(theme, color)` pairs.
    pub fn variants<I, K, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ColorValue>,
    {
        ThemeColorValue::Variants(
            variants
                .into_iter()
                .map(|(theme, color)| (theme.into(), color.into()))
                .collect(),
        )
    }
}

impl From<ColorValue> for ThemeColorValue {
    fn from(value: ColorValue) -> Self {
        ThemeColorValue::Single(value)
    }
}

impl From<&str> for ThemeColorValue {
    fn from(css: &str) -> Self {
        ThemeColorValue::Single(css.into())
    }
}

impl From<String> for ThemeColorValue {
    fn from(css: String) -> Self {
        ThemeColorValue::Single(css.into())
    }
}

impl<C: Into<Component>, const N: usize> From<[C; N]> for ThemeColorValue {
    fn from(components: [C; N]) -> Self {
        ThemeColorValue::Single(components.into())
    }
}

/// Color names and their values, in insertion order.
///
/// Names are unique: inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeColors {
    entries: Vec<(String, ThemeColorValue)>,
}

impl ThemeColors {
    /// Creates an empty set of colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color, returning `self` for chaining.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<ThemeColorValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a color, replacing any existing value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ThemeColorValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value configured for `name`.
    pub fn get(&self, name: &str) -> Option<&ThemeColorValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of color names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no colors are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeColorValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for ThemeColors
where
    K: Into<String>,
    V: Into<ThemeColorValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut colors = ThemeColors::new();
        for (name, value) in iter {
            colors.insert(name, value);
        }
        colors
    }
}

impl Serialize for ThemeColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ThemeColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ThemeColorsVisitor;

        impl<'de> Visitor<'de> for ThemeColorsVisitor {
            type Value = ThemeColors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of color names to colors")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ThemeColors::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut colors = ThemeColors::new();
                while let Some((name, value)) = map.next_entry::<String, ThemeColorValue>()? {
                    colors.insert(name, value);
                }
                Ok(colors)
            }
        }

        deserializer.deserialize_map(ThemeColorsVisitor)
    }
}

/// Flattens [`ThemeColors`] into an [`OutputMap`].
///
/// Holds the default theme name, the output [`ColorFormat`] and the
/// [`ColorParser`] used for CSS color strings.
///
/// ```rust
/// use theme_vars::{ColorFormat, ThemeColorValue, ThemeColors, ThemeNormalizer};
///
/// let colors = ThemeColors::new()
///     .add("primary", "#ff0000")
///     .add("surface", ThemeColorValue::variants([("dark", "#000")]));
///
/// let output = ThemeNormalizer::new("light")
///     .with_format(ColorFormat::Hsl)
///     .color_components(&colors);
///
/// assert_eq!(output["light"]["primary"], "0 100% 50%");
/// assert_eq!(output["dark"]["surface"], "0 0% 0%");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeNormalizer<P = CssColorParser> {
    parser: P,
    default_theme: String,
    format: ColorFormat,
}

impl ThemeNormalizer {
    /// Creates a normalizer using [`CssColorParser`] and RGB output.
    pub fn new(default_theme: impl Into<String>) -> Self {
        Self::with_parser(CssColorParser, default_theme)
    }
}

impl<P: ColorParser> ThemeNormalizer<P> {
    /// Creates a normalizer with a custom color parser.
    pub fn with_parser(parser: P, default_theme: impl Into<String>) -> Self {
        Self {
            parser,
            default_theme: default_theme.into(),
            format: ColorFormat::default(),
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Theme that single (non-variant) colors are placed under.
    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    /// Output format.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Flattens `colors` into `theme -> name -> components`.
    pub fn color_components(&self, colors: &ThemeColors) -> OutputMap {
        let mut output = OutputMap::new();

        for (name, value) in colors.iter() {
            match value {
                ThemeColorValue::Single(color) => {
                    self.put(&mut output, &self.default_theme, name, color);
                }
                ThemeColorValue::Variants(variants) => {
                    for (theme, color) in variants {
                        self.put(&mut output, theme, name, color);
                    }
                }
            }
        }

        output
    }

    fn put(&self, output: &mut OutputMap, theme: &str, name: &str, color: &ColorValue) {
        let resolved = resolve_color(color, self.format, &self.parser);
        trace!(theme, name, value = %resolved, "resolved color");
        output
            .entry(theme.to_string())
            .or_default()
            .insert(name.to_string(), resolved);
    }
}

/// Flattens `colors` with the default [`CssColorParser`].
pub fn color_components(
    colors: &ThemeColors,
    default_theme: &str,
    format: ColorFormat,
) -> OutputMap {
    ThemeNormalizer::new(default_theme)
        .with_format(format)
        .color_components(colors)
}
