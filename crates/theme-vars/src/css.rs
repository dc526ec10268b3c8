//! CSS custom-property emission.
//!
//! Writes one rule block per theme. The default theme goes first under the
//! base selector; the other themes follow in name order, each selected by
//! attribute (`:root[data-theme="dark"]`) or, without an attribute, by class
//! (`.dark`).
//!
//! ```css
//! :root {
//!   --primary: 255 0 0;
//! }
//!
//! :root[data-theme="dark"] {
//!   --primary: 0 255 0;
//! }
//! ```
//!
//! Values are the component strings from the flattener, meant to be used as
//! `rgb(var(--primary))` or `hsl(var(--primary))`.

use std::fmt::Write;

use crate::error::Result;
use crate::theme::OutputMap;
use crate::var_name::normalize_var_name;

/// How themes map to selectors and names to properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOptions {
    /// Theme written under the bare selector.
    pub default_theme: String,
    /// Base selector, `:root` by default.
    pub selector: String,
    /// Attribute used to select other themes.
    pub attribute: Option<String>,
    /// Prefix joined to each color name with `-`.
    pub prefix: Option<String>,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
            selector: ":root".to_string(),
            attribute: None,
            prefix: None,
        }
    }
}

impl CssOptions {
    /// Selector for the rule block of `theme`.
    pub fn selector_for(&self, theme: &str) -> String {
        if theme == self.default_theme {
            return self.selector.clone();
        }
        match &self.attribute {
            Some(attribute) => format!("{}[{}=\"{}\"]", self.selector, attribute, theme),
            None => format!(".{}", theme),
        }
    }

    /// Custom-property name for the color `name`.
    pub fn property_for(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => {
                normalize_var_name(&format!("{}-{}", prefix, name))
            }
            _ => normalize_var_name(name),
        }
    }
}

/// Writes the rule blocks for `output` to `out`.
///
/// # Errors
///
/// Returns [`ThemeVarsError::Write`](crate::ThemeVarsError::Write) when the
/// writer fails.
pub fn write_css<W: Write>(out: &mut W, output: &OutputMap, options: &CssOptions) -> Result<()> {
    let default = output.get_key_value(options.default_theme.as_str());
    let others = output
        .iter()
        .filter(|(theme, _)| theme.as_str() != options.default_theme);

    for (i, (theme, colors)) in default.into_iter().chain(others).enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {{", options.selector_for(theme))?;
        for (name, value) in colors {
            writeln!(out, "  {}: {};", options.property_for(name), value)?;
        }
        writeln!(out, "}}")?;
    }
    Ok(())
}

/// Renders `output` as a CSS string.
///
/// # Errors
///
/// Propagates the result of [`write_css`]; a `String` writer never fails, so
/// this is `Ok` in practice.
pub fn render_css(output: &OutputMap, options: &CssOptions) -> Result<String> {
    let mut css = String::new();
    write_css(&mut css, output, options)?;
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ColorFormat;
    use crate::theme::{color_components, ThemeColorValue, ThemeColors};

    fn sample() -> OutputMap {
        let colors = ThemeColors::new()
            .add("primary", "#ff0000")
            .add(
                "neutral",
                ThemeColorValue::variants([("dark", "#000"), ("cafe", "#fff")]),
            );
        color_components(&colors, "light", ColorFormat::Rgb)
    }

    #[test]
    fn test_default_theme_first_then_sorted() {
        let css = render_css(&sample(), &CssOptions::default()).unwrap();
        assert_eq!(
            css,
            "\
:root {
  --primary: 255 0 0;
}

.cafe {
  --neutral: 255 255 255;
}

.dark {
  --neutral: 0 0 0;
}
"
        );
    }

    #[test]
    fn test_attribute_selector() {
        let options = CssOptions {
            attribute: Some("data-theme".to_string()),
            selector: "html".to_string(),
            ..CssOptions::default()
        };
        assert_eq!(options.selector_for("light"), "html");
        assert_eq!(options.selector_for("dark"), "html[data-theme=\"dark\"]");

        let css = render_css(&sample(), &options).unwrap();
        assert!(css.starts_with("html {\n"));
        assert!(css.contains("html[data-theme=\"cafe\"] {\n  --neutral: 255 255 255;\n}"));
    }

    #[test]
    fn test_prefix_and_normalization() {
        let options = CssOptions {
            prefix: Some("un".to_string()),
            ..CssOptions::default()
        };
        assert_eq!(options.property_for("primary"), "--un-primary");
        assert_eq!(CssOptions::default().property_for("--primary"), "--primary");
        assert_eq!(CssOptions::default().property_for("---primary"), "--primary");
    }

    #[test]
    fn test_missing_default_theme() {
        let colors = ThemeColors::new().add("bg", ThemeColorValue::variants([("dark", "#000")]));
        let output = color_components(&colors, "light", ColorFormat::Rgb);
        assert_eq!(
            render_css(&output, &CssOptions::default()).unwrap(),
            ".dark {\n  --bg: 0 0 0;\n}\n"
        );
    }

    #[test]
    fn test_writer_error_surfaces() {
        struct Full;

        impl Write for Full {
            fn write_str(&mut self, _: &str) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        let err = write_css(&mut Full, &sample(), &CssOptions::default()).unwrap_err();
        assert!(matches!(err, crate::ThemeVarsError::Write(_)));
    }

    #[test]
    fn test_render_matches_write() {
        let options = CssOptions::default();
        let mut written = String::new();
        write_css(&mut written, &sample(), &options).unwrap();
        assert_eq!(render_css(&sample(), &options).unwrap(), written);
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(
            render_css(&OutputMap::new(), &CssOptions::default()).unwrap(),
            ""
        );
    }
}
