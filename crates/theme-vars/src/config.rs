//! Theme config files.
//!
//! A config bundles the colors with the settings needed to flatten and emit
//! them. YAML and JSON are both accepted; the file extension picks the format.
//!
//! ```yaml
//! default_theme: light
//! format: hsl
//! attribute: data-theme
//! colors:
//!   primary: "#646cff"
//!   neutral:
//!     light: "#f5f5f5"
//!     dark: "#1e1e1e"
//!     cafe: "#f2e8dc"
//! ```
//!
//! Every field except `colors` has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::css::CssOptions;
use crate::error::{Result, ThemeVarsError};
use crate::resolve::ColorFormat;
use crate::theme::{OutputMap, ThemeColors, ThemeNormalizer};

fn default_theme() -> String {
    "light".to_string()
}

fn default_selector() -> String {
    ":root".to_string()
}

/// A theme config as loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme that single colors belong to.
    #[serde(default = "default_theme")]
    pub default_theme: String,

    /// Output format for parsed colors.
    #[serde(default)]
    pub format: ColorFormat,

    /// Selector for the default theme's rule block.
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Attribute that selects a theme variant, e.g. `data-theme`.
    /// Variants are selected by class when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Prefix joined to every variable name with `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// The colors themselves.
    #[serde(default)]
    pub colors: ThemeColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            format: ColorFormat::default(),
            selector: default_selector(),
            attribute: None,
            prefix: None,
            colors: ThemeColors::new(),
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeVarsError::UnsupportedFormat`] for extensions other than
    /// `yaml`, `yml` and `json`, before touching the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeVarsError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ThemeVarsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = parse(&content)?;
        debug!(
            path = %path.display(),
            colors = config.colors.len(),
            default_theme = %config.default_theme,
            "loaded theme config"
        );
        Ok(config)
    }

    /// Builds a normalizer from the config's theme and format settings.
    pub fn normalizer(&self) -> ThemeNormalizer {
        ThemeNormalizer::new(self.default_theme.clone()).with_format(self.format)
    }

    /// Flattens the configured colors.
    pub fn color_components(&self) -> OutputMap {
        self.normalizer().color_components(&self.colors)
    }

    /// CSS emission options taken from this config.
    pub fn css_options(&self) -> CssOptions {
        CssOptions {
            default_theme: self.default_theme.clone(),
            selector: self.selector.clone(),
            attribute: self.attribute.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColorValue;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::from_yaml("colors: {}").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.default_theme, "light");
        assert_eq!(config.format, ColorFormat::Rgb);
        assert_eq!(config.selector, ":root");
    }

    #[test]
    fn test_full_yaml() {
        let config = ThemeConfig::from_yaml(
            r##"
default_theme: dark
format: hsl
selector: html
attribute: data-theme
prefix: un
colors:
  primary: "#ff0000"
  neutral:
    light: "#ffffff"
    dark: [30, 30, 30]
"##,
        )
        .unwrap();

        assert_eq!(config.default_theme, "dark");
        assert_eq!(config.format, ColorFormat::Hsl);
        assert_eq!(config.attribute.as_deref(), Some("data-theme"));
        assert_eq!(config.prefix.as_deref(), Some("un"));
        assert!(matches!(
            config.colors.get("neutral"),
            Some(ThemeColorValue::Variants(_))
        ));

        let output = config.color_components();
        assert_eq!(output["dark"]["primary"], "0 100% 50%");
        assert_eq!(output["dark"]["neutral"], "30 30 30");
        assert_eq!(output["light"]["neutral"], "0 0% 100%");
    }

    #[test]
    fn test_json() {
        let config =
            ThemeConfig::from_json(r##"{"format": "rgb", "colors": {"a": "#0000ff"}}"##).unwrap();
        assert_eq!(config.color_components()["light"]["a"], "0 0 255");
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = ThemeConfig::from_yaml("format: lab").unwrap_err();
        assert!(matches!(err, ThemeVarsError::Yaml(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ThemeConfig::from_json(r#"{"colours": {}}"#).unwrap_err();
        assert!(matches!(err, ThemeVarsError::Json(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ThemeConfig::from_file("theme.toml").unwrap_err();
        assert!(matches!(err, ThemeVarsError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ThemeConfig::from_file("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, ThemeVarsError::Read { .. }));
    }
}
