//! Resolving a single color value to its CSS component string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::{join, ColorValue, Component};
use crate::error::ThemeVarsError;
use crate::hsl::components_to_hsl;
use crate::parse::ColorParser;

/// Output format for resolved colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Components as parsed: `255 0 0`.
    #[default]
    Rgb,
    /// RGB converted to HSL: `0 100% 50%`.
    Hsl,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Rgb => f.write_str("rgb"),
            ColorFormat::Hsl => f.write_str("hsl"),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ThemeVarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            _ => Err(ThemeVarsError::InvalidColorFormat(s.to_string())),
        }
    }
}

/// Resolves a color value to the string written after `--name:`.
///
/// - Component lists are joined with spaces and never parsed.
/// - Strings the parser rejects come back unchanged.
/// - Colors with alpha are written as `c1,c2,c3,alpha`. A numeric alpha of
///   zero counts as no alpha.
/// - Otherwise components are joined with spaces. With
///   [`ColorFormat::Hsl`] the first three are treated as RGB channels and
///   replaced by `h s% l%`, whatever the parser reported as the kind.
pub fn resolve_color<P>(value: &ColorValue, format: ColorFormat, parser: &P) -> String
where
    P: ColorParser + ?Sized,
{
    let css = match value {
        ColorValue::Components(components) => return join(components, " "),
        ColorValue::Css(css) => css,
    };

    let Some(parsed) = parser.parse(css) else {
        debug!(color = %css, "unrecognised color, passing through");
        return css.clone();
    };

    let mut components = parsed.components;

    let alpha = parsed
        .alpha
        .filter(|alpha| !matches!(alpha, Component::Number(n) if *n == 0.0));
    if let Some(alpha) = alpha {
        components.push(alpha);
        return join(&components, ",");
    }

    if format == ColorFormat::Hsl {
        if let Some(hsl) = components_to_hsl(&components) {
            let [hue, saturation, lightness] = hsl.to_components();
            components[0] = hue;
            components[1] = saturation;
            components[2] = lightness;
        }
    }

    join(&components, " ")
}
