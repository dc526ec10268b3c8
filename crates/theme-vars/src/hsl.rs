//! RGB to HSL conversion.
//!
//! Channels come in on the 0–255 scale. The result carries hue in degrees
//! (`0.0..360.0`) and saturation/lightness as fractions (`0.0..=1.0`), not
//! percentages. Nothing is clamped: out-of-range input produces whatever the
//! formula yields.

use crate::component::{format_number, Component};

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation as a fraction.
    pub saturation: f64,
    /// Lightness as a fraction.
    pub lightness: f64,
}

impl Hsl {
    /// Returns the three CSS components: bare hue, then saturation and
    /// lightness as percentages.
    pub fn to_components(self) -> [Component; 3] {
        [
            Component::Number(self.hue),
            Component::Text(format!("{}%", format_number(self.saturation * 100.0))),
            Component::Text(format!("{}%", format_number(self.lightness * 100.0))),
        ]
    }
}

/// Converts 0–255 RGB channels to HSL.
///
/// When several channels share the maximum, the hue formula is chosen in
/// R, G, B order.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    if r.is_nan() || g.is_nan() || b.is_nan() {
        return Hsl {
            hue: 0.0,
            saturation: f64::NAN,
            lightness: f64::NAN,
        };
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    // achromatic
    if max == min {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
        };
    }

    let saturation = (max - lightness) / lightness.min(1.0 - lightness);

    let mut hue = if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsl {
        hue,
        saturation,
        lightness,
    }
}

/// Converts the first three components (R, G, B) to HSL.
///
/// Returns `None` when fewer than three components are given.
pub fn components_to_hsl(components: &[Component]) -> Option<Hsl> {
    match components {
        [r, g, b, ..] => Some(rgb_to_hsl(r.to_f64(), g.to_f64(), b.to_f64())),
        _ => None,
    }
}
