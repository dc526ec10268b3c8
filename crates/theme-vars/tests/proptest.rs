//! Property-based tests for theme-vars using proptest.

use proptest::prelude::*;
use theme_vars::{
    color_components, normalize_var_name, resolve_color, rgb_to_hsl, ColorFormat, ColorValue,
    CssColorParser, ThemeColorValue, ThemeColors,
};

// ============================================================================
// Test helpers
// ============================================================================

/// Reference HSL -> RGB inverse (CSS Color 4 algorithm), 0–255 channels.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let channel = |n: f64| {
        let k = (n + hue / 30.0) % 12.0;
        let a = saturation * lightness.min(1.0 - lightness);
        let v = lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        v * 255.0
    };
    (channel(0.0), channel(8.0), channel(4.0))
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Gray colors have no hue and no saturation.
    #[test]
    fn achromatic_has_zero_hue_and_saturation(v in 0u8..=255) {
        let v = f64::from(v);
        let hsl = rgb_to_hsl(v, v, v);
        prop_assert_eq!(hsl.hue, 0.0);
        prop_assert_eq!(hsl.saturation, 0.0);
    }

    /// HSL stays inside its nominal ranges for in-range input.
    #[test]
    fn hsl_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hsl = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
        prop_assert!((0.0..360.0).contains(&hsl.hue));
        prop_assert!((0.0..=1.0 + 1e-9).contains(&hsl.saturation));
        prop_assert!((0.0..=1.0).contains(&hsl.lightness));
    }

    /// RGB -> HSL -> RGB reproduces the channels.
    #[test]
    fn rgb_hsl_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hsl = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
        let (r2, g2, b2) = hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness);
        prop_assert!((r2 - f64::from(r)).abs() < 1e-6, "r {} -> {}", r, r2);
        prop_assert!((g2 - f64::from(g)).abs() < 1e-6, "g {} -> {}", g, g2);
        prop_assert!((b2 - f64::from(b)).abs() < 1e-6, "b {} -> {}", b, b2);
    }

    /// Normalized names start with exactly two hyphens, whatever came in.
    #[test]
    fn var_name_has_two_leading_hyphens(hyphens in 0usize..6, name in name_strategy()) {
        let raw = format!("{}{}", "-".repeat(hyphens), name);
        let normalized = normalize_var_name(&raw);
        prop_assert!(normalized.starts_with("--"));
        prop_assert!(!normalized.starts_with("---"));
        prop_assert_eq!(normalized.trim_start_matches('-'), name.as_str());
    }

    /// Hex colors in rgb format come back as their decimal channels.
    #[test]
    fn hex_resolves_to_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = ColorValue::from(format!("#{:02x}{:02x}{:02x}", r, g, b));
        prop_assert_eq!(
            resolve_color(&hex, ColorFormat::Rgb, &CssColorParser),
            format!("{} {} {}", r, g, b)
        );
    }

    /// Component lists resolve to their space-joined text in both formats.
    #[test]
    fn components_are_joined(parts in prop::collection::vec("[0-9]{1,3}%?", 1..5)) {
        let value = ColorValue::Components(parts.iter().map(|p| p.as_str().into()).collect());
        let expected = parts.join(" ");
        prop_assert_eq!(resolve_color(&value, ColorFormat::Rgb, &CssColorParser), expected.clone());
        prop_assert_eq!(resolve_color(&value, ColorFormat::Hsl, &CssColorParser), expected);
    }

    /// Every single color lands under the default theme, every variant under its theme.
    #[test]
    fn flattening_places_every_name(
        singles in prop::collection::btree_set(name_strategy(), 0..6),
        variants in prop::collection::btree_set("[a-z]{1,6}", 1..4),
    ) {
        let mut colors = ThemeColors::new();
        for name in &singles {
            colors.insert(format!("s-{}", name), "#123456");
        }
        colors.insert(
            "v",
            ThemeColorValue::variants(variants.iter().map(|theme| (theme.clone(), "#abcdef"))),
        );

        let output = color_components(&colors, "default", ColorFormat::Rgb);

        for name in &singles {
            let key = format!("s-{}", name);
            prop_assert_eq!(output["default"][&key].as_str(), "18 52 86");
        }
        for theme in &variants {
            prop_assert_eq!(output[theme]["v"].as_str(), "171 205 239");
        }
    }
}
