//! CSS custom-property names.

/// Turns a color name into a custom-property name with exactly two leading
/// hyphens.
///
/// ```rust
/// use theme_vars::normalize_var_name;
///
/// assert_eq!(normalize_var_name("primary"), "--primary");
/// assert_eq!(normalize_var_name("---primary"), "--primary");
/// ```
pub fn normalize_var_name(name: &str) -> String {
    format!("--{}", name.trim_start_matches('-'))
}
