//! # theme-vars - Theme Colors as CSS Custom Properties
//!
//! `theme-vars` turns a theme color config into the per-theme component
//! strings a utility-CSS build writes into custom properties. Colors are kept
//! as bare components (`255 0 0`, `0 100% 50%`) so stylesheets can wrap them
//! as `rgb(var(--primary) / 50%)` and still vary opacity.
//!
//! ## Core Concepts
//!
//! - [`ThemeColors`]: color names mapped to one color or a color per theme
//! - [`ThemeNormalizer`]: flattens colors into an [`OutputMap`]
//!   (`theme -> name -> components`)
//! - [`ColorParser`]: the injected strategy that breaks CSS strings into
//!   components; [`CssColorParser`] is the default
//! - [`ColorFormat`]: `rgb` keeps parsed components, `hsl` converts them
//! - [`render_css`]: writes an [`OutputMap`] as CSS rule blocks
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_vars::{color_components, ColorFormat, ThemeColorValue, ThemeColors};
//!
//! let colors = ThemeColors::new()
//!     .add("primary", "#ff0000")
//!     .add(
//!         "neutral",
//!         ThemeColorValue::variants([("light", "#ffffff"), ("dark", "#000000")]),
//!     );
//!
//! let output = color_components(&colors, "light", ColorFormat::Hsl);
//!
//! assert_eq!(output["light"]["primary"], "0 100% 50%");
//! assert_eq!(output["light"]["neutral"], "0 0% 100%");
//! assert_eq!(output["dark"]["neutral"], "0 0% 0%");
//! ```
//!
//! ## Resolution Rules
//!
//! - Component lists (`[255, 0, 0]`) are already final and are only joined.
//! - Strings the parser does not recognise are written through unchanged.
//! - Colors with alpha are written comma-separated: `255,0,0,0.5`. A zero
//!   numeric alpha counts as no alpha.
//! - In HSL format the first three parsed components are converted as RGB
//!   channels, whatever kind the parser reported.
//!
//! None of this fails: resolution has no error type. Errors only come from
//! loading configs ([`ThemeConfig`]) and are reported as [`ThemeVarsError`].

mod component;
mod config;
mod css;
mod error;
mod hsl;
mod parse;
mod resolve;
mod theme;
mod var_name;

pub use component::{format_number, ColorValue, Component};
pub use config::ThemeConfig;
pub use css::{render_css, write_css, CssOptions};
pub use error::{Result, ThemeVarsError};
pub use hsl::{components_to_hsl, rgb_to_hsl, Hsl};
pub use parse::{ColorParser, CssColorParser, ParsedColor};
pub use resolve::{resolve_color, ColorFormat};
pub use theme::{color_components, OutputMap, ThemeColorValue, ThemeColors, ThemeNormalizer};
pub use var_name::normalize_var_name;
