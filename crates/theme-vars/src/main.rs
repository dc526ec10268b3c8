//! `theme-vars` command line: flatten a theme config and print CSS or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use theme_vars::{render_css, ColorFormat, ThemeConfig};
use tracing_subscriber::EnvFilter;

/// Print theme colors as CSS custom properties.
#[derive(Debug, Parser)]
#[command(name = "theme-vars", version, about)]
struct Cli {
    /// Theme config file (.yaml, .yml or .json)
    config: PathBuf,

    /// Output color format, overriding the config
    #[arg(short, long)]
    format: Option<ColorFormat>,

    /// Default theme name, overriding the config
    #[arg(short = 't', long)]
    default_theme: Option<String>,

    /// Print the flattened map as JSON instead of CSS
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("THEME_VARS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ThemeConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(theme) = cli.default_theme {
        config.default_theme = theme;
    }

    let output = config.color_components();

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("serializing output")?;
        println!("{}", json);
    } else {
        let css = render_css(&output, &config.css_options()).context("rendering css")?;
        print!("{}", css);
    }

    Ok(())
}
