//! # SashKit
//!
//! Arched and rectangular window diagrams, built from a declarative
//! configuration and rendered as an ordered list of drawing primitives.
//!
//! ## Architecture
//!
//! SashKit is organized as a workspace with multiple crates:
//!
//! 1. **sashkit-core** - Window specification types, units, geometry errors
//! 2. **sashkit-designer** - Arc math, bar layout, base panels, openings,
//!    dimensions, the render pipeline and the SVG surface
//! 3. **sashkit-settings** - JSON/TOML configuration loading and validation
//! 4. **sashkit** - This crate: re-exports, logging setup and the CLI

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

pub use sashkit_core::{
    ArcType, BaseType, GeometryError, HorizontalOpening, MeasurementSystem, Point, Rect,
    VerticalOpening, WindowSpec, WindowType,
};
pub use sashkit_designer as designer;
pub use sashkit_designer::{
    diagnose, render_svg, render_window, Primitive, Role, Shape, Style, SvgOptions,
};
pub use sashkit_settings::{default_config_path, ConfigError, SettingsError, WindowConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Render a window configuration to SVG or JSON
#[derive(Parser, Debug, Clone, PartialEq, Default)]
#[command(name = "sashkit", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Window configuration (.toml or .json); defaults apply when omitted
    #[arg(value_parser)]
    pub config: Option<PathBuf>,
    /// Write the primitive list as JSON instead of SVG
    #[arg(long)]
    pub json: bool,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Approximate arcs with line segments
    #[arg(long)]
    pub flatten: bool,
    /// Fit the SVG view box to the drawing
    #[arg(long)]
    pub fit: bool,
}

/// Resolves a configuration and renders it in the requested format.
pub fn render_config(config: &WindowConfig, args: &CliArgs) -> anyhow::Result<String> {
    let spec = config.resolve();
    let primitives = render_window(&spec);
    tracing::info!(primitives = primitives.len(), "Rendered window");

    if args.json {
        return sashkit_designer::primitives::to_json(&primitives)
            .context("serializing primitives");
    }
    let options = SvgOptions {
        flatten_arcs: args.flatten,
        fit_to_content: args.fit,
        ..SvgOptions::for_spec(&spec)
    };
    Ok(render_svg(&primitives, &options))
}

/// Initialize logging with the default configuration
///
/// Output goes to stderr so rendered documents on stdout stay clean.
/// `RUST_LOG` refines the INFO default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(())
}
