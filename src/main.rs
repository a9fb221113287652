use std::fs;

use anyhow::Context;
use clap::Parser;
use sashkit::{init_logging, render_config, CliArgs, WindowConfig};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_logging()?;

    let config = WindowConfig::load_or_default(args.config.as_deref()).with_context(|| {
        match &args.config {
            Some(path) => format!("loading {}", path.display()),
            None => "loading default configuration".to_string(),
        }
    })?;

    let document = render_config(&config, &args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote diagram");
        }
        None => println!("{document}"),
    }

    Ok(())
}
