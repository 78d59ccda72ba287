//! wiredolphin CLI entry point.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wiredolphin::capture;
use wiredolphin::cli::Args;
use wiredolphin::session::{self, SessionOptions};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Logs go to stderr, frames to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    if args.list_interfaces {
        return list_interfaces();
    }

    let source = args
        .source()
        .context("A frame source is required: use --interface or --offline. See --help.")?;

    let mut frames = capture::open(&source, args.filter.as_deref())
        .with_context(|| format!("Failed to open {source}"))?;

    let options = SessionOptions {
        mode: args.verbosity(),
        count: args.count,
    };

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    session::run(frames.as_mut(), &mut sink, &options)
        .with_context(|| format!("Capture on {source} failed"))?;

    Ok(())
}

#[cfg(feature = "live")]
fn list_interfaces() -> Result<()> {
    let interfaces = capture::list_interfaces().context("Failed to list interfaces")?;
    for (name, description) in interfaces {
        match description {
            Some(description) => println!("{name:<16} {description}"),
            None => println!("{name}"),
        }
    }
    Ok(())
}

#[cfg(not(feature = "live"))]
fn list_interfaces() -> Result<()> {
    anyhow::bail!("Listing interfaces needs wiredolphin built with the `live` feature")
}
