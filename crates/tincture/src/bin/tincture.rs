//! Renders a styled format string from the command line.
//!
//! ```text
//! tincture --styles styles.yaml "<title>%@</title>: <count>%d</count> files" src 42
//! ```
//!
//! Warnings are logged to stderr. Set `RUST_LOG` to change the filter
//! (default `warn`).

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tincture::{FnSink, FormatArg, Styles, Tincture, TracingSink, WarningSink};
use tracing_subscriber::EnvFilter;

/// Render a printf-style format string with <tag> markup
#[derive(Parser, Debug)]
#[command(name = "tincture")]
#[command(version)]
#[command(about = "Render a printf-style format string with <tag> markup")]
struct Cli {
    /// YAML stylesheet mapping tag names to styles
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// Print without ANSI escape sequences
    #[arg(long)]
    plain: bool,

    /// Exit with an error if any warning was emitted
    #[arg(long)]
    strict: bool,

    /// Show placeholders as written instead of substituting arguments
    #[arg(long)]
    literal: bool,

    /// The format string
    format: String,

    /// Placeholder arguments: integers, floats, anything else is a string
    args: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Picks the narrowest argument type `raw` parses as.
fn infer_arg(raw: &str) -> FormatArg {
    if let Ok(value) = raw.parse::<i64>() {
        FormatArg::Int(value)
    } else if let Ok(value) = raw.parse::<u64>() {
        FormatArg::UInt(value)
    } else if let Ok(value) = raw.parse::<f64>() {
        FormatArg::Float(value)
    } else {
        FormatArg::Str(raw.to_string())
    }
}

fn load_styles(path: Option<&PathBuf>) -> Result<Styles> {
    let Some(path) = path else {
        return Ok(Styles::new());
    };
    let styles = Styles::from_file(path)
        .with_context(|| format!("failed to load stylesheet {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = styles.len(), "loaded stylesheet");
    Ok(styles)
}

fn run(cli: Cli) -> Result<()> {
    let styles = load_styles(cli.styles.as_ref())?;

    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let sink = FnSink(move |warning| {
        counter.fetch_add(1, Ordering::Relaxed);
        TracingSink.warning(warning);
    });
    let tincture = Tincture::new(styles).with_sink(sink);

    let text = if cli.literal {
        tincture.styled(&cli.format)
    } else {
        let args: Vec<FormatArg> = cli.args.iter().map(|raw| infer_arg(raw)).collect();
        tincture.format(&cli.format, &args)
    };

    let use_color = !cli.plain && console::Term::stdout().features().colors_supported();
    if use_color {
        println!("{}", text.to_ansi());
    } else {
        println!("{}", text.to_plain());
    }

    let warnings = count.load(Ordering::Relaxed);
    if cli.strict && warnings > 0 {
        bail!("{warnings} warning(s) emitted");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}
