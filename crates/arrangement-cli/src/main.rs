//! Arranged Probability Binary
//!
//! Prints the first two-colour disc arrangement above a bound for which two
//! blues are drawn with probability exactly 1/2.
//!
//! ## Usage
//!
//! ```bash
//! arranged-probability 1000000000000
//! arranged-probability 21 --count 3 --format json
//! ```

use arrangement_cli::{
    prompt_bound, run, CliConfig, CliConfigBuilder, CliError, CliResult, OutputFormat,
};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find disc arrangements where P[two blues] = 1/2
#[derive(Parser, Debug)]
#[command(name = "arranged-probability")]
#[command(version)]
#[command(about = "First disc arrangement above a bound with P[BB] = 1/2", long_about = None)]
struct Args {
    /// Lower bound on the total disc count (prompted for when omitted)
    bound: Option<String>,

    /// Number of arrangements to report
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Generate sample configuration file
    #[arg(long)]
    generate_config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = execute(args) {
        report_failure(&e, std::io::stderr());
        std::process::exit(1);
    }
}

/// Write a failure as a single `error:` line
fn report_failure<W: Write>(err: &CliError, mut out: W) {
    let _ = writeln!(out, "error: {}", err);
}

fn execute(args: Args) -> CliResult<()> {
    // Handle generate-config option
    if let Some(path) = args.generate_config {
        CliConfig::sample().save_to_file(&path)?;
        println!("Generated sample configuration at: {}", path.display());
        return Ok(());
    }

    let base = match &args.config {
        Some(path) => CliConfig::load_from_file(path)?,
        None => CliConfig::default(),
    };
    let config = apply_overrides(CliConfigBuilder::from_config(base), &args).build()?;

    init_logging(&config.log_level);
    if let Some(path) = &args.config {
        info!("Loaded configuration from: {}", path.display());
    }

    let bound = match config.parsed_bound()? {
        Some(bound) => bound,
        None => prompt_bound(std::io::stdin().lock(), std::io::stdout())?,
    };

    print!("{}", run(&config, &bound)?);
    Ok(())
}

fn apply_overrides(mut builder: CliConfigBuilder, args: &Args) -> CliConfigBuilder {
    if let Some(bound) = &args.bound {
        builder = builder.bound(bound.as_str());
    }
    if let Some(count) = args.count {
        builder = builder.count(count);
    }
    if let Some(format) = args.format {
        builder = builder.output_format(format);
    }
    if let Some(level) = &args.log_level {
        builder = builder.log_level(level.as_str());
    }
    builder
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["arranged-probability", "21", "--count", "3", "-f", "json"]);
        assert_eq!(args.bound.as_deref(), Some("21"));
        assert_eq!(args.count, Some(3));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_overrides_beat_config() {
        let args = Args::parse_from(["arranged-probability", "100", "--log-level", "debug"]);
        let base = CliConfig::builder().bound("5").count(2).build().unwrap();
        let config = apply_overrides(CliConfigBuilder::from_config(base), &args)
            .build()
            .unwrap();
        assert_eq!(config.bound.as_deref(), Some("100"));
        assert_eq!(config.count, 2);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_failure_reported_once() {
        let err = CliError::Arrangement(
            "0".parse::<arrangement_core::Bound>().unwrap_err(),
        );
        let mut out = Vec::new();
        report_failure(&err, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("error: Invalid argument: "));
    }

    #[test]
    fn test_bound_optional() {
        let args = Args::parse_from(["arranged-probability"]);
        assert!(args.bound.is_none());
    }
}
