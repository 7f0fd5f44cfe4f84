//! # Arrangement CLI
//!
//! Command-line front end for `arrangement-core`: reads a bound, runs the
//! search and renders the result as text or JSON. All user-facing text
//! lives here; the core only sees validated bounds.

pub mod config;
pub mod errors;

pub use config::*;
pub use errors::*;

use arrangement_core::{Arrangement, Bound};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt shown when no bound is given on the command line or in the config
pub const PROMPT: &str = "Enter a natural number: ";

/// Ask for a bound on `output` and read one line from `input`
pub fn prompt_bound<R: BufRead, W: Write>(mut input: R, mut output: W) -> CliResult<Bound> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::NoInput);
    }
    Ok(line.parse::<Bound>()?)
}

/// Run the search for `config.count` arrangements above `bound`
pub fn search(config: &CliConfig, bound: &Bound) -> Vec<Arrangement> {
    info!(bound = %bound, count = config.count, "Starting arrangement search");
    let found: Vec<Arrangement> = if config.count == 1 {
        vec![bound.find_arrangement()]
    } else {
        bound.arrangements_above().take(config.count).collect()
    };
    debug!(found = found.len(), "Search finished");
    found
}

/// Render arrangements as labelled text
pub fn render_text(bound: &Bound, arrangements: &[Arrangement]) -> String {
    let mut out = format!(
        "First arrangement (of > {} discs) s.t. probability of two blues is exactly 1/2:\n",
        bound
    );
    for (i, arrangement) in arrangements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("  Total = {}\n", arrangement.total));
        out.push_str(&format!("  Blue  = {}\n", arrangement.blue));
    }
    out
}

/// Render arrangements as a JSON array
pub fn render_json(arrangements: &[Arrangement]) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(arrangements)?)
}

/// Search and render according to `config`
pub fn run(config: &CliConfig, bound: &Bound) -> CliResult<String> {
    let found = search(config, bound);
    match config.output_format {
        OutputFormat::Text => Ok(render_text(bound, &found)),
        OutputFormat::Json => render_json(&found),
    }
}
