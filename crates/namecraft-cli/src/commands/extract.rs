//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use namecraft_extractor::ListExtractor;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    println!("{}", render(&raw, &args, config, formatter)?);
    Ok(())
}

/// Run the extractor over `raw` and format the result.
fn render(raw: &str, args: &ExtractArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let policy = args
        .policy
        .map(Into::into)
        .unwrap_or(config.extractor.terminator_policy);
    let extractor = ListExtractor::with_policy(policy);

    if args.sections {
        formatter.format_sections(&extractor.sections(raw))
    } else {
        formatter.format_extraction(&extractor.extract(raw))
    }
}

/// Read the whole input file, or stdin when no file is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
