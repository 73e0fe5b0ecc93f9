use anyhow::{Context, Result};
use esprint_emitter::FormatOptions;
use std::path::Path;

use crate::args::CliArgs;

/// Read format options from a JSON file. Absent fields keep their defaults.
pub fn load_format_options(path: &Path) -> Result<FormatOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Resolve the effective options: config file first, then command-line flags.
///
/// Boolean flags can only switch a setting on.
pub fn resolve_format_options(args: &CliArgs) -> Result<FormatOptions> {
    let mut options = match &args.config {
        Some(path) => load_format_options(path)?,
        None => FormatOptions::default(),
    };

    if args.compact {
        options.compact = true;
    }
    if args.retain_lines {
        options.retain_lines = true;
    }
    if let Some(indent) = &args.indent {
        options.indent.clone_from(indent);
    }

    tracing::debug!(?options, "resolved format options");
    Ok(options)
}
