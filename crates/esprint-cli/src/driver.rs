use anyhow::{Context, Result};
use esprint_ast::Node;
use esprint_emitter::print_node;
use std::io::{Read, Write};
use std::path::Path;

use crate::args::CliArgs;
use crate::config::resolve_format_options;

/// Read the input document from a file, or stdin for `None` / `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

pub fn parse_node(text: &str) -> Result<Node> {
    serde_json::from_str(text).context("input is not a supported ESTree node")
}

/// Print one JSON document with the options resolved from `args`.
pub fn render(args: &CliArgs, text: &str) -> Result<String> {
    let options = resolve_format_options(args)?;
    let node = parse_node(text)?;
    tracing::debug!(kind = %node.kind(), "parsed input");
    print_node(&node, options).context("failed to print node")
}

/// Read, print and write: the whole CLI pass.
pub fn run(args: &CliArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let mut output = render(args, &text)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match &args.output {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
