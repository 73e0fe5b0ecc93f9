use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the esprint binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "esprint",
    version,
    about = "Print ESTree JSON expression trees as JavaScript source"
)]
pub struct CliArgs {
    /// JSON file holding one node. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// JSON file with format options (`compact`, `retainLines`, `indent`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Drop line breaks and indentation.
    #[arg(long)]
    pub compact: bool,

    /// Keep the original line structure; disables pretty-call expansion.
    #[arg(long = "retain-lines", alias = "retainLines")]
    pub retain_lines: bool,

    /// String used for one indentation level.
    #[arg(long)]
    pub indent: Option<String>,

    /// Write output here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
