//! Transform command: apply one text tool to a document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use wordlens_core::transform::Tool;

use super::read_input_file;

/// Arguments for the `transform` subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Text tool to apply.
    #[arg(value_enum)]
    pub tool: Tool,

    /// File to transform (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Regex to search for (find-replace only).
    #[arg(long, required_if_eq("tool", "find-replace"))]
    pub find: Option<String>,

    /// Replacement text, `$1` expands capture groups (find-replace only).
    #[arg(long, default_value = "")]
    pub replace: String,
}

/// Print the transformed document to stdout.
#[instrument(name = "cmd_transform", skip_all, fields(file = %args.file, tool = ?args.tool))]
pub fn cmd_transform(args: TransformArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, tool = ?args.tool, "executing transform command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let transform = args.tool.into_transform(args.find, Some(args.replace));
    let output = transform
        .apply(&content)
        .with_context(|| format!("failed to transform {}", args.file))?;

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
