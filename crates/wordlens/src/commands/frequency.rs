//! Frequency command: the word-cloud subset of a document.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordlens_core::analysis::{frequency, word_cloud};
use wordlens_core::config::AnalysisSettings;
use wordlens_core::text;

use super::read_input_file;

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// File to read (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Maximum number of words to show (overrides config).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Print words that occur more than once, most frequent first.
#[instrument(name = "cmd_frequency", skip_all, fields(file = %args.file))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    settings: &AnalysisSettings,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = ?args.limit, "executing frequency command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let limit = args.limit.unwrap_or(settings.word_cloud_limit);

    let words = text::extract_words(&content);
    let cloud = word_cloud(&frequency::word_frequency(&words), limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&cloud)?);
        return Ok(());
    }

    if cloud.is_empty() {
        println!("{}", "No repeated words".dimmed());
        return Ok(());
    }

    let width = cloud.iter().map(|w| w.word.len()).max().unwrap_or(0);
    for entry in &cloud {
        println!("{:<width$}  {}", entry.word, entry.count.to_string().cyan());
    }
    Ok(())
}
