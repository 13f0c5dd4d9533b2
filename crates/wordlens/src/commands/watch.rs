//! Watch command: live re-analysis of a document streamed on stdin.
//!
//! Every input line is an edit. The accumulated document goes to a
//! [`LiveAnalyzer`], which debounces bursts of edits and prints one summary
//! per delivered result. End of input flushes the last pending edit.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument, warn};

use wordlens_core::analysis::{AnalysisResult, Engine};
use wordlens_core::config::Config;
use wordlens_core::scheduler::LiveAnalyzer;

use super::check_input_size;

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug, Default)]
pub struct WatchArgs {
    /// Treat each line as the complete document instead of appending it.
    #[arg(long)]
    pub replace: bool,
}

/// Read edits from stdin until it closes, printing results as they arrive.
#[instrument(name = "cmd_watch", skip_all, fields(replace = args.replace))]
pub async fn cmd_watch(
    args: WatchArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(replace = args.replace, "executing watch command");

    let engine = Engine::new(config.analysis.clone());
    let live = LiveAnalyzer::spawn(
        engine,
        config.scheduler.clone(),
        move |result: Arc<AnalysisResult>| print_result(&result, global_json),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut document = String::new();
    let mut appended = false;
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read standard input")?
    {
        if args.replace {
            document = line;
        } else {
            if appended {
                document.push('\n');
            }
            document.push_str(&line);
            appended = true;
        }
        check_input_size(&document, max_input_bytes)?;
        live.update(document.clone())?;
    }

    live.shutdown().await;
    Ok(())
}

fn print_result(result: &AnalysisResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(error = %e, "failed to serialize analysis result"),
        }
        return;
    }
    println!("{}", summary_line(result));
}

fn summary_line(r: &AnalysisResult) -> String {
    format!(
        "{} words {} sentences {} {} {} {} {} {}",
        r.word_count.bold(),
        r.sentence_count.bold(),
        "|".dimmed(),
        r.sentiment_label.green(),
        "|".dimmed(),
        r.readability_label.cyan(),
        "|".dimmed(),
        r.formality_label.magenta(),
    )
}
