//! Analyze command: the full engine report for one document.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordlens_core::analysis::{AnalysisResult, Engine, LIMITED_LABEL};
use wordlens_core::config::AnalysisSettings;

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for standard input).
    pub file: Utf8PathBuf,

    /// Reading speed in words per minute (overrides config).
    #[arg(long)]
    pub wpm: Option<u32>,
}

/// Analyze a document and print the result.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    settings: &AnalysisSettings,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, wpm = ?args.wpm, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut settings = settings.clone();
    if let Some(wpm) = args.wpm {
        anyhow::ensure!(wpm > 0, "--wpm must be at least 1");
        settings.reading_wpm = wpm;
    }
    let result = Engine::new(settings).run(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&args.file, &result);
    Ok(())
}

fn print_report(file: &Utf8Path, r: &AnalysisResult) {
    println!("{}", file.bold());
    if r.degraded {
        println!("  {}", "Large document: scoring limited to counts and vocabulary".yellow());
    }

    println!("\n  {}", "Counts".cyan());
    println!(
        "    {} words, {} sentences, {} paragraphs",
        r.word_count, r.sentence_count, r.paragraph_count
    );
    println!(
        "    {} characters, {} spaces, ~{} min read",
        r.character_count, r.space_count, r.reading_time_minutes
    );

    println!("\n  {}", "Vocabulary".cyan());
    println!(
        "    {} unique, avg length {:.1}, density {:.1}%",
        r.unique_word_count, r.average_word_length, r.lexical_density_percent
    );
    if !r.longest_word.is_empty() {
        println!(
            "    longest {}, shortest {}",
            r.longest_word.bold(),
            r.shortest_word.bold()
        );
    }
    if !r.most_used_words.is_empty() {
        let top: Vec<String> = r
            .most_used_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        println!("    most used: {}", top.join(", "));
    }

    println!("\n  {}", "Signals".cyan());
    println!(
        "    {} {}",
        "Sentiment:".dimmed(),
        scored(r.sentiment_label.as_str(), r.sentiment_score, 2)
    );
    if !r.emotion_tones.is_empty() {
        println!("    {} {}", "Tones:".dimmed(), r.emotion_tones.join(", "));
    }
    println!(
        "    {} {}",
        "Readability:".dimmed(),
        scored(r.readability_label.as_str(), r.readability_score, 1)
    );
    println!(
        "    {} {}",
        "Formality:".dimmed(),
        scored(r.formality_label.as_str(), r.formality_score, 2)
    );
    if !r.topic_suggestions.is_empty() {
        println!("    {} {}", "Topics:".dimmed(), r.topic_suggestions.join(", "));
    }
}

fn scored(label: &str, score: f64, precision: usize) -> String {
    if label == LIMITED_LABEL {
        label.yellow().to_string()
    } else {
        format!("{} ({score:.precision$})", label.green())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_label_has_no_score() {
        let limited = scored(LIMITED_LABEL, 0.5, 2);
        assert!(limited.contains(LIMITED_LABEL));
        assert!(!limited.contains("0.50"));
        assert!(scored("Positive", 0.654, 2).ends_with("(0.65)"));
    }

    #[test]
    fn analyzes_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "I love this. This is great!").unwrap();
        let args = AnalyzeArgs {
            file: Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap(),
            wpm: Some(100),
        };
        assert!(cmd_analyze(args, true, &AnalysisSettings::default(), None).is_ok());
    }

    #[test]
    fn zero_wpm_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "text").unwrap();
        let args = AnalyzeArgs {
            file: Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap(),
            wpm: Some(0),
        };
        assert!(cmd_analyze(args, false, &AnalysisSettings::default(), None).is_err());
    }
}
