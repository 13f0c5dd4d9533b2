//! Counts and simple derived statistics.

use crate::config::AnalysisSettings;
use crate::text::TokenStreams;

use super::frequency::{counts_in_first_seen_order, rank_by_count};
use super::reports::BasicMetrics;

/// Compute word, sentence, paragraph, character, and space counts, reading
/// time, and the most used words.
///
/// `text` is the raw input; character and space counts come from it rather
/// than from the token streams.
#[tracing::instrument(skip_all, fields(words = streams.words.len()))]
pub fn analyze_basic_metrics(
    text: &str,
    streams: &TokenStreams,
    settings: &AnalysisSettings,
) -> BasicMetrics {
    let word_count = streams.words.len();
    let wpm = settings.reading_wpm.max(1) as usize;

    let counts = counts_in_first_seen_order(streams.words.iter().map(String::as_str));

    BasicMetrics {
        word_count,
        sentence_count: streams.sentences.len(),
        paragraph_count: streams.paragraphs.len(),
        character_count: text.chars().count(),
        space_count: text.chars().filter(|&c| c == ' ').count(),
        reading_time_minutes: word_count.div_ceil(wpm),
        most_used_words: rank_by_count(counts, settings.most_used_limit),
    }
}
