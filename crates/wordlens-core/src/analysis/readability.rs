//! Readability scoring.
//!
//! Formula: `100 − (0.39 × words/sentences + 11.8 × long_word_share)`
//!
//! A simplified Flesch-style estimate: long words (more than six characters)
//! stand in for syllable counts. Higher is easier, clamped to `[0, 100]`.

use super::reports::{ReadabilityLabel, ReadabilityReport};

/// Words longer than this count as long words.
const LONG_WORD_CHARS: usize = 6;

/// Score reading difficulty from the word tokens and sentence count.
///
/// Returns `N/A` with a score of 0 when there are no words or no sentences.
#[tracing::instrument(skip(words), fields(words = words.len()))]
pub fn analyze_readability(words: &[String], sentence_count: usize) -> ReadabilityReport {
    if words.is_empty() || sentence_count == 0 {
        return ReadabilityReport::not_applicable();
    }

    let word_count = words.len() as f64;
    let words_per_sentence = word_count / sentence_count as f64;
    let long_words = words
        .iter()
        .filter(|w| w.chars().count() > LONG_WORD_CHARS)
        .count();
    let long_word_percent = long_words as f64 / word_count * 100.0;

    let raw = 100.0 - 0.39f64.mul_add(words_per_sentence, 11.8 * (long_word_percent / 100.0));
    let score = raw.clamp(0.0, 100.0);

    ReadabilityReport {
        label: ReadabilityLabel::from_score(score),
        score,
    }
}
