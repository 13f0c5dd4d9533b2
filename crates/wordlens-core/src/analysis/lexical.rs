//! Vocabulary profile: uniqueness, word length extremes, lexical density.

use std::collections::HashSet;

use crate::tagger::WordClassTagger;

use super::reports::LexicalProfile;

/// Profile the vocabulary of `words`.
///
/// Longest and shortest word use a strict comparison during a single scan,
/// so the first word reaching the extreme wins ties. Lexical density is only
/// as good as `tagger`; with [`crate::tagger::HeuristicTagger`] it is a rough
/// surface-pattern estimate.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn analyze_lexical_profile(words: &[String], tagger: &dyn WordClassTagger) -> LexicalProfile {
    let Some(first) = words.first() else {
        return LexicalProfile::default();
    };

    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();

    let mut total_len = 0usize;
    let mut longest = first;
    let mut shortest = first;
    let mut content = 0usize;

    for w in words {
        let len = w.chars().count();
        total_len += len;
        if len > longest.chars().count() {
            longest = w;
        }
        if len < shortest.chars().count() {
            shortest = w;
        }
        if tagger.is_content_word(w) {
            content += 1;
        }
    }

    let count = words.len() as f64;
    LexicalProfile {
        unique_word_count: unique.len(),
        average_word_length: total_len as f64 / count,
        longest_word: longest.clone(),
        shortest_word: shortest.clone(),
        lexical_density_percent: (content as f64 / count * 100.0).clamp(0.0, 100.0),
    }
}
