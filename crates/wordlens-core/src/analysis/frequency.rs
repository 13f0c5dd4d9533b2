//! Word frequency counting and ranking.

use std::collections::{BTreeMap, HashMap};

use super::reports::WordCount;

/// Word → occurrence count, for words longer than two characters.
///
/// Ordered by word so serialized output is deterministic.
pub type WordFrequencyMap = BTreeMap<String, usize>;

/// Count every word longer than two characters.
pub fn word_frequency(words: &[String]) -> WordFrequencyMap {
    let mut freq = WordFrequencyMap::new();
    for w in words.iter().filter(|w| w.chars().count() > 2) {
        *freq.entry(w.clone()).or_insert(0) += 1;
    }
    freq
}

/// Count words, keeping the order in which each word first appeared.
pub fn counts_in_first_seen_order<'a, I>(words: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in words {
        if let Some(&slot) = index.get(word) {
            counts[slot].1 += 1;
        } else {
            index.insert(word, counts.len());
            counts.push((word, 1));
        }
    }
    counts
}

/// Sort by descending count. The sort is stable, so equal counts keep their
/// incoming order.
pub fn rank_by_count(mut counts: Vec<(&str, usize)>, limit: usize) -> Vec<WordCount> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount::new(word, count))
        .collect()
}

/// Subset of the frequency map handed to word-cloud renderers.
///
/// Keeps words seen more than once and longer than two characters, most
/// frequent first (ties alphabetical), at most `limit` entries.
#[tracing::instrument(skip(freq), fields(distinct = freq.len()))]
pub fn word_cloud(freq: &WordFrequencyMap, limit: usize) -> Vec<WordCount> {
    let eligible: Vec<(&str, usize)> = freq
        .iter()
        .filter(|(word, count)| **count > 1 && word.chars().count() > 2)
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    rank_by_count(eligible, limit)
}
