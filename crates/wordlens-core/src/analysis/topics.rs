//! Topic category and keyword extraction.

use crate::lexicon::Lexicon;

use super::frequency::counts_in_first_seen_order;

/// Words this short never count as significant.
const MIN_SIGNIFICANT_CHARS: usize = 4;

/// How many suggestions of each kind to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicLimits {
    /// Maximum number of category labels.
    pub categories: usize,
    /// Maximum number of suggestions overall.
    pub total: usize,
}

impl Default for TopicLimits {
    fn default() -> Self {
        Self {
            categories: 3,
            total: 5,
        }
    }
}

/// Suggest topics for the text.
///
/// Category labels come first (strongest first, ties in lexicon order),
/// followed by the most frequent significant words that do not repeat a
/// label already listed.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn suggest_topics(words: &[String], lexicon: &Lexicon, limits: TopicLimits) -> Vec<String> {
    let significant = words
        .iter()
        .map(String::as_str)
        .filter(|w| {
            !lexicon.stop_words.contains(*w) && w.chars().count() >= MIN_SIGNIFICANT_CHARS
        });
    let mut frequencies = counts_in_first_seen_order(significant);
    if frequencies.is_empty() {
        return Vec::new();
    }

    let mut category_scores: Vec<(usize, usize)> = lexicon
        .topics
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let score = frequencies
                .iter()
                .filter(|(word, _)| category.contains(word))
                .map(|(_, count)| count)
                .sum();
            (idx, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();
    category_scores.sort_by(|a, b| b.1.cmp(&a.1));

    let mut suggestions: Vec<String> = category_scores
        .into_iter()
        .take(limits.categories.min(limits.total))
        .map(|(idx, _)| lexicon.topics[idx].label.to_string())
        .collect();

    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    for (word, _) in frequencies {
        if suggestions.len() >= limits.total {
            break;
        }
        if !suggestions.iter().any(|s| s.eq_ignore_ascii_case(word)) {
            suggestions.push(word.to_string());
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::extract_words;

    fn topics(text: &str) -> Vec<String> {
        suggest_topics(&extract_words(text), Lexicon::english(), TopicLimits::default())
    }

    #[test]
    fn empty_text_has_no_topics() {
        assert!(topics("").is_empty());
        assert!(topics("the a an it is").is_empty());
    }

    #[test]
    fn categories_lead_then_keywords() {
        let result = topics(
            "Our software team ships code to the cloud. The software runs on every device, \
             and customers love the software.",
        );
        assert_eq!(result[0], "Technology");
        assert!(result.contains(&"software".to_string()));
        assert!(result.len() <= 5);
    }

    #[test]
    fn category_name_is_not_repeated_as_keyword() {
        let result = topics("health health health clinic");
        assert_eq!(result, vec!["Health", "clinic"]);
    }

    #[test]
    fn at_most_three_categories() {
        let result = topics(
            "software market school doctor election movie football climate software market",
        );
        assert_eq!(result.len(), 5);
        assert_eq!(&result[..3], ["Technology", "Business", "Education"]);
        // The two slots left go to the most frequent words, first seen first.
        assert_eq!(&result[3..], ["software", "market"]);
    }

    #[test]
    fn short_and_stop_words_are_ignored() {
        let result = topics("cats cats the the the dogs");
        assert_eq!(result, vec!["cats", "dogs"]);
    }
}
