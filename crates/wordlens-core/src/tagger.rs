//! Word-class tagging for lexical density.
//!
//! [`HeuristicTagger`] guesses a word class from surface patterns alone. It is
//! a crude stand-in for part-of-speech tagging and is not linguistically
//! accurate: `"apple"` is a noun because it starts with a vowel, and so is
//! `"under"`. The rules are kept exactly as they are because lexical density
//! figures depend on them. A real tagger can replace it through the
//! [`WordClassTagger`] trait without touching callers.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse word class of a content word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// Naming word.
    Noun,
    /// Action word.
    Verb,
    /// Describing word.
    Adjective,
    /// Modifier of verbs and adjectives.
    Adverb,
}

/// Assigns a word class to content words.
pub trait WordClassTagger {
    /// Class of `word`, or `None` for a function word.
    fn classify(&self, word: &str) -> Option<WordClass>;

    /// Whether `word` counts towards lexical density.
    fn is_content_word(&self, word: &str) -> bool {
        self.classify(word).is_some()
    }
}

static ADJECTIVE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(ous|ful|able|ible|less|ive|al)$").expect("valid regex"));

/// Surface-pattern tagger.
///
/// First matching rule wins:
/// 1. starts with `a`, `e`, `i`, `o`, `u` → noun
/// 2. ends in `ing` → verb
/// 3. ends in `ous`, `ful`, `able`, `ible`, `less`, `ive`, `al` → adjective
/// 4. ends in `ly` → adverb
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl WordClassTagger for HeuristicTagger {
    fn classify(&self, word: &str) -> Option<WordClass> {
        let lower = word.to_ascii_lowercase();
        if lower.starts_with(['a', 'e', 'i', 'o', 'u']) {
            Some(WordClass::Noun)
        } else if lower.ends_with("ing") {
            Some(WordClass::Verb)
        } else if ADJECTIVE_SUFFIX.is_match(&lower) {
            Some(WordClass::Adjective)
        } else if lower.ends_with("ly") {
            Some(WordClass::Adverb)
        } else {
            None
        }
    }
}
