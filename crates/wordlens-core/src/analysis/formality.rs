//! Register estimation from vocabulary and sentence shape.
//!
//! Formal and informal marker words are counted directly. Short sentences,
//! questions, and exclamations lean informal regardless of vocabulary, so
//! their combined share inflates the informal count in proportion to the
//! length of the text.

use crate::lexicon::Lexicon;
use crate::text::Sentence;

use super::reports::{FormalityLabel, FormalityReport};

/// Sentences with fewer words than this count as short.
const SHORT_SENTENCE_WORDS: usize = 8;

/// Weight of the combined sentence-shape ratios.
const STRUCTURE_WEIGHT: f64 = 0.05;

/// Estimate how formal the text reads.
#[tracing::instrument(skip_all, fields(words = words.len(), sentences = sentences.len()))]
pub fn analyze_formality(
    words: &[String],
    sentences: &[Sentence],
    lexicon: &Lexicon,
) -> FormalityReport {
    if words.is_empty() {
        return FormalityReport::neutral();
    }

    let formal = words
        .iter()
        .filter(|w| lexicon.formal.contains(w.as_str()))
        .count() as f64;
    let informal = words
        .iter()
        .filter(|w| lexicon.informal.contains(w.as_str()))
        .count() as f64;

    let structure = structure_ratio(sentences);
    let word_count = words.len() as f64;
    let adjusted_informal = (structure * STRUCTURE_WEIGHT).mul_add(word_count, informal);

    let raw = 0.5 + (formal - adjusted_informal) / word_count.max(1.0) * 3.0;
    let score = raw.clamp(0.0, 1.0);

    FormalityReport {
        label: FormalityLabel::from_score(score),
        score,
    }
}

/// Sum of the short, question, and exclamation sentence ratios.
fn structure_ratio(sentences: &[Sentence]) -> f64 {
    let total = sentences.len().max(1) as f64;
    let mut short = 0usize;
    let mut questions = 0usize;
    let mut exclamations = 0usize;

    for sentence in sentences {
        if sentence.words().len() < SHORT_SENTENCE_WORDS {
            short += 1;
        }
        if sentence.is_question() {
            questions += 1;
        }
        if sentence.is_exclamation() {
            exclamations += 1;
        }
    }

    (short + questions + exclamations) as f64 / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{extract_words, split_sentences};

    fn formality(text: &str) -> FormalityReport {
        analyze_formality(
            &extract_words(text),
            &split_sentences(text),
            Lexicon::english(),
        )
    }

    #[test]
    fn empty_is_neutral() {
        assert_eq!(formality(""), FormalityReport::neutral());
    }

    #[test]
    fn formal_connectives_raise_score() {
        let report = formality(
            "The committee shall therefore establish a framework, and furthermore it will \
             subsequently indicate the sufficient requirements for every member of the board.",
        );
        assert!(report.score > 0.55, "score {}", report.score);
        assert!(matches!(
            report.label,
            FormalityLabel::Formal | FormalityLabel::VeryFormal
        ));
    }

    #[test]
    fn slang_and_contractions_lower_score() {
        let report = formality("Hey guys! Yeah, I'm gonna grab some stuff, ok?");
        assert!(report.score < 0.3, "score {}", report.score);
        assert_eq!(report.label, FormalityLabel::VeryInformal);
    }

    #[test]
    fn short_exclamations_lean_informal_without_markers() {
        let plain = formality(
            "The report covers the results of the quarterly review for the regional office.",
        );
        let punchy = formality("The report covers results! The review went well! See it!");
        assert!(punchy.score < plain.score);
    }

    #[test]
    fn structure_ratio_counts_each_shape() {
        let sentences = split_sentences("Why? Stop! This sentence has more than eight words in it today.");
        // short: 2, questions: 1, exclamations: 1 over 3 sentences.
        assert!((structure_ratio(&sentences) - 4.0 / 3.0).abs() < 1e-9);
    }
}
