//! Lexicon-based sentiment and emotion tone estimation.
//!
//! Each sentence is scanned once. A polarity word is weighted by the word
//! directly before it in the same sentence:
//!
//! | Preceded by   | Positive word | Negative word |
//! |---------------|---------------|---------------|
//! | nothing       | +1            | −1            |
//! | intensifier   | +2            | −2            |
//! | diminisher    | +0.5          | −0.5          |
//! | negation      | −1            | +1            |
//!
//! The score is `0.5 + (positive − negative) / N × 5` where `N` is the word
//! count, scaled by intensifier and diminisher density, then pulled towards
//! 0.5 when negations are frequent enough to make polarity unreliable.

use crate::lexicon::Lexicon;
use crate::text::Sentence;

use super::reports::{SentimentLabel, SentimentReport};

/// Raw evidence gathered from the text before scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarityTally {
    /// Weighted positive evidence.
    pub positive: f64,
    /// Weighted negative evidence.
    pub negative: f64,
    /// Intensifier occurrences.
    pub intensifiers: usize,
    /// Diminisher occurrences.
    pub diminishers: usize,
    /// Negation occurrences.
    pub negations: usize,
    /// Net count per emotion category, in lexicon order.
    pub emotions: Vec<i64>,
}

/// Negation density above which the score regresses towards neutral.
const NEGATION_DENSITY_THRESHOLD: f64 = 0.05;

/// Estimate polarity and dominant emotions.
///
/// `word_count` is the token count of the whole text; `tone_limit` caps the
/// number of emotion tones returned. Text without words is neutral.
#[tracing::instrument(skip_all, fields(sentences = sentences.len(), word_count))]
pub fn analyze_sentiment(
    sentences: &[Sentence],
    word_count: usize,
    lexicon: &Lexicon,
    tone_limit: usize,
) -> SentimentReport {
    if word_count == 0 {
        return SentimentReport::neutral();
    }

    let tally = tally_polarity(sentences, lexicon);
    let score = score_tally(&tally, word_count);

    SentimentReport {
        label: SentimentLabel::from_score(score),
        score,
        emotion_tones: dominant_tones(&tally.emotions, lexicon, tone_limit),
    }
}

/// Collect weighted polarity, modifier counts, and emotion counts.
pub fn tally_polarity(sentences: &[Sentence], lexicon: &Lexicon) -> PolarityTally {
    let mut tally = PolarityTally {
        emotions: vec![0; lexicon.emotions.len()],
        ..PolarityTally::default()
    };

    for sentence in sentences {
        let words = sentence.words();
        let mut previous: Option<&str> = None;

        for word in &words {
            let word = word.as_str();
            let negated = previous.is_some_and(|p| lexicon.negations.contains(p));

            if lexicon.negations.contains(word) {
                tally.negations += 1;
            }
            if lexicon.intensifiers.contains(word) {
                tally.intensifiers += 1;
            }
            if lexicon.diminishers.contains(word) {
                tally.diminishers += 1;
            }

            let polarity = if lexicon.positive.contains(word) {
                1.0
            } else if lexicon.negative.contains(word) {
                -1.0
            } else {
                0.0
            };
            if polarity != 0.0 {
                let weighted = polarity * modifier_weight(previous, lexicon);
                if weighted > 0.0 {
                    tally.positive += weighted;
                } else {
                    tally.negative -= weighted;
                }
            }

            for (slot, category) in tally.emotions.iter_mut().zip(&lexicon.emotions) {
                if category.contains(word) {
                    *slot += if negated { -1 } else { 1 };
                }
            }

            previous = Some(word);
        }
    }

    tally
}

/// Multiplier the preceding word applies to a polarity word.
fn modifier_weight(previous: Option<&str>, lexicon: &Lexicon) -> f64 {
    match previous {
        Some(p) if lexicon.negations.contains(p) => -1.0,
        Some(p) if lexicon.intensifiers.contains(p) => 2.0,
        Some(p) if lexicon.diminishers.contains(p) => 0.5,
        _ => 1.0,
    }
}

/// Turn a tally into a score in `[0, 1]`.
pub fn score_tally(tally: &PolarityTally, word_count: usize) -> f64 {
    let n = word_count.max(1) as f64;

    let mut score = 0.5 + (tally.positive / n - tally.negative / n) * 5.0;

    let intensifier_ratio = tally.intensifiers as f64 / n;
    let diminisher_ratio = tally.diminishers as f64 / n;
    score *= 1.0 + intensifier_ratio * 0.15 - diminisher_ratio * 0.1;

    let negation_density = tally.negations as f64 / n;
    if negation_density > NEGATION_DENSITY_THRESHOLD {
        let pull = negation_density.min(1.0);
        score = score * (1.0 - pull) + 0.5 * pull;
    }

    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Categories with positive net counts, strongest first, ties in lexicon order.
fn dominant_tones(emotions: &[i64], lexicon: &Lexicon, limit: usize) -> Vec<String> {
    let mut ranked: Vec<(usize, i64)> = emotions
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, net)| *net > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(idx, _)| lexicon.emotions[idx].name.to_string())
        .collect()
}
