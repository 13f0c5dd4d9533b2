//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::frequency::WordFrequencyMap;

/// Label shown in place of a score that was skipped in degraded mode.
pub const LIMITED_LABEL: &str = "Analysis limited";

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word, lowercase.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

impl WordCount {
    /// Create a new word count.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Overall polarity of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    /// Score above 0.7.
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// Score above 0.55.
    Positive,
    /// Score between 0.45 and 0.55.
    Neutral,
    /// Score below 0.45.
    Negative,
    /// Score below 0.3.
    #[serde(rename = "Very Negative")]
    VeryNegative,
    /// Not computed (degraded mode).
    #[serde(rename = "Analysis limited")]
    Limited,
}

impl SentimentLabel {
    /// Label for a clamped score.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::VeryPositive
        } else if score > 0.55 {
            Self::Positive
        } else if score < 0.3 {
            Self::VeryNegative
        } else if score < 0.45 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
            Self::Limited => LIMITED_LABEL,
        }
    }
}

/// Reading difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLabel {
    /// Score 90 and above.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Score 70 to 90.
    Easy,
    /// Score 50 to 70.
    Standard,
    /// Score 30 to 50.
    Difficult,
    /// Score below 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    /// No sentences or no words to score.
    #[serde(rename = "N/A")]
    NotApplicable,
    /// Not computed (degraded mode).
    #[serde(rename = "Analysis limited")]
    Limited,
}

impl ReadabilityLabel {
    /// Label for a clamped score.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::VeryDifficult
        } else if score < 50.0 {
            Self::Difficult
        } else if score < 70.0 {
            Self::Standard
        } else if score < 90.0 {
            Self::Easy
        } else {
            Self::VeryEasy
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Standard => "Standard",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::NotApplicable => "N/A",
            Self::Limited => LIMITED_LABEL,
        }
    }
}

/// Register of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FormalityLabel {
    /// Score above 0.7.
    #[serde(rename = "Very Formal")]
    VeryFormal,
    /// Score above 0.55.
    Formal,
    /// Score between 0.45 and 0.55.
    Neutral,
    /// Score below 0.45.
    Informal,
    /// Score below 0.3.
    #[serde(rename = "Very Informal")]
    VeryInformal,
    /// Not computed (degraded mode).
    #[serde(rename = "Analysis limited")]
    Limited,
}

impl FormalityLabel {
    /// Label for a clamped score.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::VeryFormal
        } else if score > 0.55 {
            Self::Formal
        } else if score < 0.3 {
            Self::VeryInformal
        } else if score < 0.45 {
            Self::Informal
        } else {
            Self::Neutral
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryFormal => "Very Formal",
            Self::Formal => "Formal",
            Self::Neutral => "Neutral",
            Self::Informal => "Informal",
            Self::VeryInformal => "Very Informal",
            Self::Limited => LIMITED_LABEL,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(SentimentLabel, ReadabilityLabel, FormalityLabel);

// -- Per-module reports ------------------------------------------------------

/// Counts and simple derived statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicMetrics {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Number of characters, whitespace included.
    pub character_count: usize,
    /// Number of literal space characters.
    pub space_count: usize,
    /// Estimated reading time, rounded up.
    pub reading_time_minutes: usize,
    /// Most frequent words, ties in first-seen order.
    pub most_used_words: Vec<WordCount>,
}

/// Vocabulary profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalProfile {
    /// Number of distinct words.
    pub unique_word_count: usize,
    /// Mean word length in characters.
    pub average_word_length: f64,
    /// First longest word, empty without words.
    pub longest_word: String,
    /// First shortest word, empty without words.
    pub shortest_word: String,
    /// Percentage of words the tagger classifies as content words.
    pub lexical_density_percent: f64,
}

/// Polarity and emotion estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentReport {
    /// Polarity band.
    pub label: SentimentLabel,
    /// Polarity score in `[0, 1]`, 0.5 is neutral.
    pub score: f64,
    /// Up to three dominant emotion categories.
    pub emotion_tones: Vec<String>,
}

impl SentimentReport {
    /// Result for text without any words.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.5,
            emotion_tones: Vec::new(),
        }
    }

    /// Placeholder used in degraded mode.
    pub fn limited() -> Self {
        Self {
            label: SentimentLabel::Limited,
            ..Self::neutral()
        }
    }
}

/// Reading difficulty estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Difficulty band.
    pub label: ReadabilityLabel,
    /// Score in `[0, 100]`, higher is easier.
    pub score: f64,
}

impl ReadabilityReport {
    /// Result when there is nothing to score.
    pub const fn not_applicable() -> Self {
        Self {
            label: ReadabilityLabel::NotApplicable,
            score: 0.0,
        }
    }

    /// Placeholder used in degraded mode.
    pub const fn limited() -> Self {
        Self {
            label: ReadabilityLabel::Limited,
            score: 0.0,
        }
    }
}

/// Register estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormalityReport {
    /// Register band.
    pub label: FormalityLabel,
    /// Score in `[0, 1]`, 0.5 is neutral.
    pub score: f64,
}

impl FormalityReport {
    /// Result for text without any words.
    pub const fn neutral() -> Self {
        Self {
            label: FormalityLabel::Neutral,
            score: 0.5,
        }
    }

    /// Placeholder used in degraded mode.
    pub const fn limited() -> Self {
        Self {
            label: FormalityLabel::Limited,
            score: 0.5,
        }
    }
}

// -- Combined result ---------------------------------------------------------

/// Everything the engine knows about one version of the text.
///
/// Immutable once produced. Every float is finite and clamped to its range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Number of characters, whitespace included.
    pub character_count: usize,
    /// Number of literal space characters.
    pub space_count: usize,
    /// Estimated reading time, rounded up.
    pub reading_time_minutes: usize,
    /// Number of distinct words.
    pub unique_word_count: usize,
    /// Mean word length in characters.
    pub average_word_length: f64,
    /// First longest word.
    pub longest_word: String,
    /// First shortest word.
    pub shortest_word: String,
    /// Percentage of content words, `[0, 100]`.
    pub lexical_density_percent: f64,
    /// Top words by frequency.
    pub most_used_words: Vec<WordCount>,
    /// Polarity band.
    pub sentiment_label: SentimentLabel,
    /// Polarity score, `[0, 1]`.
    pub sentiment_score: f64,
    /// Up to three dominant emotions.
    pub emotion_tones: Vec<String>,
    /// Difficulty band.
    pub readability_label: ReadabilityLabel,
    /// Readability score, `[0, 100]`.
    pub readability_score: f64,
    /// Register band.
    pub formality_label: FormalityLabel,
    /// Formality score, `[0, 1]`.
    pub formality_score: f64,
    /// Up to five topic labels or keywords.
    pub topic_suggestions: Vec<String>,
    /// Frequency of words longer than two characters.
    pub word_frequency: WordFrequencyMap,
    /// Whether the text was too large for the scoring modules.
    pub degraded: bool,
}

impl AnalysisResult {
    /// Combine module outputs into one result.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        basic: BasicMetrics,
        lexical: LexicalProfile,
        sentiment: SentimentReport,
        readability: ReadabilityReport,
        formality: FormalityReport,
        topic_suggestions: Vec<String>,
        word_frequency: WordFrequencyMap,
        degraded: bool,
    ) -> Self {
        Self {
            word_count: basic.word_count,
            sentence_count: basic.sentence_count,
            paragraph_count: basic.paragraph_count,
            character_count: basic.character_count,
            space_count: basic.space_count,
            reading_time_minutes: basic.reading_time_minutes,
            unique_word_count: lexical.unique_word_count,
            average_word_length: lexical.average_word_length,
            longest_word: lexical.longest_word,
            shortest_word: lexical.shortest_word,
            lexical_density_percent: lexical.lexical_density_percent,
            most_used_words: basic.most_used_words,
            sentiment_label: sentiment.label,
            sentiment_score: sentiment.score,
            emotion_tones: sentiment.emotion_tones,
            readability_label: readability.label,
            readability_score: readability.score,
            formality_label: formality.label,
            formality_score: formality.score,
            topic_suggestions,
            word_frequency,
            degraded,
        }
    }
}
