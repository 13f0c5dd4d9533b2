//! The text analytics engine.
//!
//! Decomposes analysis into independent modules, each a pure function of the
//! token streams, orchestrated by [`Engine`]:
//!
//! - [`basic`]: counts, reading time, most used words
//! - [`lexical`]: uniqueness, word length extremes, lexical density
//! - [`sentiment`]: polarity and emotion tones
//! - [`readability`]: difficulty score
//! - [`formality`]: register score
//! - [`topics`]: category and keyword suggestions
//! - [`frequency`]: word frequency map and word-cloud subset
//!
//! Callers can also invoke modules individually.

pub mod basic;
pub mod formality;
pub mod frequency;
pub mod lexical;
pub mod readability;
pub mod reports;
pub mod sentiment;
pub mod topics;

use std::sync::Arc;

pub use frequency::{WordFrequencyMap, word_cloud};
pub use reports::{
    AnalysisResult, BasicMetrics, FormalityLabel, FormalityReport, LIMITED_LABEL,
    LexicalProfile, ReadabilityLabel, ReadabilityReport, SentimentLabel, SentimentReport,
    WordCount,
};

use crate::config::AnalysisSettings;
use crate::error::EngineResult;
use crate::lexicon::Lexicon;
use crate::tagger::{HeuristicTagger, WordClassTagger};
use crate::text;

/// Something that turns a document into an [`AnalysisResult`].
///
/// The scheduler runs analyses through this trait so the engine can be
/// replaced, for instance by a failing stub in tests.
pub trait TextAnalyzer: Send + Sync {
    /// Analyze one version of the document.
    fn analyze(&self, text: &str) -> EngineResult<AnalysisResult>;
}

impl<F> TextAnalyzer for F
where
    F: Fn(&str) -> EngineResult<AnalysisResult> + Send + Sync,
{
    fn analyze(&self, text: &str) -> EngineResult<AnalysisResult> {
        self(text)
    }
}

/// The analysis engine: settings, lexicon, and word-class tagger.
///
/// Holds no mutable state, so one engine can analyze any number of texts
/// and identical input always produces an identical result.
#[derive(Clone)]
pub struct Engine {
    settings: AnalysisSettings,
    lexicon: Arc<Lexicon>,
    tagger: Arc<dyn WordClassTagger + Send + Sync>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}

impl Engine {
    /// Engine with the built-in English lexicon and the heuristic tagger.
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings,
            lexicon: Arc::new(Lexicon::english().clone()),
            tagger: Arc::new(HeuristicTagger),
        }
    }

    /// Replace the lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    /// Replace the word-class tagger used for lexical density.
    #[must_use]
    pub fn with_tagger<T>(mut self, tagger: T) -> Self
    where
        T: WordClassTagger + Send + Sync + 'static,
    {
        self.tagger = Arc::new(tagger);
        self
    }

    /// The engine's thresholds and limits.
    pub const fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Whether `text` is large enough to run in degraded mode.
    pub fn is_degraded(&self, text: &str) -> bool {
        text.chars().count() > self.settings.extreme_text_chars
    }

    /// Analyze `text`.
    ///
    /// Above the extreme size threshold only counts, the lexical profile,
    /// and word frequency are computed; the scoring fields carry
    /// [`LIMITED_LABEL`] placeholders with neutral scores.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn run(&self, text: &str) -> AnalysisResult {
        let streams = text::tokenize(text);
        let settings = &self.settings;

        let basic = basic::analyze_basic_metrics(text, &streams, settings);
        let lexical = lexical::analyze_lexical_profile(&streams.words, self.tagger.as_ref());
        let word_frequency = frequency::word_frequency(&streams.words);

        if self.is_degraded(text) {
            tracing::debug!(
                chars = basic.character_count,
                limit = settings.extreme_text_chars,
                "text above extreme threshold, scoring skipped"
            );
            return AnalysisResult::assemble(
                basic,
                lexical,
                SentimentReport::limited(),
                ReadabilityReport::limited(),
                FormalityReport::limited(),
                Vec::new(),
                word_frequency,
                true,
            );
        }

        let sentiment = sentiment::analyze_sentiment(
            &streams.sentences,
            streams.words.len(),
            &self.lexicon,
            settings.emotion_tone_limit,
        );
        let readability =
            readability::analyze_readability(&streams.words, streams.sentences.len());
        let formality =
            formality::analyze_formality(&streams.words, &streams.sentences, &self.lexicon);
        let topic_suggestions = topics::suggest_topics(
            &streams.words,
            &self.lexicon,
            topics::TopicLimits {
                categories: settings.topic_category_limit,
                total: settings.topic_limit,
            },
        );

        AnalysisResult::assemble(
            basic,
            lexical,
            sentiment,
            readability,
            formality,
            topic_suggestions,
            word_frequency,
            false,
        )
    }

    /// Word-cloud subset of a result's frequency map, capped by the
    /// configured limit.
    pub fn word_cloud(&self, result: &AnalysisResult) -> Vec<WordCount> {
        word_cloud(&result.word_frequency, self.settings.word_cloud_limit)
    }
}

impl TextAnalyzer for Engine {
    fn analyze(&self, text: &str) -> EngineResult<AnalysisResult> {
        Ok(self.run(text))
    }
}

/// Analyze `text` with the default lexicon and tagger.
pub fn analyze_text(text: &str, settings: &AnalysisSettings) -> AnalysisResult {
    Engine::new(settings.clone()).run(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> AnalysisResult {
        analyze_text(text, &AnalysisSettings::default())
    }

    #[test]
    fn empty_input() {
        let result = analyze("");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(result.readability_label, ReadabilityLabel::NotApplicable);
        assert_eq!(result.formality_label, FormalityLabel::Neutral);
        assert!(result.topic_suggestions.is_empty());
        assert!(result.most_used_words.is_empty());
        assert!(!result.degraded);
    }

    #[test]
    fn punctuation_or_non_ascii_only_has_no_words() {
        for text in ["...", "?!", "日本語"] {
            let result = analyze(text);
            assert_eq!(result.word_count, 0, "{text}");
            assert_eq!(result.unique_word_count, 0, "{text}");
            assert_eq!(result.readability_label, ReadabilityLabel::NotApplicable);
        }
        assert_eq!(analyze("日本語").character_count, 3);
    }

    #[test]
    fn positive_scenario() {
        let result = analyze("I love this. This is great!");
        assert!(matches!(
            result.sentiment_label,
            SentimentLabel::Positive | SentimentLabel::VeryPositive
        ));
        assert_eq!(result.sentence_count, 2);
        assert!(result.emotion_tones.contains(&"love".to_string()));
    }

    #[test]
    fn negation_scenario() {
        let result = analyze("This is not good.");
        assert!(result.sentiment_score < 0.5);
    }

    #[test]
    fn most_used_scenario() {
        let result = analyze("cat cat dog");
        assert_eq!(
            result.most_used_words,
            vec![WordCount::new("cat", 2), WordCount::new("dog", 1)]
        );
        assert_eq!(result.unique_word_count, 2);
    }

    #[test]
    fn degraded_mode_above_extreme_threshold() {
        let text = "lorem ipsum ".repeat(5_000);
        assert_eq!(text.chars().count(), 60_000);

        let result = analyze(&text);
        assert!(result.degraded);
        assert_eq!(result.word_count, 10_000);
        assert_eq!(result.sentiment_label, SentimentLabel::Limited);
        assert_eq!(result.readability_label, ReadabilityLabel::Limited);
        assert_eq!(result.formality_label, FormalityLabel::Limited);
        assert!((result.sentiment_score - 0.5).abs() < f64::EPSILON);
        assert!((result.formality_score - 0.5).abs() < f64::EPSILON);
        assert!(result.topic_suggestions.is_empty());
        assert!(result.emotion_tones.is_empty());
        assert_eq!(result.word_frequency.get("lorem"), Some(&5_000));
    }

    #[test]
    fn degraded_threshold_is_configurable() {
        let settings = AnalysisSettings {
            extreme_text_chars: 10,
            ..AnalysisSettings::default()
        };
        let engine = Engine::new(settings);
        assert!(!engine.is_degraded("short text"));
        assert!(engine.run("slightly longer text").degraded);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let text = "The software team loves the new release! Not bad at all. Really good work.";
        let engine = Engine::default();
        let first = engine.run(text);
        let second = engine.run(text);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn word_cloud_uses_configured_limit() {
        let engine = Engine::new(AnalysisSettings {
            word_cloud_limit: 1,
            ..AnalysisSettings::default()
        });
        let result = engine.run("alpha alpha beta beta beta gamma");
        assert_eq!(engine.word_cloud(&result), vec![WordCount::new("beta", 3)]);
    }

    #[test]
    fn closures_are_analyzers() {
        let failing = |_: &str| -> EngineResult<AnalysisResult> {
            Err(crate::error::AnalysisError::Failed("boom".to_string()))
        };
        assert!(failing.analyze("text").is_err());
        assert!(Engine::default().analyze("text").is_ok());
    }
}
