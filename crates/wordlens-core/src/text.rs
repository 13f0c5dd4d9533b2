//! Tokenization.
//!
//! Splits raw text into the three streams every analysis module consumes:
//! lowercase word tokens, sentences, and paragraphs. The boundary rules are
//! deliberately simple so counts stay stable while the user types.
//!
//! A word is a maximal run of ASCII letters, digits, or underscores in the
//! lowercased text. Apostrophes split contractions (`don't` → `don`, `t`) and
//! non-ASCII letters act as boundaries (`café` → `caf`). Callers relying on
//! token counts depend on this behavior, so it stays as is.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A word token.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9_]+").expect("valid regex"));

/// One or more newlines.
static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// One or more sentence terminators.
static TERMINATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A sentence and the punctuation that closed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    /// Sentence text, trimmed, without its terminator. Empty when the piece
    /// was only whitespace.
    pub text: String,
    /// The run of `.`, `!`, `?` that ended the sentence. Empty for trailing
    /// text with no closing punctuation.
    pub terminator: String,
}

impl Sentence {
    /// Whether the sentence ended with a question mark.
    pub fn is_question(&self) -> bool {
        self.terminator.contains('?')
    }

    /// Whether the sentence ended with an exclamation mark.
    pub fn is_exclamation(&self) -> bool {
        self.terminator.contains('!')
    }

    /// Word tokens of this sentence.
    pub fn words(&self) -> Vec<String> {
        extract_words(&self.text)
    }
}

/// Tokenizer output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStreams {
    /// Lowercase word tokens in source order, duplicates retained.
    pub words: Vec<String>,
    /// Sentences in source order.
    pub sentences: Vec<Sentence>,
    /// Paragraphs in source order, trimmed. Whitespace-only paragraphs are
    /// kept as empty strings.
    pub paragraphs: Vec<String>,
}

impl TokenStreams {
    /// Whether the text produced no words, sentences, or paragraphs.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty() && self.paragraphs.is_empty()
    }
}

/// Split text into words, sentences, and paragraphs.
///
/// Empty or whitespace-only input yields three empty lists.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> TokenStreams {
    if text.trim().is_empty() {
        return TokenStreams::default();
    }

    TokenStreams {
        words: extract_words(text),
        sentences: split_sentences(text),
        paragraphs: split_paragraphs(text),
    }
}

/// Extract lowercase word tokens.
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Only empty pieces are dropped. Whitespace after the last terminator is a
/// sentence of its own, so `"Hi. "` is two sentences and `"Hi."` is one.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for run in TERMINATOR_RUN.find_iter(text) {
        push_sentence(&mut sentences, &text[start..run.start()], run.as_str());
        start = run.end();
    }
    push_sentence(&mut sentences, &text[start..], "");

    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, piece: &str, terminator: &str) {
    if !piece.is_empty() {
        sentences.push(Sentence {
            text: piece.trim().to_string(),
            terminator: terminator.to_string(),
        });
    }
}

/// Split text into paragraphs on runs of newlines.
///
/// Only empty pieces are dropped; a line of spaces between two newlines is a
/// paragraph.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    NEWLINE_RUN
        .split(text)
        .filter(|p| !p.is_empty())
        .map(|p| p.trim().to_string())
        .collect()
}
