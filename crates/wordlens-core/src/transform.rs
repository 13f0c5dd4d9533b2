//! Whole-document text tools.
//!
//! Each tool takes the full document and returns a new one. None of them
//! touch the analysis path; the result is fed back in as an ordinary edit.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// A word character followed by the rest of its non-space run.
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\S*").expect("valid regex"));

/// Runs of whitespace.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// The available text tools, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Convert all text to uppercase.
    Uppercase,
    /// Convert all text to lowercase.
    Lowercase,
    /// Capitalize the first letter of each word.
    TitleCase,
    /// Remove leading and trailing whitespace.
    Trim,
    /// Replace whitespace runs with a single space.
    CollapseSpaces,
    /// Reverse the order of characters.
    ReverseText,
    /// Reverse the order of words.
    ReverseWords,
    /// Pretty-print JSON.
    FormatJson,
    /// Strip indentation from every line.
    AlignLeft,
    /// Center every line within the longest line.
    AlignCenter,
    /// Right-align every line to the longest line.
    AlignRight,
    /// Regex find and replace.
    FindReplace,
}

impl Tool {
    /// Build the transform this tool names.
    ///
    /// `find` and `replace` are only used by [`Tool::FindReplace`]; a missing
    /// pattern makes it a no-op.
    pub fn into_transform(self, find: Option<String>, replace: Option<String>) -> Transform {
        match self {
            Self::Uppercase => Transform::Uppercase,
            Self::Lowercase => Transform::Lowercase,
            Self::TitleCase => Transform::TitleCase,
            Self::Trim => Transform::Trim,
            Self::CollapseSpaces => Transform::CollapseSpaces,
            Self::ReverseText => Transform::ReverseText,
            Self::ReverseWords => Transform::ReverseWords,
            Self::FormatJson => Transform::FormatJson,
            Self::AlignLeft => Transform::AlignLeft,
            Self::AlignCenter => Transform::AlignCenter,
            Self::AlignRight => Transform::AlignRight,
            Self::FindReplace => Transform::FindReplace {
                find: find.unwrap_or_default(),
                replace: replace.unwrap_or_default(),
            },
        }
    }
}

/// A fully specified text transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Convert all text to uppercase.
    Uppercase,
    /// Convert all text to lowercase.
    Lowercase,
    /// Capitalize the first word character of each non-space run and
    /// lowercase the rest of the run.
    TitleCase,
    /// Remove leading and trailing whitespace.
    Trim,
    /// Replace whitespace runs with one space, then trim.
    CollapseSpaces,
    /// Reverse the order of characters.
    ReverseText,
    /// Reverse the order of whitespace-separated words.
    ReverseWords,
    /// Parse as JSON and pretty-print with two-space indentation.
    FormatJson,
    /// Remove leading whitespace from every line.
    AlignLeft,
    /// Trim every line and indent it by half the gap to the longest trimmed line.
    AlignCenter,
    /// Trim every line and indent it to end at the longest line's length.
    AlignRight,
    /// Replace every match of the `find` regex with `replace`.
    FindReplace {
        /// Regular expression to search for. Empty means no change.
        find: String,
        /// Replacement text; `$1`-style group references are expanded.
        replace: String,
    },
}

impl Transform {
    /// Apply the transform to `text`.
    ///
    /// # Errors
    ///
    /// [`TransformError::InvalidJson`] when `FormatJson` is given text that
    /// does not parse, [`TransformError::InvalidPattern`] when the
    /// `FindReplace` pattern does not compile.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn apply(&self, text: &str) -> Result<String, TransformError> {
        let out = match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::TitleCase => title_case(text),
            Self::Trim => text.trim().to_string(),
            Self::CollapseSpaces => WHITESPACE_RUN.replace_all(text, " ").trim().to_string(),
            Self::ReverseText => text.chars().rev().collect(),
            Self::ReverseWords => {
                let mut words: Vec<&str> = text.split_whitespace().collect();
                words.reverse();
                words.join(" ")
            }
            Self::FormatJson => {
                let value: serde_json::Value = serde_json::from_str(text)?;
                serde_json::to_string_pretty(&value)?
            }
            Self::AlignLeft => text
                .split('\n')
                .map(str::trim_start)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::AlignCenter => align_center(text),
            Self::AlignRight => align_right(text),
            Self::FindReplace { find, replace } => {
                if find.is_empty() {
                    return Ok(text.to_string());
                }
                let pattern = Regex::new(find)?;
                pattern.replace_all(text, replace.as_str()).into_owned()
            }
        };
        Ok(out)
    }
}

fn title_case(text: &str) -> String {
    WORD_RUN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let mut chars = caps[0].chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
            })
        })
        .into_owned()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn align_center(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let widest = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
    lines
        .iter()
        .map(|line| format!("{}{line}", " ".repeat((widest - char_len(line)) / 2)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn align_right(text: &str) -> String {
    let widest = text.split('\n').map(char_len).max().unwrap_or(0);
    text.split('\n')
        .map(str::trim)
        .map(|line| format!("{}{line}", " ".repeat(widest.saturating_sub(char_len(line)))))
        .collect::<Vec<_>>()
        .join("\n")
}
