//! Core library for wordlens.
//!
//! This crate provides the text analytics engine, the incremental analysis
//! scheduler, and the configuration used by the `wordlens` CLI and any
//! downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - The engine and its scoring modules
//! - [`scheduler`] - Debounced, single-flight re-analysis of edited text
//! - [`text`] - Word, sentence, and paragraph tokenization
//! - [`lexicon`] - Word lists the scorers consult
//! - [`tagger`] - Word-class heuristics for lexical density
//! - [`transform`] - Whole-document text tools
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordlens_core::{AnalysisSettings, analyze_text};
//!
//! let result = analyze_text("I love this. This is great!", &AnalysisSettings::default());
//! assert_eq!(result.word_count, 6);
//! assert_eq!(result.sentence_count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod scheduler;
pub mod tagger;
pub mod text;
pub mod transform;

pub use analysis::{AnalysisResult, Engine, TextAnalyzer, WordCount, analyze_text, word_cloud};
pub use config::{AnalysisSettings, Config, ConfigLoader, LogLevel, SchedulerSettings};
pub use error::{AnalysisError, ConfigError, ConfigResult, EngineResult, TransformError};
pub use lexicon::Lexicon;
pub use scheduler::{AnalysisScheduler, LiveAnalyzer, ResultSink};
pub use transform::{Tool, Transform};

/// Default cap on input size read by the CLI and MCP server: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
