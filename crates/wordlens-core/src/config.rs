//! Layered configuration for wordlens.
//!
//! Settings come from, lowest precedence first: built-in defaults, the user
//! config file (`config.<ext>` in the platform config dir), project files
//! found by walking up from the working directory, files passed explicitly,
//! and finally `WORDLENS_` environment variables. Nested keys use a double
//! underscore, so `WORDLENS_ANALYSIS__READING_WPM=250` sets
//! `analysis.reading_wpm`.
//!
//! Project files are named `.wordlens.<ext>` or `wordlens.<ext>` with `<ext>`
//! one of `toml`, `yaml`, `yml`, `json`. Only the closest directory holding
//! any of them is used; inside it every match is merged, dotfiles first. The
//! walk stops at a directory containing `.git`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wordlens_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! assert_eq!(config.analysis.reading_wpm, 200);
//! ```

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Thresholds and limits used by the analysis engine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Assumed reading speed in words per minute.
    pub reading_wpm: u32,
    /// How many entries `most_used_words` holds.
    pub most_used_limit: usize,
    /// How many emotion tones are reported.
    pub emotion_tone_limit: usize,
    /// Total number of topic suggestions.
    pub topic_limit: usize,
    /// How many of the topic suggestions may be category labels.
    pub topic_category_limit: usize,
    /// Texts with more characters than this run in degraded mode.
    pub extreme_text_chars: usize,
    /// Maximum number of words in the word-cloud subset.
    pub word_cloud_limit: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            reading_wpm: 200,
            most_used_limit: 5,
            emotion_tone_limit: 3,
            topic_limit: 5,
            topic_category_limit: 3,
            extreme_text_chars: 50_000,
            word_cloud_limit: 50,
        }
    }
}

/// Debounce timing for the incremental analysis scheduler.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Debounce delay for ordinary text, in milliseconds.
    pub debounce_ms: u64,
    /// Debounce delay for large text, in milliseconds.
    pub large_debounce_ms: u64,
    /// Texts with more characters than this use the large delay.
    pub large_text_chars: usize,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            large_debounce_ms: 500,
            large_text_chars: 10_000,
        }
    }
}

impl SchedulerSettings {
    /// Debounce delay for a document of `chars` characters.
    pub const fn debounce_for(&self, chars: usize) -> Duration {
        if chars > self.large_text_chars {
            Duration::from_millis(self.large_debounce_ms)
        } else {
            Duration::from_millis(self.debounce_ms)
        }
    }
}

/// The configuration for wordlens.
///
/// Deserialized from config files found during discovery (TOML, YAML, or JSON).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Engine thresholds and limits.
    pub analysis: AnalysisSettings,
    /// Scheduler debounce timing.
    pub scheduler: SchedulerSettings,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    #[serde(default)]
    pub disable_input_limit: bool,
}

impl Config {
    /// Reject settings the engine or scheduler cannot honor.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.analysis.reading_wpm == 0 {
            return Err(ConfigError::Invalid {
                key: "analysis.reading_wpm",
                reason: "reading speed must be at least 1 word per minute".to_string(),
            });
        }
        if self.scheduler.large_text_chars > self.analysis.extreme_text_chars {
            return Err(ConfigError::Invalid {
                key: "scheduler.large_text_chars",
                reason: format!(
                    "{} exceeds analysis.extreme_text_chars ({})",
                    self.scheduler.large_text_chars, self.analysis.extreme_text_chars
                ),
            });
        }
        Ok(())
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Merge order inside one directory; later extensions win.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "wordlens";

/// Collects configuration sources and merges them into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Directory the project walk starts from.
    project_search_root: Option<Utf8PathBuf>,
    /// Read `config.<ext>` from the user config dir.
    include_user_config: bool,
    /// Walk stops at a directory containing this entry.
    boundary_marker: Option<String>,
    /// Extra files, merged after everything discovered.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Loader with user config enabled and `.git` as the boundary.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project files from `path` upward.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/wordlens/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward walk at a directory containing `marker`.
    ///
    /// Files next to the marker are still found.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Walk to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` after all discovered files. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `WORDLENS_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/wordlens/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // WORDLENS_LOG_LEVEL=debug, WORDLENS_SCHEDULER__DEBOUNCE_MS=50, etc.
        figment = figment.merge(Env::prefixed("WORDLENS_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            reading_wpm = config.analysis.reading_wpm,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Project files from the closest directory that has any.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, dotfiles before regular files (low→high precedence).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;

        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Format follows the extension; anything unknown is read as TOML.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Platform config dir for wordlens, e.g. `~/.config/wordlens` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Platform local data dir; the default parent of the log directory.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}
