//! Logging setup for the CLI.
//!
//! Logs go to a JSONL file through a non-blocking `tracing-appender`
//! writer, never to stdout, so command output stays machine readable.
//! Filter precedence: `RUST_LOG` > `-q`/`-v` flags > config `log_level`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable naming an exact log file.
pub const LOG_PATH_ENV: &str = "WORDLENS_LOG_PATH";
/// Environment variable naming a log directory.
pub const LOG_DIR_ENV: &str = "WORDLENS_LOG_DIR";

const LOG_FILE_NAME: &str = "wordlens.jsonl";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: PathBuf,
    /// File name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log location.
    ///
    /// `WORDLENS_LOG_PATH` wins, then `WORDLENS_LOG_DIR`, then the configured
    /// directory, then the platform data directory, then the system temp dir.
    pub fn from_env_with_overrides(config_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name()
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: dir,
                file_name: name.to_string_lossy().into_owned(),
            };
        }

        let log_dir = log_dir
            .or(config_dir)
            .or_else(|| {
                wordlens_core::config::user_data_local_dir().map(|d| d.join("logs").into_std_path_buf())
            })
            .unwrap_or_else(|| std::env::temp_dir().join("wordlens"));

        Self {
            log_dir,
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

/// Build the level filter from `RUST_LOG`, the CLI flags, and the config level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(flag_level(quiet, verbose, config_level))
}

fn flag_level(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// for the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&config.log_dir, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/custom.log")),
            Some(PathBuf::from("/ignored")),
            Some(PathBuf::from("/also-ignored")),
        );
        assert_eq!(config.log_dir, PathBuf::from("/var/log"));
        assert_eq!(config.file_name, "custom.log");
    }

    #[test]
    fn bare_file_name_logs_to_cwd() {
        let config = ObservabilityConfig::resolve(Some(PathBuf::from("out.jsonl")), None, None);
        assert_eq!(config.log_dir, PathBuf::from("."));
        assert_eq!(config.file_name, "out.jsonl");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env/logs")),
            Some(PathBuf::from("/config/logs")),
        );
        assert_eq!(config.log_dir, PathBuf::from("/env/logs"));
        assert_eq!(config.file_name, LOG_FILE_NAME);
    }

    #[test]
    fn config_dir_used_when_env_unset() {
        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/config/logs")));
        assert_eq!(config.log_dir, PathBuf::from("/config/logs"));
    }

    #[test]
    fn flags_override_config_level() {
        assert_eq!(flag_level(true, 2, "info"), "error");
        assert_eq!(flag_level(false, 0, "warn"), "warn");
        assert_eq!(flag_level(false, 1, "warn"), "debug");
        assert_eq!(flag_level(false, 3, "warn"), "trace");
    }
}
