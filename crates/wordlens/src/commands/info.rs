//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use wordlens_core::config::{AnalysisSettings, Config, ConfigSources, SchedulerSettings};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    analysis: AnalysisSettings,
    scheduler: SchedulerSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(
                config
                    .max_input_bytes
                    .unwrap_or(wordlens_core::DEFAULT_MAX_INPUT_BYTES),
            )
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            analysis: config.analysis.clone(),
            scheduler: config.scheduler.clone(),
            max_input_bytes,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: info,
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    let a = &cfg.analysis;
    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {} wpm", "Reading speed".dimmed(), a.reading_wpm);
    println!("{}: {} characters", "Limited above".dimmed(), a.extreme_text_chars);
    println!(
        "{}: {} words, {} tones, {} topics ({} categories), {} cloud words",
        "Limits".dimmed(),
        a.most_used_limit,
        a.emotion_tone_limit,
        a.topic_limit,
        a.topic_category_limit,
        a.word_cloud_limit
    );

    let s = &cfg.scheduler;
    println!();
    println!("{}", "Live analysis".bold().underline());
    println!(
        "{}: {} ms, {} ms above {} characters",
        "Debounce".dimmed(),
        s.debounce_ms,
        s.large_debounce_ms,
        s.large_text_chars
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &Config::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &Config::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.max_input_bytes, Some(wordlens_core::DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_config_info_limit_disabled() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
