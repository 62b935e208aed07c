//! Configuration file loading and CLI override resolution.
//!
//! The file is optional. Its format follows the extension (`.toml`,
//! `.yaml`/`.yml`, anything else is JSON). CLI flags win over file values;
//! built-in defaults fill whatever is left.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use bugscope_report::types::Mode;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::output::OutputFormat;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bugscope.toml";

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub mode: Option<String>,
    pub language: Option<String>,
    pub format: Option<String>,
    pub log_level: Option<String>,
}

/// Effective settings after merging CLI, file and defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Duration,
    pub mode: Mode,
    pub language: Option<String>,
    pub format: OutputFormat,
    pub log_level: String,
}

/// CLI options that can override config file settings.
///
/// Keeps the library free of clap types; the binary implements it on its
/// argument struct.
pub trait CliOptions {
    fn endpoint(&self) -> Option<String>;
    fn timeout_ms(&self) -> Option<u64>;
    fn mode(&self) -> Option<Mode>;
    fn language(&self) -> Option<String>;
    fn format(&self) -> Option<OutputFormat>;
    fn log_level(&self) -> Option<String>;
}

pub fn load_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg: Config = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse yaml config {}", path.display()))?,
        "toml" => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?,
        _ => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json config {}", path.display()))?,
    };
    Ok(Some(cfg))
}

/// Resolve settings. CLI options take precedence over config file settings.
pub fn resolve_settings<C: CliOptions>(cli: &C, config: Option<&Config>) -> Result<Settings> {
    let file = config.cloned().unwrap_or_default();

    let endpoint = cli
        .endpoint()
        .or(file.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let timeout = cli
        .timeout_ms()
        .or(file.timeout_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT);
    if timeout.is_zero() {
        return Err(anyhow!("timeout_ms must be greater than zero"));
    }

    let mode = match cli.mode() {
        Some(mode) => mode,
        None => match file.mode.as_deref() {
            Some(raw) => raw
                .parse::<Mode>()
                .map_err(|err| anyhow!("invalid mode in config: {err}"))?,
            None => Mode::default(),
        },
    };

    let format = match cli.format() {
        Some(format) => format,
        None => match file.format.as_deref() {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|err| anyhow!("invalid format in config: {err}"))?,
            None => OutputFormat::default(),
        },
    };

    Ok(Settings {
        endpoint,
        timeout,
        mode,
        language: cli.language().or(file.language),
        format,
        log_level: cli
            .log_level()
            .or(file.log_level)
            .unwrap_or_else(|| "info".to_string()),
    })
}
