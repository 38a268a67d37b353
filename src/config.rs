use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Apex configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ApexConfig {
    /// Window scan settings.
    #[serde(default)]
    pub window: WindowToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

impl ApexConfig {
    /// Loads the configuration from a TOML file, or returns the
    /// built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// `[window]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    /// Window length in samples (seconds, at one sample per second).
    #[serde(default = "default_window_len")]
    pub len: usize,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            len: default_window_len(),
        }
    }
}

fn default_window_len() -> usize {
    apex_window::DEFAULT_WINDOW_LEN
}

/// `[report]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    /// Maximum ranked rows per segment. Absent means all combatants.
    #[serde(default)]
    pub top: Option<usize>,

    /// Length of the analysis segment opened by each mark, in
    /// milliseconds.
    #[serde(default = "default_segment_ms")]
    pub segment_ms: i64,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            top: None,
            segment_ms: default_segment_ms(),
        }
    }
}

fn default_segment_ms() -> i64 {
    45_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ApexConfig::default();
        assert_eq!(cfg.window.len, 15);
        assert_eq!(cfg.report.top, None);
        assert_eq!(cfg.report.segment_ms, 45_000);
    }

    #[test]
    fn test_parse_empty_toml() {
        let cfg: ApexConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.window.len, 15);
        assert_eq!(cfg.report.segment_ms, 45_000);
    }

    #[test]
    fn test_parse_partial_toml() {
        let cfg: ApexConfig = toml::from_str(
            r#"
            [window]
            len = 30

            [report]
            top = 4
            "#,
        )
        .unwrap();
        assert_eq!(cfg.window.len, 30);
        assert_eq!(cfg.report.top, Some(4));
        assert_eq!(cfg.report.segment_ms, 45_000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ApexConfig, _> = toml::from_str(
            r#"
            [window]
            size = 30
            "#,
        );
        assert!(result.is_err());
    }
}
