use std::env;

use anyhow::{Error, Result};
use pcstat::OutputFormat;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    pub(super) output: OutputSection,
    pub(super) histogram: HistogramSection,
}

/// `[output]` table: report format and record presentation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
    pub(super) format: Option<String>,
    pub(super) no_header: Option<bool>,
    pub(super) per_page_status: Option<bool>,
    pub(super) sort: Option<bool>,
    pub(super) basename: Option<bool>,
}

/// `[histogram]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HistogramSection {
    pub(super) width: Option<usize>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(output) = cli.output {
            self.output.format = Some(output.as_str().to_string());
        }
        if cli.no_header {
            self.output.no_header = Some(true);
        }
        if cli.per_page_status {
            self.output.per_page_status = Some(true);
        }
        if cli.sort {
            self.output.sort = Some(true);
        }
        if cli.basename {
            self.output.basename = Some(true);
        }
        if let Some(width) = cli.width {
            self.histogram.width = Some(width);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            output_format: detect_source(
                cli.output.is_some(),
                self.output.format.is_some(),
                "PCSTAT__OUTPUT__FORMAT",
                "--output",
                "output.format",
            ),
            histogram_width: detect_source(
                cli.width.is_some(),
                self.histogram.width.is_some(),
                "PCSTAT__HISTOGRAM__WIDTH",
                "--width",
                "histogram.width",
            ),
        };

        let format = match self.output.format {
            Some(name) => name.parse::<OutputFormat>().map_err(|err| {
                ConfigError::invalid(
                    "output.format",
                    name.clone(),
                    sources.source_for_format(),
                    err.to_string(),
                )
            })?,
            None => OutputFormat::default(),
        };

        let config = ResolvedConfig {
            format,
            no_header: self.output.no_header.unwrap_or(false),
            per_page_status: self.output.per_page_status.unwrap_or(false),
            sort: self.output.sort.unwrap_or(false),
            basename: self.output.basename.unwrap_or(false),
            display_width: self.histogram.width,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
