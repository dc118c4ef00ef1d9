use std::fmt;

/// Where a configured value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) output_format: Option<SettingSource>,
    pub(crate) histogram_width: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_format(&self) -> SettingSource {
        self.output_format
            .clone()
            .unwrap_or(SettingSource::ConfigKey("output.format"))
    }

    pub(crate) fn source_for_width(&self) -> SettingSource {
        self.histogram_width
            .clone()
            .unwrap_or(SettingSource::ConfigKey("histogram.width"))
    }
}
