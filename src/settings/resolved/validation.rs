use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
    if config.display_width == Some(0) {
        return Err(ConfigError::invalid(
            "histogram.width",
            "0",
            sources.source_for_width(),
            "must be greater than zero",
        ));
    }

    Ok(())
}
