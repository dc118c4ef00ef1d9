use pcstat::{OutputFormat, RenderOptions, terminal};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) format: OutputFormat,
    pub(crate) no_header: bool,
    pub(crate) per_page_status: bool,
    pub(crate) sort: bool,
    pub(crate) basename: bool,
    /// Fixed histogram width; the terminal is asked when unset.
    pub(crate) display_width: Option<usize>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Options handed to the renderer. Only histograms query the terminal.
    pub(crate) fn render_options(&self) -> RenderOptions {
        let display_width = match (self.format, self.display_width) {
            (_, Some(width)) => width,
            (OutputFormat::Histogram, None) => terminal::display_width(),
            (_, None) => RenderOptions::default().display_width,
        };
        RenderOptions {
            no_header: self.no_header,
            clear_per_page_status: !self.per_page_status,
            display_width,
        }
    }

    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        summary::print_summary(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(format: OutputFormat) -> ResolvedConfig {
        ResolvedConfig {
            format,
            no_header: true,
            per_page_status: false,
            sort: false,
            basename: false,
            display_width: Some(100),
        }
    }

    #[test]
    fn render_options_follow_the_config() {
        let options = config(OutputFormat::Histogram).render_options();
        assert!(options.no_header);
        assert!(options.clear_per_page_status);
        assert_eq!(options.display_width, 100);
    }

    #[test]
    fn per_page_status_keeps_the_vector() {
        let resolved = ResolvedConfig {
            per_page_status: true,
            ..config(OutputFormat::Json)
        };
        assert!(!resolved.render_options().clear_per_page_status);
    }
}
