use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    eprint!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
    let width = match config.display_width {
        Some(width) => width.to_string(),
        None => "(terminal)".to_string(),
    };
    format!(
        "Effective configuration:\n  \
         Output format: {}\n  \
         Header: {}\n  \
         Per-page status: {}\n  \
         Sort by cached pages: {}\n  \
         Basenames: {}\n  \
         Histogram width: {width}\n",
        config.format,
        bool_to_word(!config.no_header),
        bool_to_word(config.per_page_status),
        bool_to_word(config.sort),
        bool_to_word(config.basename),
    )
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use pcstat::OutputFormat;

    use super::*;

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(super::bool_to_word(true), "yes");
        assert_eq!(super::bool_to_word(false), "no");
    }

    #[test]
    fn summary_lists_every_setting() {
        let config = ResolvedConfig {
            format: OutputFormat::Terse,
            no_header: true,
            per_page_status: false,
            sort: true,
            basename: false,
            display_width: None,
        };

        let summary = render_summary(&config);
        assert!(summary.contains("Output format: terse"));
        assert!(summary.contains("Header: no"));
        assert!(summary.contains("Sort by cached pages: yes"));
        assert!(summary.contains("Histogram width: (terminal)"));
    }
}
