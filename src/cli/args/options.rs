use clap::ValueEnum;

/// Output formats accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputArg {
    /// Table with box-drawing borders
    Unicode,
    /// Table with ASCII borders
    #[value(alias = "text")]
    Ascii,
    /// Aligned columns without borders
    Plain,
    /// Comma-separated lines
    Terse,
    /// A single JSON array
    Json,
    /// Residency sparkline per file
    #[value(alias = "histo")]
    Histogram,
}

impl OutputArg {
    /// Return the format name consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputArg::Unicode => "unicode",
            OutputArg::Ascii => "ascii",
            OutputArg::Plain => "plain",
            OutputArg::Terse => "terse",
            OutputArg::Json => "json",
            OutputArg::Histogram => "histogram",
        }
    }
}
