use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputArg;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pcstat` binary.
#[derive(Parser, Debug)]
#[command(
    name = "pcstat",
    version,
    long_version = long_version(),
    about = "Show which pages of files are resident in the page cache",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "FILE",
        required_unless_present_any = ["pid", "print_config"],
        help = "Files to inspect"
    )]
    pub(crate) files: Vec<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PCSTAT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Choose how to print the report (default: ascii)"
    )]
    pub(crate) output: Option<OutputArg>,
    #[arg(
        long = "no-header",
        help = "Omit header lines from tables and terse output (default: disabled)"
    )]
    pub(crate) no_header: bool,
    #[arg(
        long = "pps",
        help = "Include the per-page status in JSON output (default: disabled)"
    )]
    pub(crate) per_page_status: bool,
    #[arg(
        short = 's',
        long = "sort",
        help = "List the most cached files first (default: disabled)"
    )]
    pub(crate) sort: bool,
    #[arg(
        short = 'b',
        long = "basename",
        help = "Show file names without their directories (default: disabled)"
    )]
    pub(crate) basename: bool,
    #[arg(
        short = 'p',
        long = "pid",
        value_name = "PID",
        help = "Also inspect every file mapped by this process (default: none)"
    )]
    pub(crate) pid: Option<u32>,
    #[arg(
        short = 'w',
        long = "width",
        value_name = "COLS",
        help = "Columns available to the histogram (default: terminal width)"
    )]
    pub(crate) width: Option<usize>,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration to stderr before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Log more detail to stderr, repeat for more (default: warnings only)"
    )]
    pub(crate) verbose: u8,
}
