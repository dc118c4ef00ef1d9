//! Output renderers for a [`PcStatusList`].
//!
//! Every renderer is a pure function of the collection and a [`RenderOptions`]
//! value, writing into any [`Write`] sink. Selection happens through the closed
//! [`OutputFormat`] enum.

mod histogram;
mod json;
mod table;
mod terse;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::status::PcStatusList;

pub use histogram::{bucket_budget, bucket_glyphs};
pub use table::{Borders, Totals};
pub use terse::format_general;

/// Width assumed for the histogram when nothing better is known.
pub const DEFAULT_DISPLAY_WIDTH: usize = 80;

/// The available presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Box-drawing bordered table.
    Unicode,
    /// `+`/`-`/`|` bordered table.
    #[default]
    Ascii,
    /// Aligned columns without borders.
    Plain,
    /// One comma-separated line per file.
    Terse,
    /// A single JSON array.
    Json,
    /// Per-file sparkline of cache residency.
    Histogram,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Unicode,
        OutputFormat::Ascii,
        OutputFormat::Plain,
        OutputFormat::Terse,
        OutputFormat::Json,
        OutputFormat::Histogram,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Unicode => "unicode",
            OutputFormat::Ascii => "ascii",
            OutputFormat::Plain => "plain",
            OutputFormat::Terse => "terse",
            OutputFormat::Json => "json",
            OutputFormat::Histogram => "histogram",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(OutputFormat::Unicode),
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            "plain" => Ok(OutputFormat::Plain),
            "terse" => Ok(OutputFormat::Terse),
            "json" => Ok(OutputFormat::Json),
            "histogram" | "histo" => Ok(OutputFormat::Histogram),
            _ => Err(UnknownFormat(value.to_string())),
        }
    }
}

/// Knobs shared by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Omit header lines from tables and terse output.
    pub no_header: bool,
    /// Emit `per_page_status` as `null` in JSON output.
    pub clear_per_page_status: bool,
    /// Terminal columns available to the histogram.
    pub display_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            no_header: false,
            clear_per_page_status: true,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write output")]
    Io(#[from] io::Error),
    #[error("JSON formatting failed")]
    Json(#[from] serde_json::Error),
}

/// Render `stats` in the chosen format.
pub fn render<W: Write>(
    out: &mut W,
    stats: &PcStatusList,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Unicode => table::write_table(out, stats, Borders::Unicode, options)?,
        OutputFormat::Ascii => table::write_table(out, stats, Borders::Ascii, options)?,
        OutputFormat::Plain => table::write_table(out, stats, Borders::None, options)?,
        OutputFormat::Terse => terse::write_terse(out, stats, options)?,
        OutputFormat::Json => json::write_json(out, stats, options)?,
        OutputFormat::Histogram => histogram::write_histogram(out, stats, options)?,
    }
    Ok(())
}

/// Render into a `String`, mostly useful for tests and embedding.
pub fn render_to_string(
    stats: &PcStatusList,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    render(&mut buffer, stats, format, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::fixtures::status;

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Ascii));
        assert_eq!(" Histo ".parse::<OutputFormat>(), Ok(OutputFormat::Histogram));
        assert_eq!(
            "csv".parse::<OutputFormat>(),
            Err(UnknownFormat("csv".into()))
        );
    }

    #[test]
    fn every_format_renders_the_file_name() {
        let stats: PcStatusList = vec![status("needle.bin", 8192, 2, 1)].into();
        for format in OutputFormat::ALL {
            let output = render_to_string(&stats, format, &RenderOptions::default())
                .expect("render");
            assert!(output.contains("needle.bin"), "{format}: {output}");
        }
    }

    #[test]
    fn empty_collections_render_without_panicking() {
        let stats = PcStatusList::new();
        for format in OutputFormat::ALL {
            render_to_string(&stats, format, &RenderOptions::default()).expect("render");
        }
    }
}
