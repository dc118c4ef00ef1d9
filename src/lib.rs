//! Page cache statistics for files.
//!
//! [`probe`] samples which pages of a file are resident in the page cache,
//! [`status`] holds the results, and [`render`] turns a collection of them into
//! tables, terse lines, JSON or a histogram.

pub mod app_dirs;
pub mod logging;
pub mod probe;
pub mod render;
pub mod status;
pub mod terminal;
pub mod units;

pub use probe::{ProbeError, probe_file};
pub use render::{OutputFormat, RenderError, RenderOptions, render, render_to_string};
pub use status::{PcStatus, PcStatusList};
pub use units::convert_unit;
