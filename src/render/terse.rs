use std::io::{self, Write};

use super::RenderOptions;
use crate::status::PcStatusList;

const HEADER: &str = "name,size,timestamp,mtime,pages,cached,percent";

/// Write one comma-separated line per file, optionally preceded by a header.
pub(super) fn write_terse<W: Write>(
    out: &mut W,
    stats: &PcStatusList,
    options: &RenderOptions,
) -> io::Result<()> {
    if !options.no_header {
        writeln!(out, "{HEADER}")?;
    }
    for pcs in stats.iter() {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            pcs.name,
            pcs.size,
            pcs.timestamp.timestamp(),
            pcs.mtime.timestamp(),
            pcs.pages,
            pcs.cached,
            format_general(pcs.percent)
        )?;
    }
    Ok(())
}

/// Shortest decimal form of `value`, switching to exponent notation for very
/// small or large magnitudes: `100`, `33.333333333333336`, `1e-05`, `1.5e+06`.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..6).contains(&exponent) {
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}
