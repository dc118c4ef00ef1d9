//! Sparkline view of page residency, one line per file.
//!
//! Block elements from U+2581 to U+2588 give eight intensity levels. When the
//! terminal has room for every page each page gets its own glyph, otherwise
//! consecutive pages are folded into fixed-size buckets.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::RenderOptions;
use crate::status::PcStatusList;

const FULL: char = '\u{2588}';
const LOWEST: char = '\u{2581}';

/// Columns reserved for the page count.
const COUNT_MARGIN: isize = 10;

/// Upper bounds of the partially filled levels, from lower 2/8 to 7/8.
const LEVELS: [(f64, char); 6] = [
    (0.16, '\u{2582}'),
    (0.33, '\u{2583}'),
    (0.50, '\u{2584}'),
    (0.66, '\u{2585}'),
    (0.83, '\u{2586}'),
    (1.00, '\u{2587}'),
];

/// Number of glyphs that fit beside a `name_width` column.
///
/// Block elements render wider than text, so only half of the remaining
/// columns are used. The result may be zero or negative on narrow terminals.
pub fn bucket_budget(display_width: usize, name_width: usize) -> isize {
    (display_width as isize - name_width as isize) / 2 - COUNT_MARGIN
}

/// Summarise `per_page_status` into at most `budget` glyphs.
///
/// Buckets hold `pages / budget` pages each; pages after the last complete
/// bucket are not drawn.
pub fn bucket_glyphs(per_page_status: &[bool], pages: usize, budget: isize) -> String {
    if budget > pages as isize {
        return per_page_status
            .iter()
            .map(|&resident| if resident { FULL } else { LOWEST })
            .collect();
    }
    if budget <= 0 {
        return String::new();
    }

    let bucket_size = pages / budget as usize;
    let mut glyphs = String::new();
    let mut resident = 0usize;
    for (idx, &cached) in per_page_status.iter().enumerate() {
        if cached {
            resident += 1;
        }
        if (idx + 1) % bucket_size == 0 {
            glyphs.push(level_glyph(resident, bucket_size));
            resident = 0;
        }
    }
    glyphs
}

fn level_glyph(resident: usize, bucket_size: usize) -> char {
    if resident == 0 {
        return LOWEST;
    }
    let fraction = resident as f64 / bucket_size as f64;
    LEVELS
        .iter()
        .find(|(bound, _)| fraction < *bound)
        .map_or(FULL, |&(_, glyph)| glyph)
}

pub(super) fn write_histogram<W: Write>(
    out: &mut W,
    stats: &PcStatusList,
    options: &RenderOptions,
) -> io::Result<()> {
    let name_width = stats.max_name_width();
    let budget = bucket_budget(options.display_width, name_width);

    for pcs in stats.iter() {
        let pad = " ".repeat(name_width.saturating_sub(pcs.name.width()));
        let per_page_status = pcs.per_page_status.as_deref().unwrap_or_default();
        let glyphs = bucket_glyphs(per_page_status, pcs.pages, budget);
        writeln!(out, "{}{pad} {:>8} {glyphs}", pcs.name, pcs.pages)?;
    }
    Ok(())
}
