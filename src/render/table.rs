use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::RenderOptions;
use crate::status::{PcStatus, PcStatusList, percent_of};
use crate::units::convert_unit;

const SUM_LABEL: &str = "Sum";

/// Cell widths after the name column, each including the leading space.
/// Mirrors the `{:<15}`/`{:<12}`/`{:<7}` row layout below.
const FIXED_CELLS: [usize; 5] = [16, 13, 16, 13, 9];

/// Border style shared by the three table layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Borders {
    Unicode,
    Ascii,
    None,
}

/// Glyphs for one horizontal rule: left edge, fill, column joint, right edge.
struct Rule {
    left: char,
    fill: char,
    joint: char,
    right: char,
}

impl Borders {
    fn vertical(self) -> Option<char> {
        match self {
            Borders::Unicode => Some('│'),
            Borders::Ascii => Some('|'),
            Borders::None => None,
        }
    }

    fn top(self) -> Option<Rule> {
        match self {
            Borders::Unicode => Some(Rule {
                left: '┌',
                fill: '─',
                joint: '┬',
                right: '┐',
            }),
            Borders::Ascii => Some(Rule {
                left: '+',
                fill: '-',
                joint: '+',
                right: '+',
            }),
            Borders::None => None,
        }
    }

    fn separator(self) -> Option<Rule> {
        match self {
            Borders::Unicode => Some(Rule {
                left: '├',
                fill: '─',
                joint: '┼',
                right: '┤',
            }),
            Borders::Ascii => Some(Rule {
                left: '|',
                fill: '-',
                joint: '+',
                right: '|',
            }),
            Borders::None => None,
        }
    }

    fn bottom(self) -> Option<Rule> {
        match self {
            Borders::Unicode => Some(Rule {
                left: '└',
                fill: '─',
                joint: '┴',
                right: '┘',
            }),
            Borders::Ascii => Some(Rule {
                left: '+',
                fill: '-',
                joint: '+',
                right: '+',
            }),
            Borders::None => None,
        }
    }
}

impl Rule {
    fn render(&self, name_width: usize) -> String {
        let fill = |width: usize| self.fill.to_string().repeat(width);
        let mut line = String::new();
        line.push(self.left);
        line.push_str(&fill(name_width + 2));
        for width in FIXED_CELLS {
            line.push(self.joint);
            line.push_str(&fill(width));
        }
        line.push(self.right);
        line
    }
}

/// Running sums over a collection, accumulated in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub size: i64,
    pub pages: usize,
    pub cached_pages: usize,
    /// Sum of the per-record percentage-derived cached sizes.
    pub cached_size: i64,
}

impl Totals {
    pub fn add(&mut self, pcs: &PcStatus) {
        self.size += pcs.size;
        self.pages += pcs.pages;
        self.cached_pages += pcs.cached;
        self.cached_size += pcs.cached_size();
    }

    /// Overall cached percentage; NaN when no pages were seen.
    pub fn percent(&self) -> f64 {
        percent_of(self.cached_pages, self.pages)
    }
}

impl<'a> FromIterator<&'a PcStatus> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a PcStatus>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for pcs in iter {
            totals.add(pcs);
        }
        totals
    }
}

/// The six cells of one table line, already turned into text.
struct Cells<'a> {
    name: &'a str,
    size: String,
    pages: String,
    cached_size: String,
    cached: String,
    percent: String,
}

impl<'a> Cells<'a> {
    fn header() -> Self {
        Self {
            name: "Name",
            size: "Size".into(),
            pages: "Pages".into(),
            cached_size: "Cached Size".into(),
            cached: "Cached Pages".into(),
            percent: "Percent".into(),
        }
    }

    fn values(
        name: &'a str,
        size: i64,
        pages: usize,
        cached_size: i64,
        cached: usize,
        percent: f64,
    ) -> Self {
        Self {
            name,
            size: convert_unit(size),
            pages: pages.to_string(),
            cached_size: convert_unit(cached_size),
            cached: cached.to_string(),
            percent: format!("{percent:.3}"),
        }
    }

    fn record(pcs: &'a PcStatus) -> Self {
        Self::values(
            &pcs.name,
            pcs.size,
            pcs.pages,
            pcs.cached_size(),
            pcs.cached,
            pcs.percent,
        )
    }

    fn totals(totals: &Totals) -> Self {
        Self::values(
            SUM_LABEL,
            totals.size,
            totals.pages,
            totals.cached_size,
            totals.cached_pages,
            totals.percent(),
        )
    }

    fn render(&self, borders: Borders, name_width: usize) -> String {
        let pad = " ".repeat(name_width.saturating_sub(self.name.width()));
        let Cells {
            name,
            size,
            pages,
            cached_size,
            cached,
            percent,
        } = self;
        match borders.vertical() {
            Some(v) => format!(
                "{v} {name}{pad} {v} {size:<15}{v} {pages:<12}{v} {cached_size:<15}{v} {cached:<12}{v} {percent:<7} {v}"
            ),
            None => format!(
                "{name}{pad}  {size:<15} {pages:<12} {cached_size:<15} {cached:<12} {percent:<7}"
            ),
        }
    }
}

/// Write a bordered or plain table with a trailing `Sum` row.
pub(super) fn write_table<W: Write>(
    out: &mut W,
    stats: &PcStatusList,
    borders: Borders,
    options: &RenderOptions,
) -> io::Result<()> {
    let name_width = stats.max_name_width();
    let rule = |rule: Option<Rule>| rule.map(|rule| rule.render(name_width));

    if let Some(top) = rule(borders.top()) {
        writeln!(out, "{top}")?;
    }

    if !options.no_header {
        writeln!(out, "{}", Cells::header().render(borders, name_width))?;
        if let Some(separator) = rule(borders.separator()) {
            writeln!(out, "{separator}")?;
        }
    }

    let mut totals = Totals::default();
    for pcs in stats.iter() {
        writeln!(out, "{}", Cells::record(pcs).render(borders, name_width))?;
        totals.add(pcs);
    }

    if let Some(separator) = rule(borders.separator()) {
        writeln!(out, "{separator}")?;
    }
    writeln!(out, "{}", Cells::totals(&totals).render(borders, name_width))?;
    if let Some(bottom) = rule(borders.bottom()) {
        writeln!(out, "{bottom}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::fixtures::status;

    fn two_files() -> PcStatusList {
        vec![status("a", 8192, 2, 2), status("bb", 4096, 1, 0)].into()
    }

    fn table(stats: &PcStatusList, borders: Borders, no_header: bool) -> String {
        let options = RenderOptions {
            no_header,
            ..RenderOptions::default()
        };
        let mut buffer = Vec::new();
        write_table(&mut buffer, stats, borders, &options).expect("write");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn unicode_table_layout() {
        insta::assert_snapshot!(table(&two_files(), Borders::Unicode, false), @r"
        ┌───────┬────────────────┬─────────────┬────────────────┬─────────────┬─────────┐
        │ Name  │ Size           │ Pages       │ Cached Size    │ Cached Pages│ Percent │
        ├───────┼────────────────┼─────────────┼────────────────┼─────────────┼─────────┤
        │ a     │ 8.000K         │ 2           │ 8.000K         │ 2           │ 100.000 │
        │ bb    │ 4.000K         │ 1           │ 0B             │ 0           │ 0.000   │
        ├───────┼────────────────┼─────────────┼────────────────┼─────────────┼─────────┤
        │ Sum   │ 12.000K        │ 3           │ 8.000K         │ 2           │ 66.667  │
        └───────┴────────────────┴─────────────┴────────────────┴─────────────┴─────────┘
        ");
    }

    #[test]
    fn ascii_table_without_header() {
        insta::assert_snapshot!(table(&two_files(), Borders::Ascii, true), @r"
        +-------+----------------+-------------+----------------+-------------+---------+
        | a     | 8.000K         | 2           | 8.000K         | 2           | 100.000 |
        | bb    | 4.000K         | 1           | 0B             | 0           | 0.000   |
        |-------+----------------+-------------+----------------+-------------+---------|
        | Sum   | 12.000K        | 3           | 8.000K         | 2           | 66.667  |
        +-------+----------------+-------------+----------------+-------------+---------+
        ");
    }

    #[test]
    fn plain_table_sums_pages_and_cached() {
        let output = table(&two_files(), Borders::None, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Name   Size            Pages        Cached Size     Cached Pages Percent"
        );
        assert_eq!(
            lines[1],
            "a      8.000K          2            8.000K          2            100.000"
        );
        assert_eq!(
            lines[3],
            "Sum    12.000K         3            8.000K          2            66.667 "
        );
    }

    #[test]
    fn header_and_rows_share_column_positions() {
        let stats: PcStatusList = vec![status("/tmp/some/longer-name", 1 << 20, 256, 64)].into();
        let output = table(&stats, Borders::Unicode, false);
        let joints: Vec<Vec<usize>> = output
            .lines()
            .map(|line| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| {
                        matches!(
                            c,
                            '│' | '┬' | '┼' | '┴' | '┌' | '┐' | '├' | '┤' | '└' | '┘'
                        )
                    })
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect();
        assert!(joints.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn sum_row_matches_field_totals() {
        let stats: PcStatusList = vec![
            status("x", 10 * 4096, 10, 4),
            status("y", 5 * 4096, 5, 5),
            status("z", 4096, 1, 0),
        ]
        .into();
        let totals: Totals = stats.iter().collect();
        assert_eq!(totals.size, 16 * 4096);
        assert_eq!(totals.pages, 16);
        assert_eq!(totals.cached_pages, 9);
        assert_eq!(totals.cached_size, 9 * 4096);
        assert_eq!(totals.percent(), 9.0 / 16.0 * 100.0);
    }

    #[test]
    fn empty_collection_sum_is_nan() {
        let totals: Totals = PcStatusList::new().iter().collect();
        assert!(totals.percent().is_nan());

        let output = table(&PcStatusList::new(), Borders::None, true);
        assert_eq!(
            output,
            "Sum    0B              0            0B              0            NaN    \n"
        );
    }
}
