//! Terminal geometry for the histogram view.

use std::{env, io};

use crossterm::terminal;

use crate::render::DEFAULT_DISPLAY_WIDTH;

/// Columns of the terminal attached to stdout.
///
/// Falls back to `$COLUMNS` and then to [`DEFAULT_DISPLAY_WIDTH`] when no
/// terminal size can be read.
pub fn display_width() -> usize {
    terminal_columns()
        .or_else(columns_from_env)
        .unwrap_or(DEFAULT_DISPLAY_WIDTH)
}

fn columns_from_env() -> Option<usize> {
    parse_columns(&env::var("COLUMNS").ok()?)
}

fn parse_columns(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|cols| *cols > 0)
}

fn terminal_columns() -> Option<usize> {
    usable_columns(terminal::size())
}

/// Columns reported by crossterm, ignoring errors and zero-sized terminals.
fn usable_columns(size: io::Result<(u16, u16)>) -> Option<usize> {
    match size {
        Ok((cols, _rows)) if cols > 0 => Some(usize::from(cols)),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!("terminal size unavailable: {err}");
            None
        }
    }
}
