//! Files mapped into a running process, read from `/proc/<pid>/maps`.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

const DELETED_SUFFIX: &str = " (deleted)";

/// Distinct files mapped by `pid`, in the order they first appear.
pub fn mapped_files(pid: u32) -> io::Result<Vec<PathBuf>> {
    let maps = fs::read_to_string(format!("/proc/{pid}/maps"))?;
    Ok(parse_maps(&maps))
}

/// Extract file-backed mappings from the text of a maps file.
///
/// Anonymous regions, pseudo entries such as `[heap]` and files that were
/// deleted after being mapped are skipped.
pub fn parse_maps(maps: &str) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for line in maps.lines() {
        let Some(path) = line.splitn(6, ' ').nth(5).map(str::trim) else {
            continue;
        };
        if !path.starts_with('/') || path.ends_with(DELETED_SUFFIX) {
            continue;
        }
        if seen.insert(path) {
            files.push(PathBuf::from(path));
        }
    }
    files
}
