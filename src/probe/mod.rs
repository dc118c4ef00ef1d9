//! Sampling page cache residency for files on disk.

pub mod maps;
#[cfg(unix)]
mod mincore;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::status::PcStatus;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not stat {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a regular file", path.display())]
    NotRegular { path: PathBuf },
    #[error("{} is empty", path.display())]
    Empty { path: PathBuf },
    #[error("mmap of {} failed", path.display())]
    Mmap {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("mincore on {} failed", path.display())]
    Mincore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("page cache probing is not supported on this platform")]
    Unsupported,
}

/// Size of a memory page in bytes.
pub fn page_size() -> usize {
    #[cfg(unix)]
    {
        mincore::page_size()
    }
    #[cfg(not(unix))]
    {
        4096
    }
}

/// Pages needed to hold `size` bytes.
pub fn page_count(size: u64, page_size: usize) -> usize {
    size.div_ceil(page_size as u64) as usize
}

/// Probe `path`, naming the resulting status after the path as given.
pub fn probe_file(path: &Path) -> Result<PcStatus, ProbeError> {
    let file = File::open(path).map_err(|source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().map_err(|source| ProbeError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ProbeError::NotRegular {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() == 0 {
        return Err(ProbeError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mtime = modified_time(path, metadata.modified());
    let timestamp = Utc::now();
    let per_page_status = residency(&file, path, metadata.len())?;

    tracing::debug!(
        path = %path.display(),
        size = metadata.len(),
        pages = per_page_status.len(),
        "probed file"
    );

    Ok(PcStatus::from_pages(
        path.to_string_lossy(),
        metadata.len() as i64,
        timestamp,
        mtime,
        per_page_status,
    ))
}

/// Modification time, or the unix epoch when the filesystem cannot report one.
fn modified_time(path: &Path, modified: io::Result<SystemTime>) -> DateTime<Utc> {
    match modified {
        Ok(time) => time.into(),
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                "no modification time, using the epoch: {err}"
            );
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

#[cfg(unix)]
fn residency(file: &File, path: &Path, len: u64) -> Result<Vec<bool>, ProbeError> {
    mincore::residency(file, path, len)
}

#[cfg(not(unix))]
fn residency(_file: &File, _path: &Path, _len: u64) -> Result<Vec<bool>, ProbeError> {
    Err(ProbeError::Unsupported)
}

#[cfg(all(test, unix))]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(1, 4096), 1);
        assert_eq!(page_count(4096, 4096), 1);
        assert_eq!(page_count(4097, 4096), 2);
        assert_eq!(page_count(0, 4096), 0);
    }

    #[test]
    fn probing_a_written_file_reports_its_pages() {
        let mut file = NamedTempFile::new().expect("tempfile");
        let data = vec![7u8; page_size() * 3 + 1];
        file.write_all(&data).expect("write");
        file.flush().expect("flush");

        let pcs = probe_file(file.path()).expect("probe");

        assert_eq!(pcs.size, data.len() as i64);
        assert_eq!(pcs.pages, 4);
        assert!(pcs.cached <= pcs.pages);
        assert_eq!(pcs.cached + pcs.uncached, pcs.pages);
        assert!((0.0..=100.0).contains(&pcs.percent));
        assert_eq!(pcs.per_page_status.as_ref().map(Vec::len), Some(4));
        assert_eq!(pcs.name, file.path().to_string_lossy());
    }

    #[test]
    fn missing_mtime_falls_back_to_the_epoch() {
        let path = Path::new("/proc/self/status");
        let unsupported = Err(io::Error::from(io::ErrorKind::Unsupported));
        assert_eq!(modified_time(path, unsupported), DateTime::<Utc>::UNIX_EPOCH);

        let known = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_600_000_000);
        assert_eq!(modified_time(path, Ok(known)).timestamp(), 1_600_000_000);
    }

    #[test]
    fn empty_files_are_rejected() {
        let file = NamedTempFile::new().expect("tempfile");
        let err = probe_file(file.path()).expect_err("empty file");
        assert!(matches!(err, ProbeError::Empty { .. }));
    }

    #[test]
    fn missing_files_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = probe_file(&dir.path().join("missing")).expect_err("missing file");
        assert!(matches!(err, ProbeError::Open { .. }));
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = probe_file(dir.path()).expect_err("directory");
        assert!(matches!(err, ProbeError::NotRegular { .. }));
    }
}
