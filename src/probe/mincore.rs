use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::path::Path;
use std::ptr;

use super::{ProbeError, page_count};

pub(super) fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 { size as usize } else { 4096 }
}

/// A read-only shared mapping that is unmapped on drop.
struct Mapping {
    addr: *mut libc::c_void,
    len: usize,
}

impl Mapping {
    fn new(file: &File, len: usize) -> io::Result<Self> {
        // SAFETY: a fresh PROT_NONE mapping of a valid descriptor; the kernel
        // picks the address and nothing ever dereferences it.
        let addr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_NONE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                0,
            )
        };
        if addr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { addr, len })
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        // SAFETY: addr and len come from a successful mmap and are unmapped once.
        unsafe {
            libc::munmap(self.addr, self.len);
        }
    }
}

/// Residency of every page of `file`, which is `len` bytes long.
pub(super) fn residency(file: &File, path: &Path, len: u64) -> Result<Vec<bool>, ProbeError> {
    let pages = page_count(len, page_size());
    let mapping = Mapping::new(file, len as usize).map_err(|source| ProbeError::Mmap {
        path: path.to_path_buf(),
        source,
    })?;

    let mut vec = vec![0u8; pages];
    // SAFETY: the mapping spans `len` bytes, and mincore writes one byte per
    // page of that range into `vec`, which holds exactly that many.
    let rc = unsafe { libc::mincore(mapping.addr, mapping.len, vec.as_mut_ptr().cast()) };
    if rc != 0 {
        return Err(ProbeError::Mincore {
            path: path.to_path_buf(),
            source: io::Error::last_os_error(),
        });
    }

    Ok(vec.into_iter().map(|flags| flags & 0x1 == 1).collect())
}
