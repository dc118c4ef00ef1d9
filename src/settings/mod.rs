//! Configuration loading and resolution utilities.
//!
//! Values are merged from config files, `PCSTAT__*` environment variables and
//! command-line flags, in increasing order of precedence. `load` is the entry
//! point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
