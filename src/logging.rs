//! Diagnostic logging to stderr.
//!
//! Report output owns stdout, so every event goes to stderr. `PCSTAT_LOG`
//! accepts the usual `EnvFilter` directives and overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PCSTAT_LOG";

/// Level directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn initialize(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("pcstat={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
