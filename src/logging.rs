//! Diagnostic logging to stderr.
//!
//! Reports and summaries go to stdout with `println!`; this is only for the
//! `info!`/`debug!` trail of what a command did.

use tracing_subscriber::EnvFilter;

/// Filter variable checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "JOBKIT_LOG";

/// Default directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "jobkit=warn",
        1 => "jobkit=info",
        _ => "jobkit=debug",
    }
}

/// `JOBKIT_LOG`, then `RUST_LOG`, then the `-v` default.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    [LOG_ENV_VAR, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .find_map(|var| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .and_then(|value| EnvFilter::try_new(value).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

pub fn init(verbosity: u8) {
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
