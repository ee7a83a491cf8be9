//! Stderr logging bootstrap.
//!
//! Events are metadata-only `key=value` lines (`event=... status=...`).
//! Report output goes to stdout and is never mixed with log lines.

use flexi_logger::{Logger, LoggerHandle};

use crate::errors::Result;

/// Level used when `--verbose` is not given.
pub const DEFAULT_LEVEL: &str = "warn";
/// Level used with `--verbose`.
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the log spec for the given verbosity.
#[must_use]
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Start logging to stderr. `RUST_LOG`, when set, overrides `level`.
///
/// The returned handle must stay alive for as long as logging is needed.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    log::debug!("event=logging_init status=ok level={level}");
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(level_for(true), "debug");
    }

    #[test]
    fn quiet_selects_warn() {
        assert_eq!(level_for(false), "warn");
    }
}
