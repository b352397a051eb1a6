//! Log setup. The screen belongs to the page, so logs only go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Default filter: our own crate at info (debug when verbose).
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "spark_folio=debug,warn"
    } else {
        "spark_folio=info,warn"
    }
}

/// Install the global subscriber. Without a log file nothing is recorded.
pub fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert!(default_filter(true).contains("debug"));
        assert!(!default_filter(false).contains("debug"));
    }

    #[test]
    fn test_no_file_is_noop() {
        assert!(init_logging(None, true).is_ok());
    }

    #[test]
    fn test_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.log");
        init_logging(Some(&path), false).unwrap();
        assert!(path.exists());
    }
}
