use std::path::Path;

use anyhow::Context;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "CHEF_LOG";
pub const DEFAULT_FILTER: &str = "chef=info";
const LOG_PREFIX: &str = "chef-menu";

/// Builds the filter from [`LOG_ENV`], falling back to [`DEFAULT_FILTER`]
/// when the variable is unset or unparsable.
pub fn log_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to a daily rolling file in
/// `log_dir`. The terminal belongs to the UI, so nothing goes to stdout.
///
/// The returned guard flushes buffered lines on drop and must be kept alive
/// for the life of the process.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .context("Failed to create rolling log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directive = std::env::var(LOG_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(directive.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    debug!(log_dir = %log_dir.display(), "Tracing initialised");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_log_filter_defaults() {
        let actual = log_filter(None).to_string();
        let expected = DEFAULT_FILTER;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_log_filter_uses_directive() {
        let actual = log_filter(Some("chef_provider=debug")).to_string();
        let expected = "chef_provider=debug";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_init_tracing_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let _guard = init_tracing(&log_dir).unwrap();

        assert!(log_dir.is_dir());
    }
}
