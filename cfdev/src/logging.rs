//! File logging for the cfdev process.
//!
//! Logs go to `<log_dir>/cfdev.log.<date>`, rotated daily. Verbosity comes
//! from `RUST_LOG` (default `info`).

use crate::config::CfdevConfig;
use cfdev_shared::errors::{CfdevError, CfdevResult};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_PREFIX: &str = "cfdev.log";

/// Keeps the background writer alive for the rest of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber writing to `config.log_dir`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging_for(config: &CfdevConfig) -> CfdevResult<()> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&config.log_dir).map_err(|e| {
        CfdevError::Config(format!(
            "failed to create log directory {}: {}",
            config.log_dir.display(),
            e
        ))
    })?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    match installed {
        Ok(()) => {
            let _ = LOG_GUARD.set(guard);
            tracing::debug!(log_dir = %config.log_dir.display(), "Logging initialized");
        }
        // Someone else (a test harness, the embedding binary) owns the subscriber.
        Err(e) => tracing::debug!(error = %e, "Global subscriber already set"),
    }

    Ok(())
}
