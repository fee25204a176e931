//! Log sink setup.
//!
//! The calculator core only emits `tracing` events. Whoever owns the process
//! installs a subscriber once at start-up; by default that is a plain-text
//! file truncated on every run.

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` if set, otherwise the configured directive.
pub fn env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))
        }
    }
}

/// Build a subscriber writing timestamp, level, target and message lines.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .finish()
}

/// Install the global log sink described by `config`.
///
/// Call once, before the first calculation. Does nothing when logging is
/// disabled or no log location can be determined.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let Some(path) = config.log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let subscriber = subscriber(env_filter(&config.level)?, Mutex::new(file));
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    tracing::debug!(path = %path.display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ArithmeticOp, perform_operation};
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_calculation_is_logged() {
        let buf = SharedBuf::default();
        let sub = subscriber(EnvFilter::new("info"), buf.clone());

        tracing::subscriber::with_default(sub, || {
            perform_operation(ArithmeticOp::Add, "3", "2");
            perform_operation(ArithmeticOp::Divide, "7", "0");
        });

        let logs = buf.contents();
        assert!(logs.contains("Calculation requested"));
        assert!(logs.contains("Operation Performed: 3+2=5"));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Number 2 can't be zero."));
    }

    #[test]
    fn test_level_filters_events() {
        let buf = SharedBuf::default();
        let sub = subscriber(EnvFilter::new("warn"), buf.clone());

        tracing::subscriber::with_default(sub, || {
            perform_operation(ArithmeticOp::Add, "3", "2");
        });

        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_disabled_logging_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init(&config).is_ok());
    }
}
