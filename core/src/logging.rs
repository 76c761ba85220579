//! Logger collaborator and process-wide subscriber setup.
//!
//! # Design
//! Components that need to warn take a `&dyn Logger` rather than reaching for
//! a global, so tests can capture messages. The default `TracingLogger`
//! forwards to `tracing`. Installing a subscriber is left to the application;
//! `init_logging` is there for binaries that have no subscriber of their own.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Sink for advisory messages emitted while resolving configuration.
pub trait Logger: Send + Sync {
    fn warning(&self, message: &str);

    fn debug(&self, _message: &str) {}
}

/// Default logger: emits `tracing` events under the `amadeus` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warning(&self, message: &str) {
        tracing::warn!(target: "amadeus", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "amadeus", "{message}");
    }
}

static INIT: Once = Once::new();

/// Install a stdout `fmt` subscriber: `info` for every target, `level` for
/// the `amadeus` target.
///
/// Call it from `main`; the library never does. Only the first call has any
/// effect. `RUST_LOG` takes precedence over `level` when set. If a global
/// subscriber is already installed, that one is left in place.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("info,amadeus={}", level.as_filter())));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stdout)
            .with_target(false)
            .try_init();
    });
}
