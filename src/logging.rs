//! Logger setup
//!
//! The global logger is installed on first use and reconfigured whenever a
//! command is run with `--log-level`, so every run honors its own value.

use env_logger::{Builder, Env, Logger};
use log::{Log, Metadata, Record};
use std::sync::{OnceLock, PoisonError, RwLock};

/// Filter used when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_FILTER: &str = "warn";

static LOGGER: OnceLock<ActiveLogger> = OnceLock::new();

/// Installed logger whose filter can be swapped after installation
struct ActiveLogger {
    inner: RwLock<Logger>,
}

impl ActiveLogger {
    fn replace(&self, logger: Logger) {
        let filter = logger.filter();
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = logger;
        log::set_max_level(filter);
    }

    fn filter(&self) -> log::LevelFilter {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .filter()
    }
}

impl Log for ActiveLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .log(record)
    }

    fn flush(&self) {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

/// Logger builder honoring `RUST_LOG`, overridden by `level`
///
/// `level` is handed to `env_logger`'s filter parser as-is, so anything it
/// accepts works here (`debug`, `info,solcmd=trace`, ...).
pub fn logger_builder(level: Option<&str>) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp(None);

    if let Some(level) = level.filter(|level| !level.is_empty()) {
        builder.parse_filters(level);
    }

    builder
}

/// Install the global logger, or reconfigure it when `level` is given
///
/// Without a level an already installed logger is left as it is.
pub fn init_logging(level: Option<&str>) {
    let active = LOGGER.get_or_init(|| ActiveLogger {
        inner: RwLock::new(logger_builder(None).build()),
    });

    if log::set_logger(active).is_ok() {
        log::set_max_level(active.filter());
    }

    if let Some(level) = level.filter(|level| !level.is_empty()) {
        active.replace(logger_builder(Some(level)).build());
        log::info!("setting the log value to: {}", level);
    }
}
