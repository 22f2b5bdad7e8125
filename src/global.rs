//! Process-wide default printer and verbosity threshold.
//!
//! Both live behind reader/writer locks: message producers take frequent
//! read locks, configuration changes take occasional write locks, last
//! writer wins. A [`Verbose`] captures the configuration at construction,
//! so in-flight instances keep printing with the values they saw.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::message::{Verbosity, DEFAULT_VERBOSITY};
use crate::printer::{Print, Printer};
use crate::verbose::Verbose;

static GLOBAL_PRINTER: LazyLock<RwLock<Arc<dyn Print + Send + Sync>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Printer::with_defaults(true))));

static GLOBAL_VERBOSITY: RwLock<Verbosity> = RwLock::new(DEFAULT_VERBOSITY);

/// Replace the process-wide printer.
pub fn set_printer(printer: impl Print + Send + Sync + 'static) {
    *GLOBAL_PRINTER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Arc::new(printer);
}

/// The process-wide printer.
#[must_use]
pub fn printer() -> Arc<dyn Print + Send + Sync> {
    GLOBAL_PRINTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Set the minimum verbosity required for messages to be displayed. Higher
/// thresholds show more output.
pub fn set_verbosity(verbosity: Verbosity) {
    *GLOBAL_VERBOSITY
        .write()
        .unwrap_or_else(PoisonError::into_inner) = verbosity;
}

/// The current verbosity threshold.
#[must_use]
pub fn verbosity() -> Verbosity {
    *GLOBAL_VERBOSITY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Message builder at the given verbosity, bound to the current global
/// configuration.
///
/// ```no_run
/// use clamor::highlight;
///
/// clamor::v(2).warningf("unknown path: %s", vec![highlight::cyan("/not-a-path")]);
/// ```
#[must_use]
pub fn v(verbosity: Verbosity) -> Verbose {
    Verbose::with_printer(verbosity, self::verbosity(), printer())
}
