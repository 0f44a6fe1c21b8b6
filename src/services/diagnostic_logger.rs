//! Diagnostic-aware logging configuration.
//!
//! Lookup lifecycle logging (request start, HTTP status, raw payload) is
//! emitted at DEBUG/INFO. When diagnostics are disabled only WARN and ERROR
//! reach stderr, so the rendered card stays readable.

use lazy_static::lazy_static;
use log::LevelFilter;
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref DIAGNOSTICS_ENABLED: AtomicBool = AtomicBool::new(false);
}

/// Initialize the logging system. Call once at startup.
///
/// `RUST_LOG` narrows the filter per module; the diagnostics toggle caps the level.
pub fn init_logging(diagnostics_enabled: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .format_timestamp_millis()
        .format_module_path(true);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();

    set_diagnostics_enabled(diagnostics_enabled);
}

/// Toggle verbose diagnostics at runtime.
pub fn set_diagnostics_enabled(enabled: bool) {
    DIAGNOSTICS_ENABLED.store(enabled, Ordering::SeqCst);

    let level = if enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_max_level(level);
    log::debug!("[DiagnosticLogger] Diagnostics enabled");
}

pub fn is_diagnostics_enabled() -> bool {
    DIAGNOSTICS_ENABLED.load(Ordering::SeqCst)
}
