//! Tracing setup and the top-level fault observer.
//!
//! ```ignore
//! seedbloom_core::logging::init();
//! tracing::info!("garden ready");
//! ```
//!
//! Filtering follows `RUST_LOG` and falls back to `info`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber and the fault observer.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    if installed {
        install_fault_observer();
    }
}

/// Route panics to the log instead of the default stderr report.
///
/// The experience keeps running in whatever state the fault left it.
pub fn install_fault_observer() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown fault".to_string());

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();

        tracing::error!(%location, "An error occurred: {}", payload);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("still logging");
    }
}
