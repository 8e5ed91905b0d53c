//! Telemetry helpers for hosts embedding `ops-dashboard`.
//!
//! Tracing setup stays opt-in. Chart lifecycle events (handle created,
//! disposed, option applied) are logged under the `ops_dashboard` target,
//! so hosts can raise only this crate's verbosity via `RUST_LOG`.

/// Filter used when `RUST_LOG` is unset: host output at `info`, binding
/// lifecycle and report building at `debug`.
pub const DEFAULT_TRACING_FILTER: &str = "info,ops_dashboard=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty());
    init_tracing_with_filter(filter.as_deref().unwrap_or(DEFAULT_TRACING_FILTER))
}

/// Installs a compact subscriber with an explicit filter directive.
///
/// An unparsable directive falls back to [`DEFAULT_TRACING_FILTER`].
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(DEFAULT_TRACING_FILTER.starts_with("info"));
        assert!(DEFAULT_TRACING_FILTER.contains("ops_dashboard=debug"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_is_not_installed_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_filter("ops_dashboard=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_reports_existing_subscriber() {
        let _ = init_tracing_with_filter("not a [valid filter");
        assert!(!init_tracing_with_filter(DEFAULT_TRACING_FILTER));
    }
}
