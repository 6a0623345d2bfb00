//! Opt-in log output for hosts driving a [`ChartView`](crate::ChartView).
//!
//! State changes (viewports, content rect, animation lifecycle) log at
//! `debug`; fling and animation steps log at `trace` once per frame. The
//! default filter hides both. Set `RUST_LOG=hello_viewport=trace` to follow a
//! gesture frame by frame.

/// Filter directive used when `RUST_LOG` is unset and the fallback passed to
/// [`init_tracing_with_filter`] does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Same as [`init_tracing_with_filter`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Installs a compact stderr subscriber. `RUST_LOG` takes precedence over
/// `fallback`.
///
/// Timestamps are omitted since frame timing comes from the host clock;
/// targets are kept so gesture and animation output can be told apart.
/// Returns `false` when a global subscriber already exists.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .compact()
        .try_init()
        .is_ok()
}

/// Always `false`: the `telemetry` feature is disabled.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_tracing_with_filter(_fallback: &str) -> bool {
    false
}
