//! Logging setup.
//!
//! Filter priority:
//!
//! 1. **`MULTIPAD_LOG`** - app-specific control
//! 2. **`RUST_LOG`** - standard tracing variable
//! 3. **Default** - `warn` globally, `info` for this crate
//!
//! Output goes to stderr; the GUI never shows log lines.

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,multi_pad=info";

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let filter = create_filter();
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn create_filter() -> EnvFilter {
    filter_from(
        env::var("MULTIPAD_LOG").ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    )
}

fn filter_from(app: Option<&str>, rust: Option<&str>) -> EnvFilter {
    app.or(rust)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
