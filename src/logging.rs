use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for the CLI.
///
/// Reads `RUST_LOG` (e.g. `RUST_LOG=weekly_budget_rs=debug`); defaults to `warn`
/// so log lines do not interleave with the rendered plan.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize verbose logging for tests. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
