/// Logging initialization for binaries and tests.
///
/// `tracing-subscriber` fmt to stderr, filter from `RUST_LOG` with a quiet
/// default. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duplex_core=debug,info".into()),
        )
        .try_init();
}
