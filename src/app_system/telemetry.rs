/// Configure the global subscriber once at startup.
///
/// `RUST_LOG` wins when set; otherwise `fallback_filter` (e.g. "info") is used.
pub fn setup_tracing(fallback_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
