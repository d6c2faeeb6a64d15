//! Observability setup.
//!
//! Installs the global tracing subscriber. Request spans come from
//! `tower_http::trace::TraceLayer`, added in `routes::create_app`.

/// Initialize the tracing subscriber.
///
/// RUST_LOG controls the level (default: info). Output goes to stderr without
/// ANSI colours, as JSON lines when `json` is set.
pub fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
