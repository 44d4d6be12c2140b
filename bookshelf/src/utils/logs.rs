use std::io;
use tracing_subscriber::EnvFilter;

// Logs go to stderr so they never interleave with the menu on stdout.
// RUST_LOG overrides the default `warn` level.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        // fails once a global subscriber is set, so repeated setup is ignored
        .try_init();
}
