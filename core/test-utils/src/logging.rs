use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn try_setup() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("tokio=warn".parse().expect("valid directive"))
        .add_directive("runtime=warn".parse().expect("valid directive"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_thread_names(true)
                .with_filter(env_filter),
        )
        .try_init()
}

/// Install the test subscriber. Safe to call from every test; only the first call takes effect.
pub fn setup() {
    let _ = try_setup();
}
