use std::sync::Once;

use tracing_subscriber::{
    EnvFilter,
    fmt,
    prelude::*
};

static INIT: Once = Once::new();

/// Installs the global subscriber, filtered by `EXPOWEIGHT_LOG`
/// (e.g. `EXPOWEIGHT_LOG=expoweight=debug`), falling back to
/// `expoweight=info`. Logs go to stderr so that dumps on stdout stay clean.
///
/// Only the first call has an effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("EXPOWEIGHT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("expoweight=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
            )
            .with(filter)
            .init();
    });
}
