//! Opt-in tracing output for conformance runs.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `URIT_LOG=urit_registry=trace`.
pub const LOG_ENV: &str = "URIT_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber filtered by [`LOG_ENV`].
///
/// Does nothing unless the variable is set. Safe to call multiple times, and
/// leaves an already-installed global subscriber alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }

        let installed = tracing_subscriber::registry()
            .with(EnvFilter::from_env(LOG_ENV))
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; {LOG_ENV} ignored");
        }
    });
}
