//! Tracing subscriber setup for binaries and tests embedding memprobe.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber, once per process.
///
/// Only takes effect when `RUST_LOG` is set, e.g.
/// `RUST_LOG=memprobe=trace`. Does nothing if another global subscriber
/// is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
