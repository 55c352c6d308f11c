//! Tracing subscriber installation.
//!
//! Off unless a filter is set:
//!
//! - `JIJI_LOG`: an `EnvFilter` directive, e.g. `jiji_parse=trace`
//! - `RUST_LOG`: used when `JIJI_LOG` is unset
//! - `JIJI_LOG_TREE=1`: indented span tree instead of flat lines

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once, if a filter is configured.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = std::env::var("JIJI_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var("JIJI_LOG_TREE").is_ok_and(|v| v == "1");

        let registry = tracing_subscriber::registry().with(filter);
        let result = if tree {
            registry
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };
        // Embedders may already have installed a subscriber.
        let _ = result;
    });
}
