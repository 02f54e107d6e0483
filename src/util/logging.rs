use std::env::{self, VarError};

use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt};

/// Environment variable holding the log filter, e.g. `MINICALC_LOG=debug`.
pub const LOG_ENV: &str = "MINICALC_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        Self { filter: env::var(LOG_ENV) }
    }
}

/// Installs the global tracing subscriber.
///
/// Logging stays off unless [`LOG_ENV`] is set. Events are written to stderr
/// as an indented tree that follows the pipeline's instrumented stages.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let cfg = LoggerConfig::from_env();
    let Ok(filter) = cfg.filter else {
        return;
    };
    let layer = tracing_tree::HierarchicalLayer::default().with_writer(std::io::stderr)
                                                          .with_indent_lines(true);
    let subscriber = tracing_subscriber::Registry::default().with(EnvFilter::new(filter))
                                                             .with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
