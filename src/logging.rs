// 📝 Logging - console diagnostics through tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "lang_seed=info";

/// Build the filter from RUST_LOG, falling back to DEFAULT_FILTER
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber: plain lines on stdout, no timestamps
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time();

    // A second init (e.g. from a test harness) is not an error worth failing on
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::info!("logging initialised");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
