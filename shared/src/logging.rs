use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use crate::SharedError;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_test_writer()
        .try_init();
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) -> Result<(), SharedError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|_| SharedError::LogFilter(default_filter.to_string()))?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
