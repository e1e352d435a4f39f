use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise only this crate's events at
/// `level` and above are shown. Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let default_filter = format!("colonize={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(level, "Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_tolerates_repeated_calls() {
        init_logging("debug");
        init_logging("warn");
    }
}
