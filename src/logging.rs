use flexi_logger::{opt_format, Logger};

/// Initializes process-wide logging for the CLI harness. The library itself
/// only emits through the `log` facade; hosting applications are free to
/// install their own logger instead.
pub fn setup_logging() {
    Logger::try_with_env_or_str("info") // Use the log level from the environment or fallback to "info"
        .unwrap()
        .format(opt_format)
        .start()
        .unwrap();
}
