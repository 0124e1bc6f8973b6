//! Compact one-line summaries for logging messages without dumping payloads.

/// Trait for types that can produce a short log line.
///
/// Message batches can be large (hundreds of objects with covariance
/// matrices); `Debug` output is not suitable for per-message logging.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}
