use std::time::{Duration, Instant};
use tracing::info;

/// Processing counters of the analyzer
#[derive(Debug, Default)]
pub struct AppMetrics {
    /// Number of input lines read
    pub lines: u64,
    /// Number of lines no parser accepted
    pub rejected_lines: u64,
    /// Number of frames handed to the stream reader
    pub frames: u64,
    /// Number of decoded messages printed
    pub messages: u64,
    /// Number of frames that broke a partial message
    pub reassembly_errors: u64,
    /// Number of messages decoded with a fallback definition
    pub fallback_decodes: u64,
    /// Number of CAN bus read errors encountered
    pub can_errors: u64,
}

impl AppMetrics {
    /// Create a new AppMetrics instance with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Log current metrics to the info log
    pub fn log(&self) {
        info!(
            "[Metrics] Lines: {}, Rejected: {}, Frames: {}, Messages: {}, Reassembly errors: {}, Fallback decodes: {}, CAN errors: {}",
            self.lines,
            self.rejected_lines,
            self.frames,
            self.messages,
            self.reassembly_errors,
            self.fallback_decodes,
            self.can_errors
        );
    }
}

/// Manages periodic logging of application metrics
pub struct MetricsLogger {
    last_log: Instant,
    log_interval: Duration,
}

impl MetricsLogger {
    /// Create a new MetricsLogger with the specified logging interval
    pub fn new(log_interval: Duration) -> Self {
        Self {
            last_log: Instant::now(),
            log_interval,
        }
    }

    /// Check if it's time to log metrics, and if so, log them and reset
    /// Returns true if metrics were logged
    pub fn check_and_log(&mut self, metrics: &mut AppMetrics) -> bool {
        if self.last_log.elapsed() >= self.log_interval {
            self.flush(metrics);
            true
        } else {
            false
        }
    }

    /// Log whatever was counted since the last report, at end of input
    pub fn flush(&mut self, metrics: &mut AppMetrics) {
        metrics.log();
        metrics.reset();
        self.last_log = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = AppMetrics::new();
        assert_eq!(metrics.lines, 0);
        assert_eq!(metrics.frames, 0);
        assert_eq!(metrics.messages, 0);
        assert_eq!(metrics.reassembly_errors, 0);
        assert_eq!(metrics.can_errors, 0);
    }

    #[test]
    fn test_reset_clears_all_counters() {
        let mut metrics = AppMetrics::new();
        metrics.lines = 100;
        metrics.rejected_lines = 3;
        metrics.frames = 97;
        metrics.messages = 50;
        metrics.fallback_decodes = 2;

        metrics.reset();

        assert_eq!(metrics.lines, 0);
        assert_eq!(metrics.rejected_lines, 0);
        assert_eq!(metrics.frames, 0);
        assert_eq!(metrics.messages, 0);
        assert_eq!(metrics.fallback_decodes, 0);
    }

    #[test]
    fn test_metrics_logger_interval() {
        let mut logger = MetricsLogger::new(Duration::from_millis(50));
        let mut metrics = AppMetrics::new();

        assert!(!logger.check_and_log(&mut metrics));

        std::thread::sleep(Duration::from_millis(60));
        metrics.frames = 5;
        assert!(logger.check_and_log(&mut metrics));
        assert_eq!(metrics.frames, 0);

        assert!(!logger.check_and_log(&mut metrics));
    }
}
