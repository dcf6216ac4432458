//! Per-sink counters for observability.

/// Write/failure counters for a single sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkMetrics {
    write_count: u64,
    failure_count: u64,
}

impl SinkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }

    pub(crate) fn record_write(&mut self) {
        self.write_count += 1;
    }

    pub(crate) fn record_failure(&mut self) {
        self.failure_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut metrics = SinkMetrics::new();
        metrics.record_write();
        metrics.record_write();
        metrics.record_failure();
        assert_eq!(metrics.write_count(), 2);
        assert_eq!(metrics.failure_count(), 1);
    }
}
