//! Counters and per-document outcomes of the bulk sink.

use serde::{Deserialize, Serialize};

/// Why a batch was flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlushTrigger {
    /// The document count threshold was reached.
    Count,
    /// The byte size threshold was reached.
    Size,
    /// The flush interval elapsed.
    Interval,
    /// The sink was closed.
    Close,
}

/// Number of flushes per trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushCounts {
    pub count: u64,
    pub size: u64,
    pub interval: u64,
    pub close: u64,
}

impl FlushCounts {
    fn record(&mut self, trigger: FlushTrigger) {
        match trigger {
            FlushTrigger::Count => self.count += 1,
            FlushTrigger::Size => self.size += 1,
            FlushTrigger::Interval => self.interval += 1,
            FlushTrigger::Close => self.close += 1,
        }
    }

    /// Total number of flushes.
    pub fn total(&self) -> u64 {
        self.count + self.size + self.interval + self.close
    }
}

/// Statistics of a bulk sink.
///
/// `indexed + failed` trails `submitted` while requests are in flight and
/// equals it once the sink has been closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkStats {
    /// Documents accepted by `submit`.
    pub submitted: u64,

    /// Documents acknowledged by the index.
    pub indexed: u64,

    /// Documents rejected by the index or lost to a transport failure.
    pub failed: u64,

    /// Bulk requests handed to the workers.
    pub flushes: FlushCounts,

    /// Bulk requests that completed, successfully or not.
    pub requests_completed: u64,

    /// Request body bytes handed to the transport.
    pub bytes_sent: u64,
}

impl SinkStats {
    pub(crate) fn record_flush(&mut self, trigger: FlushTrigger) {
        self.flushes.record(trigger);
    }

    /// Documents not yet acknowledged or failed.
    pub fn pending(&self) -> u64 {
        self.submitted.saturating_sub(self.indexed + self.failed)
    }
}

/// Result for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutcome {
    /// Id sent with the document, or the one assigned by the index.
    pub id: Option<String>,

    /// Title and author of the poem.
    pub label: String,

    /// Item status reported by the index, `None` when the request never completed.
    pub status: Option<u16>,

    /// Failure description; `None` means the document was indexed.
    pub error: Option<String>,
}

impl DocumentOutcome {
    /// Whether the document was indexed.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_counts() {
        let mut stats = SinkStats::default();
        stats.record_flush(FlushTrigger::Count);
        stats.record_flush(FlushTrigger::Count);
        stats.record_flush(FlushTrigger::Close);

        assert_eq!(stats.flushes.count, 2);
        assert_eq!(stats.flushes.close, 1);
        assert_eq!(stats.flushes.total(), 3);
    }

    #[test]
    fn test_pending() {
        let stats = SinkStats {
            submitted: 10,
            indexed: 6,
            failed: 1,
            ..Default::default()
        };
        assert_eq!(stats.pending(), 3);
    }
}
