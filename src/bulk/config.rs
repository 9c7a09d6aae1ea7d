//! Configuration for bulk indexing.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Default name of the target index.
pub const DEFAULT_INDEX: &str = "poems";

/// How the `_id` of each indexed document is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Let the index assign an id. Re-running over the same input duplicates
    /// every document.
    Auto,

    /// Derive the id from the normalized title, author and verse lines, so a
    /// re-run overwrites instead of duplicating.
    #[default]
    ContentHash,
}

/// Configuration for the bulk sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Index receiving every document.
    pub index: String,

    /// Flush once this many documents are pending.
    pub max_actions: usize,

    /// Flush once the pending request body reaches this many bytes.
    pub max_bytes: usize,

    /// Flush pending documents when this much time has passed since the last flush.
    pub flush_interval: Duration,

    /// Number of threads sending bulk requests.
    pub workers: usize,

    /// Flush requests that may wait for a worker before `submit` blocks.
    pub queue_capacity: usize,

    /// Document identity.
    pub id_strategy: IdStrategy,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
            max_actions: 1000,
            max_bytes: 2 << 20, // 2MB
            flush_interval: Duration::from_secs(30),
            workers: 4,
            queue_capacity: 8,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl BulkConfig {
    /// Set the target index.
    pub fn with_index<S: Into<String>>(mut self, index: S) -> Self {
        self.index = index.into();
        self
    }

    /// Set the document count threshold.
    pub fn with_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Set the byte size threshold.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the flush interval.
    pub fn with_flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Set the number of workers. The queue capacity follows at twice the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self.queue_capacity = workers.saturating_mul(2);
        self
    }

    /// Set how many flush requests may be queued.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the id strategy.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Check that the configuration can run.
    pub fn validate(&self) -> Result<()> {
        if self.index.trim().is_empty() {
            return Err(IngestError::invalid_config("index name must not be empty"));
        }
        if self.max_actions == 0 {
            return Err(IngestError::invalid_config(
                "batch size must be greater than zero",
            ));
        }
        if self.max_bytes == 0 {
            return Err(IngestError::invalid_config(
                "batch byte limit must be greater than zero",
            ));
        }
        if self.flush_interval.is_zero() {
            return Err(IngestError::invalid_config(
                "flush interval must be greater than zero",
            ));
        }
        if self.workers == 0 {
            return Err(IngestError::invalid_config(
                "worker count must be greater than zero",
            ));
        }
        if self.queue_capacity == 0 {
            return Err(IngestError::invalid_config(
                "queue capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BulkConfig::default();
        assert_eq!(config.index, "poems");
        assert_eq!(config.max_actions, 1000);
        assert_eq!(config.max_bytes, 2 * 1024 * 1024);
        assert_eq!(config.flush_interval, Duration::from_secs(30));
        assert_eq!(config.workers, 4);
        assert_eq!(config.id_strategy, IdStrategy::ContentHash);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BulkConfig::default()
            .with_index("tang")
            .with_max_actions(10)
            .with_max_bytes(512)
            .with_flush_interval(Duration::from_millis(50))
            .with_workers(2)
            .with_id_strategy(IdStrategy::Auto);

        assert_eq!(config.index, "tang");
        assert_eq!(config.max_actions, 10);
        assert_eq!(config.max_bytes, 512);
        assert_eq!(config.workers, 2);
        assert_eq!(config.queue_capacity, 4);
        assert_eq!(config.id_strategy, IdStrategy::Auto);

        let config = BulkConfig::default().with_workers(usize::MAX);
        assert_eq!(config.queue_capacity, usize::MAX);
    }

    #[test]
    fn test_validation() {
        assert!(BulkConfig::default().with_workers(0).validate().is_err());
        assert!(BulkConfig::default().with_max_actions(0).validate().is_err());
        assert!(BulkConfig::default().with_max_bytes(0).validate().is_err());
        assert!(BulkConfig::default().with_index(" ").validate().is_err());
        assert!(
            BulkConfig::default()
                .with_flush_interval(Duration::ZERO)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_id_strategy_serde() {
        let json = serde_json::to_string(&IdStrategy::ContentHash).unwrap();
        assert_eq!(json, "\"content-hash\"");
        let parsed: IdStrategy = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, IdStrategy::Auto);
    }
}
