//! Batched delivery of poems to the search index.
//!
//! # Core Components
//!
//! - [`sink::BulkSink`] - Accumulates documents and flushes them on a worker pool
//! - [`config::BulkConfig`] - Flush thresholds, worker count and document identity
//! - [`transport::BulkTransport`] - The index's bulk and info endpoints
//! - [`elasticsearch::ElasticsearchClient`] - HTTP implementation of the transport
//! - [`transport::MemoryTransport`] - In-process transport for dry runs and tests
//!
//! A batch is flushed when it reaches the document count threshold, the byte
//! size threshold, or when the flush interval has passed since the previous
//! flush, whichever comes first.

pub mod batch;
pub mod config;
pub mod elasticsearch;
pub mod sink;
pub mod stats;
pub mod transport;

pub use config::{BulkConfig, IdStrategy};
pub use elasticsearch::{ElasticsearchClient, ElasticsearchConfig};
pub use sink::BulkSink;
pub use stats::{DocumentOutcome, FlushTrigger, SinkStats};
pub use transport::{BulkTransport, ClusterInfo, MemoryTransport};
