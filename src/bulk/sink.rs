//! Batching sink with a pool of flush workers.
//!
//! `submit` renders a poem into its bulk lines on the caller's thread and
//! appends it to the pending batch. When the batch reaches the count or byte
//! threshold it is handed to a bounded queue drained by the worker threads; a
//! separate flusher thread hands over the batch once the flush interval has
//! passed since the previous flush. The pending batch, the counters and the
//! first fatal error share one lock.

use std::mem;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, SendError, Sender, bounded, select, tick, unbounded};
use parking_lot::Mutex;

use crate::bulk::batch::{BatchEntry, BulkBatch, EncodedDocument};
use crate::bulk::config::BulkConfig;
use crate::bulk::stats::{DocumentOutcome, FlushTrigger, SinkStats};
use crate::bulk::transport::BulkTransport;
use crate::document::poem::Poem;
use crate::error::{IngestError, Result};

/// A batch on its way to a worker.
struct FlushRequest {
    batch: BulkBatch,
    trigger: FlushTrigger,
}

struct SinkState {
    batch: BulkBatch,
    last_flush: Instant,
    stats: SinkStats,
    /// First transport failure; once set the run is lost.
    fatal: Option<String>,
}

impl SinkState {
    fn take_batch(&mut self, trigger: FlushTrigger) -> FlushRequest {
        self.last_flush = Instant::now();
        self.stats.record_flush(trigger);
        FlushRequest {
            batch: mem::take(&mut self.batch),
            trigger,
        }
    }
}

/// State shared between the sink handle, the flusher and the workers.
struct Shared {
    state: Mutex<SinkState>,
    transport: Arc<dyn BulkTransport>,
    outcomes: Option<Sender<DocumentOutcome>>,
}

impl Shared {
    fn execute(&self, request: FlushRequest) {
        let FlushRequest { batch, trigger } = request;
        let (body, entries) = batch.into_parts();
        let bytes = body.len() as u64;
        let docs = entries.len();

        let earlier_failure = self.state.lock().fatal.clone();
        if let Some(message) = earlier_failure {
            log::debug!("Dropping batch of {docs} documents after transport failure");
            self.fail_all(entries, &message, None);
            return;
        }

        log::debug!("Flushing {docs} documents ({bytes} bytes, trigger: {trigger:?})");
        let started = Instant::now();

        let result = self.transport.bulk(body).and_then(|response| {
            if response.items.len() == docs {
                Ok(response)
            } else {
                Err(IngestError::transport(format!(
                    "bulk response has {} items for {docs} documents",
                    response.items.len()
                )))
            }
        });

        match result {
            Ok(response) => {
                let mut outcomes = Vec::with_capacity(docs);
                let mut indexed = 0u64;
                let mut failed = 0u64;

                for (entry, item) in entries.into_iter().zip(response.items) {
                    let item = item.index;
                    if item.is_success() {
                        indexed += 1;
                        outcomes.push(DocumentOutcome {
                            id: item.id.or(entry.id),
                            label: entry.label,
                            status: Some(item.status),
                            error: None,
                        });
                    } else {
                        failed += 1;
                        let message = item.error_message();
                        log::warn!(
                            "{}",
                            IngestError::rejected(format!("{}: {message}", entry.label))
                        );
                        outcomes.push(DocumentOutcome {
                            id: entry.id.or(item.id),
                            label: entry.label,
                            status: Some(item.status),
                            error: Some(message),
                        });
                    }
                }

                {
                    let mut state = self.state.lock();
                    state.stats.indexed += indexed;
                    state.stats.failed += failed;
                    state.stats.requests_completed += 1;
                    state.stats.bytes_sent += bytes;
                }

                log::debug!(
                    "Bulk request of {docs} documents took {:?} ({failed} failed)",
                    started.elapsed()
                );
                self.publish(outcomes);
            }
            Err(e) => {
                log::error!("Bulk request of {docs} documents failed: {e}");
                let message = e.to_string();
                self.state.lock().fatal.get_or_insert_with(|| message.clone());
                self.fail_all(entries, &message, Some(bytes));
            }
        }
    }

    /// Count every document of a lost batch as failed.
    ///
    /// `sent` carries the body size when the request reached the transport;
    /// batches dropped before sending do not count as requests.
    fn fail_all(&self, entries: Vec<BatchEntry>, message: &str, sent: Option<u64>) {
        {
            let mut state = self.state.lock();
            state.stats.failed += entries.len() as u64;
            if let Some(bytes) = sent {
                state.stats.requests_completed += 1;
                state.stats.bytes_sent += bytes;
            }
        }

        let outcomes = entries
            .into_iter()
            .map(|entry| DocumentOutcome {
                id: entry.id,
                label: entry.label,
                status: None,
                error: Some(message.to_string()),
            })
            .collect();
        self.publish(outcomes);
    }

    fn publish(&self, outcomes: Vec<DocumentOutcome>) {
        if let Some(tx) = &self.outcomes {
            for outcome in outcomes {
                // The receiver may have been dropped; outcomes are optional.
                let _ = tx.send(outcome);
            }
        }
    }

    fn fatal_error(&self) -> Option<IngestError> {
        self.state
            .lock()
            .fatal
            .as_ref()
            .map(|message| IngestError::transport(message.clone()))
    }
}

/// Accumulates documents and sends them to the index in bulk requests.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use poem_indexer::bulk::{BulkConfig, BulkSink, MemoryTransport};
/// use poem_indexer::document::Poem;
///
/// let transport = Arc::new(MemoryTransport::new());
/// let sink = BulkSink::start(BulkConfig::default(), transport.clone()).unwrap();
///
/// sink.submit(&Poem::new("静夜思", "李白").with_paragraph("床前明月光")).unwrap();
///
/// let stats = sink.close().unwrap();
/// assert_eq!(stats.indexed, 1);
/// assert_eq!(transport.documents().len(), 1);
/// ```
pub struct BulkSink {
    config: BulkConfig,
    shared: Arc<Shared>,
    flush_tx: Option<Sender<FlushRequest>>,
    shutdown_tx: Option<Sender<()>>,
    flusher: Option<JoinHandle<()>>,
    workers: Vec<JoinHandle<()>>,
}

impl std::fmt::Debug for BulkSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkSink")
            .field("config", &self.config)
            .field("workers", &self.workers.len())
            .field("open", &self.flush_tx.is_some())
            .finish()
    }
}

impl BulkSink {
    /// Validate the configuration and start the flusher and worker threads.
    pub fn start(config: BulkConfig, transport: Arc<dyn BulkTransport>) -> Result<Self> {
        Self::spawn(config, transport, None)
    }

    /// Like [`BulkSink::start`], also returning a stream with one outcome per
    /// document. The stream ends after the sink is closed.
    pub fn start_with_outcomes(
        config: BulkConfig,
        transport: Arc<dyn BulkTransport>,
    ) -> Result<(Self, Receiver<DocumentOutcome>)> {
        let (tx, rx) = unbounded();
        let sink = Self::spawn(config, transport, Some(tx))?;
        Ok((sink, rx))
    }

    fn spawn(
        config: BulkConfig,
        transport: Arc<dyn BulkTransport>,
        outcomes: Option<Sender<DocumentOutcome>>,
    ) -> Result<Self> {
        config.validate()?;

        let (flush_tx, flush_rx) = bounded::<FlushRequest>(config.queue_capacity);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let shared = Arc::new(Shared {
            state: Mutex::new(SinkState {
                batch: BulkBatch::new(),
                last_flush: Instant::now(),
                stats: SinkStats::default(),
                fatal: None,
            }),
            transport,
            outcomes,
        });

        let mut workers = Vec::with_capacity(config.workers);
        for worker_id in 0..config.workers {
            let requests = flush_rx.clone();
            let shared = Arc::clone(&shared);
            let handle = thread::Builder::new()
                .name(format!("bulk-worker-{worker_id}"))
                .spawn(move || {
                    for request in requests.iter() {
                        shared.execute(request);
                    }
                })?;
            workers.push(handle);
        }
        drop(flush_rx);

        let flusher = {
            let shared = Arc::clone(&shared);
            let flush_tx = flush_tx.clone();
            let interval = config.flush_interval;
            thread::Builder::new()
                .name("bulk-flusher".to_string())
                .spawn(move || run_flusher(shared, flush_tx, shutdown_rx, interval))?
        };

        log::debug!(
            "Bulk sink started: index={}, workers={}, max_actions={}, max_bytes={}, flush_interval={:?}",
            config.index,
            config.workers,
            config.max_actions,
            config.max_bytes,
            config.flush_interval
        );

        Ok(Self {
            config,
            shared,
            flush_tx: Some(flush_tx),
            shutdown_tx: Some(shutdown_tx),
            flusher: Some(flusher),
            workers,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BulkConfig {
        &self.config
    }

    /// Queue a poem for indexing.
    ///
    /// Returns once the poem is part of the pending batch. Blocks only while
    /// the flush queue is full. Fails after a transport failure.
    pub fn submit(&self, poem: &Poem) -> Result<()> {
        let flush_tx = self
            .flush_tx
            .as_ref()
            .ok_or_else(|| IngestError::other("bulk sink is closed"))?;

        let doc = EncodedDocument::encode(&self.config.index, self.config.id_strategy, poem)?;

        let request = {
            let mut state = self.shared.state.lock();
            if let Some(message) = &state.fatal {
                return Err(IngestError::transport(message.clone()));
            }

            state.batch.push(doc);
            state.stats.submitted += 1;

            if state
                .batch
                .is_full(self.config.max_actions, self.config.max_bytes)
            {
                let trigger = if state.batch.len() >= self.config.max_actions {
                    FlushTrigger::Count
                } else {
                    FlushTrigger::Size
                };
                Some(state.take_batch(trigger))
            } else {
                None
            }
        };

        if let Some(request) = request {
            self.dispatch(flush_tx, request)?;
        }
        Ok(())
    }

    fn dispatch(&self, flush_tx: &Sender<FlushRequest>, request: FlushRequest) -> Result<()> {
        if let Err(SendError(request)) = flush_tx.send(request) {
            let message = "bulk workers have stopped".to_string();
            self.shared
                .state
                .lock()
                .fatal
                .get_or_insert_with(|| message.clone());
            let (_, entries) = request.batch.into_parts();
            self.shared.fail_all(entries, &message, None);
            return Err(IngestError::transport(message));
        }
        Ok(())
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SinkStats {
        self.shared.state.lock().stats.clone()
    }

    /// Flush what is pending, wait for every request to finish and stop the threads.
    ///
    /// Returns the final counters, or the transport error if any bulk request
    /// failed as a whole.
    pub fn close(mut self) -> Result<SinkStats> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<SinkStats> {
        // Stop the interval flusher before taking the final batch.
        drop(self.shutdown_tx.take());
        if let Some(flusher) = self.flusher.take()
            && flusher.join().is_err()
        {
            log::error!("Bulk flusher thread panicked");
        }

        if let Some(flush_tx) = self.flush_tx.take() {
            let remaining = {
                let mut state = self.shared.state.lock();
                if state.batch.is_empty() {
                    None
                } else {
                    Some(state.take_batch(FlushTrigger::Close))
                }
            };
            if let Some(request) = remaining {
                // A failure here is recorded as fatal and reported below.
                let _ = self.dispatch(&flush_tx, request);
            }
        }

        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                let mut state = self.shared.state.lock();
                state
                    .fatal
                    .get_or_insert_with(|| "bulk worker panicked".to_string());
            }
        }

        match self.shared.fatal_error() {
            Some(e) => Err(e),
            None => Ok(self.stats()),
        }
    }
}

impl Drop for BulkSink {
    fn drop(&mut self) {
        if self.flush_tx.is_some() {
            log::warn!("Bulk sink dropped without close; flushing pending documents");
            if let Err(e) = self.shutdown() {
                log::error!("Failed to flush bulk sink: {e}");
            }
        }
    }
}

fn flusher_period(interval: Duration) -> Duration {
    (interval / 4).clamp(Duration::from_millis(5), Duration::from_secs(1))
}

fn run_flusher(
    shared: Arc<Shared>,
    flush_tx: Sender<FlushRequest>,
    shutdown_rx: Receiver<()>,
    interval: Duration,
) {
    let ticker = tick(flusher_period(interval));
    loop {
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(ticker) -> _ => {
                let due = {
                    let mut state = shared.state.lock();
                    if !state.batch.is_empty() && state.last_flush.elapsed() >= interval {
                        Some(state.take_batch(FlushTrigger::Interval))
                    } else {
                        None
                    }
                };
                if let Some(request) = due
                    && flush_tx.send(request).is_err()
                {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk::config::IdStrategy;
    use crate::bulk::transport::MemoryTransport;

    const WAIT: Duration = Duration::from_secs(10);

    fn create_test_poem(i: usize) -> Poem {
        Poem::new(format!("poem-{i}"), "李白").with_paragraph("床前明月光")
    }

    fn quiet_config() -> BulkConfig {
        BulkConfig::default().with_flush_interval(Duration::from_secs(3600))
    }

    fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
        let deadline = Instant::now() + WAIT;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        condition()
    }

    #[test]
    fn test_count_threshold_flushes_once() {
        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(quiet_config().with_max_actions(5), transport.clone()).unwrap();

        for i in 0..5 {
            sink.submit(&create_test_poem(i)).unwrap();
        }

        assert!(transport.wait_for_requests(1, WAIT));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].documents.len(), 5);

        let stats = sink.close().unwrap();
        assert_eq!(stats.flushes.count, 1);
        assert_eq!(stats.flushes.total(), 1);
        assert_eq!(stats.indexed, 5);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_default_count_threshold() {
        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(BulkConfig::default(), transport.clone()).unwrap();

        for i in 0..1000 {
            sink.submit(&create_test_poem(i)).unwrap();
        }

        // Flushed long before the 30s interval.
        assert!(transport.wait_for_requests(1, WAIT));
        assert_eq!(transport.requests()[0].documents.len(), 1000);

        let stats = sink.close().unwrap();
        assert_eq!(stats.flushes.count, 1);
        assert_eq!(stats.flushes.total(), 1);
        assert_eq!(stats.indexed, 1000);
    }

    #[test]
    fn test_size_threshold_flushes_at_boundary() {
        let doc_size = EncodedDocument::encode("poems", IdStrategy::ContentHash, &create_test_poem(0))
            .unwrap()
            .len();
        let config = quiet_config().with_max_bytes(doc_size * 3 - 1);

        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(config, transport.clone()).unwrap();

        for i in 0..3 {
            sink.submit(&create_test_poem(i)).unwrap();
        }

        assert!(transport.wait_for_requests(1, WAIT));
        let requests = transport.requests();
        assert_eq!(requests[0].documents.len(), 3);
        assert_eq!(requests[0].bytes, doc_size * 3);

        let stats = sink.close().unwrap();
        assert_eq!(stats.flushes.size, 1);
        assert_eq!(stats.flushes.count, 0);
        assert_eq!(stats.flushes.total(), 1);
    }

    #[test]
    fn test_close_flushes_remainder_once() {
        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(quiet_config(), transport.clone()).unwrap();

        for i in 0..3 {
            sink.submit(&create_test_poem(i)).unwrap();
        }
        assert!(transport.requests().is_empty());

        let stats = sink.close().unwrap();
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].documents.len(), 3);
        assert_eq!(stats.flushes.close, 1);
        assert_eq!(stats.flushes.total(), 1);
        assert_eq!(stats.submitted, 3);
        assert_eq!(stats.indexed, 3);
        assert_eq!(stats.pending(), 0);
    }

    #[test]
    fn test_close_without_documents_sends_nothing() {
        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(quiet_config(), transport.clone()).unwrap();

        let stats = sink.close().unwrap();
        assert_eq!(stats, SinkStats::default());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_interval_flush() {
        let transport = Arc::new(MemoryTransport::new());
        let config = BulkConfig::default().with_flush_interval(Duration::from_millis(50));
        let sink = BulkSink::start(config, transport.clone()).unwrap();

        sink.submit(&create_test_poem(0)).unwrap();
        sink.submit(&create_test_poem(1)).unwrap();

        assert!(transport.wait_for_requests(1, WAIT));
        assert_eq!(transport.requests()[0].documents.len(), 2);

        let stats = sink.close().unwrap();
        assert_eq!(stats.flushes.interval, 1);
        assert_eq!(stats.indexed, 2);
    }

    #[test]
    fn test_document_failures_are_counted() {
        let transport = Arc::new(MemoryTransport::new().with_rejection(|doc| {
            (doc["title"] == "poem-1").then(|| "failed to parse field [title]".to_string())
        }));
        let (sink, outcomes) =
            BulkSink::start_with_outcomes(quiet_config(), transport.clone()).unwrap();

        for i in 0..3 {
            sink.submit(&create_test_poem(i)).unwrap();
        }
        let stats = sink.close().unwrap();

        assert_eq!(stats.indexed, 2);
        assert_eq!(stats.failed, 1);

        let outcomes: Vec<DocumentOutcome> = outcomes.iter().collect();
        assert_eq!(outcomes.len(), 3);
        let failures: Vec<&DocumentOutcome> = outcomes.iter().filter(|o| !o.is_success()).collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].label, "poem-1 (李白)");
        assert_eq!(failures[0].status, Some(400));
        assert!(
            failures[0]
                .error
                .as_deref()
                .unwrap()
                .contains("failed to parse field")
        );
    }

    #[test]
    fn test_transport_failure_is_fatal() {
        let transport = Arc::new(MemoryTransport::unreachable("connection refused"));
        let sink = BulkSink::start(quiet_config().with_max_actions(2), transport).unwrap();

        sink.submit(&create_test_poem(0)).unwrap();
        sink.submit(&create_test_poem(1)).unwrap();

        assert!(wait_until(|| sink.stats().failed == 2));
        let err = sink.submit(&create_test_poem(2)).unwrap_err();
        assert!(matches!(err, IngestError::Transport(_)));

        let err = sink.close().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_concurrent_workers_keep_counts() {
        let transport =
            Arc::new(MemoryTransport::new().with_latency(Duration::from_millis(2)));
        let config = quiet_config().with_max_actions(10).with_workers(4);
        let sink = BulkSink::start(config, transport.clone()).unwrap();

        for i in 0..1000 {
            sink.submit(&create_test_poem(i)).unwrap();
        }
        let stats = sink.close().unwrap();

        assert_eq!(stats.submitted, 1000);
        assert_eq!(stats.indexed, 1000);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.flushes.count, 100);
        assert_eq!(stats.requests_completed, 100);
        assert_eq!(transport.documents().len(), 1000);
    }

    #[test]
    fn test_drop_flushes_pending() {
        let transport = Arc::new(MemoryTransport::new());
        let sink = BulkSink::start(quiet_config(), transport.clone()).unwrap();
        sink.submit(&create_test_poem(0)).unwrap();

        drop(sink);
        assert_eq!(transport.documents().len(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let transport = Arc::new(MemoryTransport::new());
        let err = BulkSink::start(BulkConfig::default().with_workers(0), transport).unwrap_err();
        assert!(matches!(err, IngestError::Config(_)));
    }

    fn shared_with(transport: Arc<MemoryTransport>, fatal: Option<&str>) -> Shared {
        Shared {
            state: Mutex::new(SinkState {
                batch: BulkBatch::new(),
                last_flush: Instant::now(),
                stats: SinkStats::default(),
                fatal: fatal.map(str::to_string),
            }),
            transport,
            outcomes: None,
        }
    }

    fn flush_request(docs: usize) -> FlushRequest {
        let mut batch = BulkBatch::new();
        for i in 0..docs {
            let poem = create_test_poem(i);
            batch.push(EncodedDocument::encode("poems", IdStrategy::ContentHash, &poem).unwrap());
        }
        FlushRequest {
            batch,
            trigger: FlushTrigger::Count,
        }
    }

    #[test]
    fn test_dropped_batch_is_not_a_request() {
        let transport = Arc::new(MemoryTransport::new());
        let shared = shared_with(transport.clone(), Some("connection reset"));

        shared.execute(flush_request(3));

        let stats = shared.state.lock().stats.clone();
        assert_eq!(stats.failed, 3);
        assert_eq!(stats.requests_completed, 0);
        assert_eq!(stats.bytes_sent, 0);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_failed_send_counts_as_request() {
        let transport = Arc::new(MemoryTransport::unreachable("connection refused"));
        let shared = shared_with(transport, None);

        shared.execute(flush_request(2));
        shared.execute(flush_request(2));

        let stats = shared.state.lock().stats.clone();
        assert_eq!(stats.failed, 4);
        assert_eq!(stats.requests_completed, 1);
        assert!(stats.bytes_sent > 0);
        assert!(shared.fatal_error().is_some());
    }

    #[test]
    fn test_flusher_period() {
        assert_eq!(flusher_period(Duration::from_secs(30)), Duration::from_secs(1));
        assert_eq!(flusher_period(Duration::from_millis(40)), Duration::from_millis(10));
        assert_eq!(flusher_period(Duration::from_millis(1)), Duration::from_millis(5));
    }
}
