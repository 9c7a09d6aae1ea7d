use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use poem_indexer::bulk::transport::{BulkItemResult, BulkResponse, BulkResponseItem};
use poem_indexer::bulk::{
    BulkConfig, BulkSink, BulkTransport, ClusterInfo, IdStrategy, MemoryTransport,
};
use poem_indexer::document::Poem;
use poem_indexer::error::{IngestError, Result};

/// Answers every bulk request with a fixed number of successful items.
struct ShortResponseTransport {
    items: usize,
    calls: AtomicUsize,
}

impl BulkTransport for ShortResponseTransport {
    fn info(&self) -> Result<ClusterInfo> {
        Ok(ClusterInfo::default())
    }

    fn bulk(&self, _body: Vec<u8>) -> Result<BulkResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = (0..self.items)
            .map(|i| BulkResponseItem {
                index: BulkItemResult {
                    index: "poems".to_string(),
                    id: Some(i.to_string()),
                    status: 201,
                    error: None,
                },
            })
            .collect();
        Ok(BulkResponse {
            took: 1,
            errors: false,
            items,
        })
    }
}

fn poem(i: usize) -> Poem {
    Poem::new(format!("無題{i}"), "李商隱").with_paragraph("相見時難別亦難")
}

fn config() -> BulkConfig {
    BulkConfig::default().with_flush_interval(Duration::from_secs(3600))
}

#[test]
fn test_item_count_mismatch_is_fatal() {
    let transport = Arc::new(ShortResponseTransport {
        items: 1,
        calls: AtomicUsize::new(0),
    });
    let sink = BulkSink::start(config(), transport.clone()).unwrap();

    sink.submit(&poem(0)).unwrap();
    sink.submit(&poem(1)).unwrap();

    let err = sink.close().unwrap_err();
    assert!(matches!(err, IngestError::Transport(_)));
    assert!(err.to_string().contains("1 items for 2 documents"));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_batches_after_transport_failure_are_not_sent() {
    let transport = Arc::new(ShortResponseTransport {
        items: 0,
        calls: AtomicUsize::new(0),
    });
    let sink = BulkSink::start(
        config().with_max_actions(1).with_workers(1),
        transport.clone(),
    )
    .unwrap();

    // The first submit flushes immediately; later ones may race the failure.
    let mut accepted = 0;
    for i in 0..20 {
        if sink.submit(&poem(i)).is_ok() {
            accepted += 1;
        }
    }

    let stats = sink.stats();
    assert!(accepted >= 1);
    assert!(sink.close().is_err());
    assert!(transport.calls.load(Ordering::SeqCst) <= accepted);
    assert!(stats.submitted as usize >= accepted);
}

#[test]
fn test_outcome_stream_reports_every_document() {
    let transport = Arc::new(MemoryTransport::new());
    let (sink, outcomes) = BulkSink::start_with_outcomes(
        config().with_max_actions(3).with_id_strategy(IdStrategy::Auto),
        transport,
    )
    .unwrap();

    for i in 0..7 {
        sink.submit(&poem(i).normalized()).unwrap();
    }
    let stats = sink.close().unwrap();

    let outcomes: Vec<_> = outcomes.iter().collect();
    assert_eq!(outcomes.len(), 7);
    assert!(outcomes.iter().all(|o| o.is_success()));
    assert!(outcomes.iter().all(|o| o.id.as_deref().is_some_and(|id| id.starts_with("mem-"))));
    assert!(outcomes.iter().any(|o| o.label == "无题0 (李商隐)"));

    assert_eq!(stats.flushes.count, 2);
    assert_eq!(stats.flushes.close, 1);
    assert_eq!(stats.indexed, 7);
}

#[test]
fn test_slow_transport_applies_backpressure_without_loss() {
    let transport = Arc::new(MemoryTransport::new().with_latency(Duration::from_millis(5)));
    let sink = BulkSink::start(
        config()
            .with_max_actions(2)
            .with_workers(1)
            .with_queue_capacity(1),
        transport.clone(),
    )
    .unwrap();

    for i in 0..40 {
        sink.submit(&poem(i)).unwrap();
    }
    let stats = sink.close().unwrap();

    assert_eq!(stats.indexed, 40);
    assert_eq!(stats.pending(), 0);
    assert_eq!(transport.requests().len(), 20);
}
