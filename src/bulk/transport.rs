//! The bulk endpoint of the search index, behind a trait.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Root endpoint response of the search service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterInfo {
    /// HTTP status of the info request.
    #[serde(skip)]
    pub status: u16,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub cluster_name: String,

    #[serde(default)]
    pub version: VersionInfo,
}

/// Version block of [`ClusterInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub number: String,
}

/// Response body of a bulk request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,

    /// True when at least one item failed.
    #[serde(default)]
    pub errors: bool,

    /// One item per action, in request order.
    #[serde(default)]
    pub items: Vec<BulkResponseItem>,
}

/// One entry of `items`, keyed by the action name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkResponseItem {
    #[serde(alias = "create", alias = "update", alias = "delete")]
    pub index: BulkItemResult,
}

/// Result of one action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkItemResult {
    #[serde(rename = "_index", default)]
    pub index: String,

    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    pub status: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BulkItemError>,
}

impl BulkItemResult {
    /// Whether the document was stored.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.error.is_none()
    }

    /// Failure description for logs.
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(error) => match &error.reason {
                Some(reason) => format!("{}: {}", error.kind, reason),
                None => error.kind.clone(),
            },
            None => format!("status {}", self.status),
        }
    }
}

/// Error object of a failed action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkItemError {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub reason: Option<String>,
}

/// Access to the search service.
///
/// Implementations do I/O only: they send the body they are given and
/// report what came back. Batching and accounting live in the sink.
pub trait BulkTransport: Send + Sync {
    /// Fetch the root info document. Fails if the service is unreachable.
    fn info(&self) -> Result<ClusterInfo>;

    /// Send one NDJSON bulk body.
    ///
    /// An `Err` means the request as a whole failed; per-document failures
    /// are reported through the items of an `Ok` response.
    fn bulk(&self, body: Vec<u8>) -> Result<BulkResponse>;
}

/// A bulk request captured by [`MemoryTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Action lines, in order.
    pub actions: Vec<Value>,

    /// Source documents, in order.
    pub documents: Vec<Value>,

    /// Body size in bytes.
    pub bytes: usize,
}

type RejectFn = Box<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Transport that answers bulk requests in memory.
///
/// Used for dry runs and in tests. Documents are accepted unless a rejection
/// rule matches them; the whole transport can be made to fail to simulate an
/// unreachable service. A recording transport keeps every request; a
/// discarding one only counts them.
pub struct MemoryTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    arrived: Condvar,
    record: bool,
    received: AtomicUsize,
    reject: Option<RejectFn>,
    failure: Option<String>,
    latency: Duration,
    next_id: Mutex<u64>,
}

impl std::fmt::Debug for MemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTransport")
            .field("requests", &self.request_count())
            .field("record", &self.record)
            .field("reject", &self.reject.as_ref().map(|_| "<RejectFn>"))
            .field("failure", &self.failure)
            .field("latency", &self.latency)
            .finish()
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransport {
    /// Create a transport that accepts and records everything.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            arrived: Condvar::new(),
            record: true,
            received: AtomicUsize::new(0),
            reject: None,
            failure: None,
            latency: Duration::ZERO,
            next_id: Mutex::new(0),
        }
    }

    /// Create a transport that accepts everything and keeps nothing.
    pub fn discarding() -> Self {
        Self {
            record: false,
            ..Self::new()
        }
    }

    /// Create a transport whose info and bulk calls always fail.
    pub fn unreachable<S: Into<String>>(message: S) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Reject documents for which `rule` returns an error reason.
    pub fn with_rejection<F>(mut self, rule: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.reject = Some(Box::new(rule));
        self
    }

    /// Delay every bulk call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of bulk requests answered so far, recorded or not.
    pub fn request_count(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// All requests recorded so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// All documents received so far, across requests.
    pub fn documents(&self) -> Vec<Value> {
        self.requests
            .lock()
            .iter()
            .flat_map(|r| r.documents.iter().cloned())
            .collect()
    }

    /// Block until at least `count` requests arrived or `timeout` passed.
    /// Returns whether the count was reached.
    pub fn wait_for_requests(&self, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut requests = self.requests.lock();
        while self.request_count() < count {
            if self.arrived.wait_until(&mut requests, deadline).timed_out() {
                return self.request_count() >= count;
            }
        }
        true
    }

    fn parse_body(body: &[u8]) -> Result<(Vec<Value>, Vec<Value>)> {
        let mut actions = Vec::new();
        let mut documents = Vec::new();
        let lines: Vec<&[u8]> = body
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() % 2 != 0 {
            return Err(IngestError::transport("bulk body has an odd number of lines"));
        }
        for pair in lines.chunks(2) {
            actions.push(serde_json::from_slice(pair[0])?);
            documents.push(serde_json::from_slice(pair[1])?);
        }
        Ok((actions, documents))
    }
}

impl BulkTransport for MemoryTransport {
    fn info(&self) -> Result<ClusterInfo> {
        if let Some(message) = &self.failure {
            return Err(IngestError::connectivity(message.clone()));
        }
        Ok(ClusterInfo {
            status: 200,
            name: "memory".to_string(),
            cluster_name: "memory".to_string(),
            version: VersionInfo {
                number: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    fn bulk(&self, body: Vec<u8>) -> Result<BulkResponse> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if let Some(message) = &self.failure {
            return Err(IngestError::transport(message.clone()));
        }

        let started = Instant::now();
        let bytes = body.len();
        let (actions, documents) = Self::parse_body(&body)?;

        let mut items = Vec::with_capacity(documents.len());
        for (action, document) in actions.iter().zip(&documents) {
            let rejection = self.reject.as_ref().and_then(|rule| rule(document));
            let item = match rejection {
                Some(reason) => BulkItemResult {
                    index: action["index"]["_index"].as_str().unwrap_or_default().to_string(),
                    id: None,
                    status: 400,
                    error: Some(BulkItemError {
                        kind: "mapper_parsing_exception".to_string(),
                        reason: Some(reason),
                    }),
                },
                None => {
                    let id = match action["index"]["_id"].as_str() {
                        Some(id) => id.to_string(),
                        None => {
                            let mut next_id = self.next_id.lock();
                            *next_id += 1;
                            format!("mem-{}", *next_id)
                        }
                    };
                    BulkItemResult {
                        index: action["index"]["_index"].as_str().unwrap_or_default().to_string(),
                        id: Some(id),
                        status: 201,
                        error: None,
                    }
                }
            };
            items.push(BulkResponseItem { index: item });
        }

        let errors = items.iter().any(|item| !item.index.is_success());
        {
            let mut requests = self.requests.lock();
            self.received.fetch_add(1, Ordering::SeqCst);
            if self.record {
                requests.push(RecordedRequest {
                    actions,
                    documents,
                    bytes,
                });
            }
        }
        self.arrived.notify_all();

        Ok(BulkResponse {
            took: started.elapsed().as_millis() as u64,
            errors,
            items,
        })
    }
}
