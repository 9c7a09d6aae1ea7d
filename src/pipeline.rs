//! Run controller: walk, load, normalize and index in one pass.
//!
//! The pipeline checks that the search service answers, starts a
//! [`BulkSink`], feeds it every poem found below the root directory and
//! closes it. Walking, loading and normalization happen on the calling
//! thread; the sink's workers overlap the network traffic with them.
//!
//! # Example
//!
//! ```
//! use std::fs;
//! use std::sync::Arc;
//!
//! use poem_indexer::bulk::MemoryTransport;
//! use poem_indexer::pipeline::{IngestPipeline, PipelineConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(
//!     dir.path().join("tang.json"),
//!     r#"[{"title":"靜夜思","author":"李白","paragraphs":["床前明月光"],"notes":[]}]"#,
//! )
//! .unwrap();
//!
//! let transport = Arc::new(MemoryTransport::new());
//! let pipeline = IngestPipeline::new(PipelineConfig::new(dir.path()), transport.clone());
//! let summary = pipeline.run().unwrap();
//!
//! assert!(summary.success);
//! assert_eq!(summary.documents_indexed, 1);
//! assert_eq!(transport.documents()[0]["title"], "静夜思");
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bulk::{BulkConfig, BulkSink, BulkTransport, SinkStats};
use crate::document::loader::{DocumentLoader, JsonPoemLoader};
use crate::error::Result;
use crate::walker::{DirectoryWalker, WalkConfig};

/// Shared flag that asks a running pipeline to stop early.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// The underlying flag, for registering signal handlers.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }
}

/// Configuration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory to scan.
    pub root: PathBuf,

    /// Traversal and exclusion rules.
    pub walk: WalkConfig,

    /// Batching and index settings.
    pub bulk: BulkConfig,
}

impl PipelineConfig {
    /// Default settings for `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            walk: WalkConfig::default(),
            bulk: BulkConfig::default(),
        }
    }

    pub fn with_walk(mut self, walk: WalkConfig) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_bulk(mut self, bulk: BulkConfig) -> Self {
        self.bulk = bulk;
        self
    }
}

/// Final report of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,

    /// Target index.
    pub index: String,

    /// Matching files handed to the loader.
    pub files_scanned: u64,

    /// Files that could not be read or decoded.
    pub files_skipped: u64,

    pub documents_submitted: u64,
    pub documents_indexed: u64,
    pub documents_failed: u64,

    /// Bulk requests sent.
    pub batches: u64,

    pub bytes_sent: u64,
    pub duration_ms: u64,

    /// Indexed documents per second of wall-clock time.
    pub docs_per_second: f64,

    /// Whether the run stopped early on request.
    pub cancelled: bool,

    /// No document failed and the run was not cancelled.
    pub success: bool,
}

impl RunSummary {
    fn new(
        started_at: DateTime<Utc>,
        index: &str,
        files: FileCounters,
        stats: &SinkStats,
        elapsed: Duration,
        cancelled: bool,
    ) -> Self {
        let seconds = elapsed.as_secs_f64();
        let docs_per_second = if seconds > 0.0 {
            stats.indexed as f64 / seconds
        } else {
            0.0
        };

        Self {
            started_at,
            index: index.to_string(),
            files_scanned: files.scanned,
            files_skipped: files.skipped,
            documents_submitted: stats.submitted,
            documents_indexed: stats.indexed,
            documents_failed: stats.failed,
            batches: stats.requests_completed,
            bytes_sent: stats.bytes_sent,
            duration_ms: elapsed.as_millis() as u64,
            docs_per_second,
            cancelled,
            success: stats.failed == 0 && !cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct FileCounters {
    scanned: u64,
    skipped: u64,
}

/// Drives one indexing run.
pub struct IngestPipeline {
    config: PipelineConfig,
    transport: Arc<dyn BulkTransport>,
    loader: Arc<dyn DocumentLoader>,
    cancel: CancellationToken,
}

impl IngestPipeline {
    /// Create a pipeline that loads JSON poem files and sends them to `transport`.
    pub fn new(config: PipelineConfig, transport: Arc<dyn BulkTransport>) -> Self {
        Self {
            config,
            transport,
            loader: Arc::new(JsonPoemLoader::new()),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the file loader.
    pub fn with_loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Use `token` to stop the run early.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run to completion.
    ///
    /// Fails if the service does not answer, the directory walk breaks or a
    /// bulk request cannot be delivered. Rejected documents do not fail the
    /// run; they are counted in the summary.
    pub fn run(&self) -> Result<RunSummary> {
        let started_at = Utc::now();
        let started = Instant::now();

        let info = self.transport.info()?;
        log::info!(
            "Search service returned status {} and version {}",
            info.status,
            info.version.number
        );

        let sink = BulkSink::start(self.config.bulk.clone(), Arc::clone(&self.transport))?;

        let mut files = FileCounters::default();
        let fed = self.feed(&sink, &mut files);

        // The sink is closed on every path so that nothing stays in flight.
        let closed = sink.close();
        let cancelled = fed?;
        let stats = closed?;

        let summary = RunSummary::new(
            started_at,
            &self.config.bulk.index,
            files,
            &stats,
            started.elapsed(),
            cancelled,
        );

        log::info!(
            "Indexed {} documents ({} failed) from {} files in {} ms, {:.1} docs/s",
            summary.documents_indexed,
            summary.documents_failed,
            summary.files_scanned,
            summary.duration_ms,
            summary.docs_per_second
        );

        Ok(summary)
    }

    /// Feed every poem to the sink. Returns whether the run was cancelled.
    fn feed(&self, sink: &BulkSink, files: &mut FileCounters) -> Result<bool> {
        let walker = DirectoryWalker::new(self.config.walk.clone());

        for entry in walker.walk(&self.config.root) {
            if self.cancel.is_cancelled() {
                log::warn!("Cancellation requested; no further files will be read");
                return Ok(true);
            }

            let path = entry?;
            files.scanned += 1;

            let poems = match self.loader.load(&path) {
                Ok(poems) => poems,
                Err(e) => {
                    log::warn!("Skipping file: {e}");
                    files.skipped += 1;
                    continue;
                }
            };

            for poem in &poems {
                if self.cancel.is_cancelled() {
                    log::warn!(
                        "Cancellation requested while reading {}",
                        path.display()
                    );
                    return Ok(true);
                }
                sink.submit(&poem.normalized())?;
            }

            log::debug!("Processed file: {}", path.display());
        }

        Ok(self.cancel.is_cancelled())
    }
}
