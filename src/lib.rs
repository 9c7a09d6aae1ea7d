//! # poem-indexer
//!
//! Batch loader for collections of classical Chinese poems.
//!
//! ## Features
//!
//! - Recursive discovery of JSON poem files with file and directory exclusions
//! - Traditional to simplified Chinese conversion of every text field
//! - Bulk indexing into Elasticsearch with count, size and interval flushes
//! - Concurrent bulk requests with per-document outcome accounting
//! - Stable content-derived document ids

pub mod bulk;
pub mod cli;
pub mod document;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod walker;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
