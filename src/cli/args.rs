//! Command line argument parsing for the poem indexer using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::bulk::config::{DEFAULT_INDEX, IdStrategy};
use crate::bulk::elasticsearch::DEFAULT_URL;
use crate::bulk::{BulkConfig, ElasticsearchConfig};
use crate::pipeline::PipelineConfig;
use crate::walker::WalkConfig;

/// poem-indexer - Load JSON poem collections into a search index
#[derive(Parser, Debug, Clone)]
#[command(name = "poem-indexer")]
#[command(about = "Convert JSON poem collections to simplified Chinese and bulk-load them into Elasticsearch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct IndexerArgs {
    /// Verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format of the run summary
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Root directory to scan for poem files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Search service URL
    #[arg(long = "es", value_name = "URL", env = "ES_URL", default_value = DEFAULT_URL)]
    pub es_url: String,

    /// User name for basic auth
    #[arg(long = "user", env = "ES_USER", default_value = "elastic")]
    pub username: String,

    /// Password for basic auth
    #[arg(long = "pass", env = "ES_PASS", default_value = "123456", hide_env_values = true)]
    pub password: String,

    /// PEM file with an additional CA certificate to trust
    #[arg(long, value_name = "FILE", env = "ES_CA_CERT")]
    pub ca_cert: Option<PathBuf>,

    /// Target index
    #[arg(long, default_value = DEFAULT_INDEX)]
    pub index: String,

    /// Flush after this many documents
    #[arg(long, default_value_t = 1000)]
    pub batch_size: usize,

    /// Flush once a request body reaches this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = 2 << 20)]
    pub batch_bytes: usize,

    /// Flush pending documents after this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub flush_interval: u64,

    /// Number of concurrent bulk requests
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub timeout: u64,

    /// File name to skip, in addition to the corpus defaults (repeatable)
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_files: Vec<String>,

    /// Directory name whose subtree is skipped, in addition to "error" (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// How document ids are chosen
    #[arg(long, value_enum, default_value_t = IdStrategy::ContentHash)]
    pub id_strategy: IdStrategy,

    /// Process everything but discard bulk requests instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

impl IndexerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }

    /// Traversal settings from the exclusion flags.
    pub fn walk_config(&self) -> WalkConfig {
        let config = self
            .exclude_files
            .iter()
            .fold(WalkConfig::default(), |config, name| {
                config.with_excluded_file(name.as_str())
            });
        self.exclude_dirs
            .iter()
            .fold(config, |config, name| config.with_excluded_dir(name.as_str()))
    }

    /// Batching settings from the bulk flags.
    pub fn bulk_config(&self) -> BulkConfig {
        BulkConfig::default()
            .with_index(self.index.as_str())
            .with_max_actions(self.batch_size)
            .with_max_bytes(self.batch_bytes)
            .with_flush_interval(Duration::from_secs(self.flush_interval))
            .with_workers(self.workers)
            .with_id_strategy(self.id_strategy)
    }

    /// Connection settings for the search service.
    pub fn elasticsearch_config(&self) -> ElasticsearchConfig {
        ElasticsearchConfig {
            url: self.es_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            ca_cert: self.ca_cert.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.dir)
            .with_walk(self.walk_config())
            .with_bulk(self.bulk_config())
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = IndexerArgs::try_parse_from(["poem-indexer"]).unwrap();

        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(args.index, "poems");
        assert_eq!(args.batch_size, 1000);
        assert_eq!(args.batch_bytes, 2 * 1024 * 1024);
        assert_eq!(args.flush_interval, 30);
        assert_eq!(args.workers, 4);
        assert_eq!(args.id_strategy, IdStrategy::ContentHash);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_connection_flags() {
        let args = IndexerArgs::try_parse_from([
            "poem-indexer",
            "--es",
            "https://search.local:9200",
            "--user",
            "admin",
            "--pass",
            "secret",
            "--ca-cert",
            "/etc/ssl/ca.pem",
        ])
        .unwrap();

        let config = args.elasticsearch_config();
        assert_eq!(config.url, "https://search.local:9200");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert_eq!(config.ca_cert, Some(PathBuf::from("/etc/ssl/ca.pem")));
    }

    #[test]
    fn test_exclusions() {
        let args = IndexerArgs::try_parse_from([
            "poem-indexer",
            "--dir",
            "/data/poems",
            "--exclude-file",
            "authors.song.json",
            "--exclude-file",
            "placeholder.json",
            "--exclude-dir",
            "drafts",
        ])
        .unwrap();

        let walk = args.walk_config();
        assert!(walk.exclude_files.contains("authors.song.json"));
        assert!(walk.exclude_files.contains("placeholder.json"));
        assert!(walk.exclude_files.contains("唐诗补录.json"));
        assert!(walk.exclude_dirs.contains("drafts"));
        assert!(walk.exclude_dirs.contains("error"));
        assert_eq!(args.pipeline_config().root, PathBuf::from("/data/poems"));
    }

    #[test]
    fn test_bulk_flags() {
        let args = IndexerArgs::try_parse_from([
            "poem-indexer",
            "--index",
            "tang",
            "--batch-size",
            "500",
            "--flush-interval",
            "5",
            "--workers",
            "2",
            "--id-strategy",
            "auto",
        ])
        .unwrap();

        let bulk = args.bulk_config();
        assert_eq!(bulk.index, "tang");
        assert_eq!(bulk.max_actions, 500);
        assert_eq!(bulk.flush_interval, Duration::from_secs(5));
        assert_eq!(bulk.workers, 2);
        assert_eq!(bulk.id_strategy, IdStrategy::Auto);
        assert!(bulk.validate().is_ok());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = IndexerArgs::try_parse_from(["poem-indexer"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = IndexerArgs::try_parse_from(["poem-indexer", "-v"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = IndexerArgs::try_parse_from(["poem-indexer", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = IndexerArgs::try_parse_from(["poem-indexer", "-v", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let mut args = IndexerArgs::try_parse_from(["poem-indexer"]).unwrap();
        args.verbose = u8::MAX;
        assert_eq!(args.verbosity(), u8::MAX);
    }

    #[test]
    fn test_output_format() {
        let args = IndexerArgs::try_parse_from(["poem-indexer", "--format", "json"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        assert!(IndexerArgs::try_parse_from(["poem-indexer", "--format", "yaml"]).is_err());
    }
}
