//! Command implementation for the poem indexer CLI.

use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

use crate::bulk::{BulkTransport, ElasticsearchClient, MemoryTransport};
use crate::cli::args::IndexerArgs;
use crate::cli::output::output_summary;
use crate::error::{IngestError, Result};
use crate::pipeline::{CancellationToken, IngestPipeline, RunSummary};

/// Run one indexing pass as described by `args` and print its summary.
///
/// A cancelled run prints its summary and then fails with
/// [`IngestError::Cancelled`].
pub fn execute_command(args: IndexerArgs, cancel: CancellationToken) -> Result<RunSummary> {
    let transport = create_transport(&args)?;
    let pipeline = IngestPipeline::new(args.pipeline_config(), transport).with_cancellation(cancel);

    log::info!("Indexing poems below {}", args.dir.display());
    let summary = pipeline.run()?;
    output_summary(&summary, &args)?;

    if summary.cancelled {
        return Err(IngestError::cancelled(format!(
            "interrupted after {} documents",
            summary.documents_submitted
        )));
    }
    Ok(summary)
}

/// Cancel `cancel` on the first SIGINT or SIGTERM; exit with status 1 on the
/// second, for runs stuck waiting on a request.
pub fn install_signal_handlers(cancel: &CancellationToken) -> Result<()> {
    for signal in [SIGINT, SIGTERM] {
        // Registered first so it sees the flag as it was before this signal.
        signal_hook::flag::register_conditional_shutdown(signal, 1, cancel.flag())?;
        signal_hook::flag::register(signal, cancel.flag())?;
    }
    Ok(())
}

fn create_transport(args: &IndexerArgs) -> Result<Arc<dyn BulkTransport>> {
    if args.dry_run {
        log::info!("Dry run: bulk requests are acknowledged and discarded");
        return Ok(Arc::new(MemoryTransport::discarding()));
    }

    let config = args.elasticsearch_config();
    log::debug!("Connecting with {config:?}");
    Ok(Arc::new(ElasticsearchClient::new(&config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("poems.json"),
            r#"[{"title":"靜夜思","author":"李白","paragraphs":["床前明月光"],"notes":[]}]"#,
        )
        .unwrap();

        let args = IndexerArgs::try_parse_from([
            "poem-indexer",
            "--dry-run",
            "--format",
            "json",
            "--dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let summary = execute_command(args, CancellationToken::new()).unwrap();
        assert!(summary.success);
        assert_eq!(summary.documents_indexed, 1);
    }

    #[test]
    fn test_dry_run_transport_discards_requests() {
        let args =
            IndexerArgs::try_parse_from(["poem-indexer", "--dry-run", "--dir", "/data/poems"])
                .unwrap();
        let transport = create_transport(&args).unwrap();

        let body = concat!(
            "{\"index\":{\"_index\":\"poems\",\"_id\":\"a\"}}\n",
            "{\"title\":\"静夜思\"}\n",
        );
        let response = transport.bulk(body.as_bytes().to_vec()).unwrap();
        assert!(!response.errors);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].index.id.as_deref(), Some("a"));
    }

    #[test]
    fn test_cancelled_run_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("poems.json"), "[]").unwrap();

        let args = IndexerArgs::try_parse_from([
            "poem-indexer",
            "--dry-run",
            "--dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let err = execute_command(args, token).unwrap_err();
        assert!(matches!(err, IngestError::Cancelled(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_first_signal_cancels() {
        let token = CancellationToken::new();
        install_signal_handlers(&token).unwrap();
        assert!(!token.is_cancelled());

        signal_hook::low_level::raise(SIGTERM).unwrap();
        assert!(token.is_cancelled());
    }
}
