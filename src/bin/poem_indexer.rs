//! poem-indexer CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use poem_indexer::cli::args::*;
use poem_indexer::cli::commands::*;
use poem_indexer::pipeline::CancellationToken;

fn main() {
    let args = IndexerArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Info,  // Default
        2 => LevelFilter::Debug, // -v
        _ => LevelFilter::Trace, // -vv and more
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let cancel = CancellationToken::new();
    if let Err(e) = install_signal_handlers(&cancel) {
        log::warn!("Failed to register signal handlers: {e}");
    }

    match execute_command(args, cancel) {
        Ok(summary) if summary.success => {}
        Ok(summary) => {
            eprintln!(
                "Error: {} of {} documents failed to index",
                summary.documents_failed, summary.documents_submitted
            );
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
