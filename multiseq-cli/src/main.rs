//! multiseq - sequence collection summary
//!
//! Reads a multi-record FASTA file and reports, in order:
//!
//! - the number of sequences,
//! - the shortest and longest sequences,
//! - the shortest and longest open reading frames over the forward frames,
//! - the most frequent repeated k-mer.
//!
//! # Usage
//!
//! ```bash
//! multiseq genomes.fasta
//!
//! # 4-mers, first frame only, with per-record tables
//! multiseq genomes.fasta -k 4 --frames 1 --orf-table orfs.csv --motif-table motifs.csv
//! ```
//!
//! Results are written through the logger; set `RUST_LOG` to change the level.

mod cli;
mod run;

use clap::Parser;
use env_logger::Env;
use log::error;
use multiseq_core::report::LogReporter;

fn main() {
    let args = cli::Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(err) = run::run(&args, &mut LogReporter) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
