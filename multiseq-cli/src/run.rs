use crate::cli::Args;
use anyhow::{Context, Result};
use log::info;
use multiseq_core::analysis::orf::global_extrema;
use multiseq_core::analysis::{
    collect_orfs, count_sequences, length_extrema, most_frequent_global, scan_collection,
    sequence_lengths, ExtremaMode, MotifRecord, OrfRecord,
};
use multiseq_core::config::AnalysisConfig;
use multiseq_core::error::{BioResult, ErrorKind};
use multiseq_core::io::{read_fasta_from_path, write_motif_table_to_path, write_orf_table_to_path};
use multiseq_core::report::Reporter;
use multiseq_core::seq::{PerSequence, SequenceCollection};

const MODES: [ExtremaMode; 2] = [ExtremaMode::Min, ExtremaMode::Max];

pub struct Analysis {
    pub orfs: PerSequence<Vec<OrfRecord>>,
    pub motifs: PerSequence<Vec<MotifRecord>>,
}

pub fn run(args: &Args, reporter: &mut dyn Reporter) -> Result<()> {
    let config = args.config()?;
    let collection = read_fasta_from_path(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let source = args.input.display().to_string();
    let analysis = analyze(&collection, &source, &config, reporter)?;

    if let Some(path) = &args.orf_table {
        write_orf_table_to_path(path, &analysis.orfs)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("ORF table written to {}", path.display());
    }
    if let Some(path) = &args.motif_table {
        write_motif_table_to_path(path, &analysis.motifs)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("motif table written to {}", path.display());
    }
    Ok(())
}

/// Count, length extrema, ORF extrema, motif extrema, in that order.
///
/// A reduction over nothing (no sequences, no ORFs, no repeated k-mer) is
/// reported as a notice rather than failing the run.
pub fn analyze(
    collection: &SequenceCollection,
    source: &str,
    config: &AnalysisConfig,
    reporter: &mut dyn Reporter,
) -> Result<Analysis> {
    reporter.sequence_count(source, count_sequences(collection));

    let lengths = sequence_lengths(collection);
    for mode in MODES {
        if let Some(extrema) = settle(length_extrema(&lengths, mode), reporter)? {
            reporter.length_extrema(mode, &extrema);
        }
    }

    let orfs = collect_orfs(collection, &config.frames, &config.codons);
    for mode in MODES {
        if let Some(extrema) = settle(global_extrema(&orfs, mode), reporter)? {
            reporter.orf_extrema(mode, &extrema);
        }
    }

    let motifs = scan_collection(collection, config.kmer)?;
    if let Some(extrema) = settle(most_frequent_global(&motifs), reporter)? {
        reporter.motif_extrema(config.kmer, &extrema);
    }

    Ok(Analysis { orfs, motifs })
}

fn settle<T>(result: BioResult<T>, reporter: &mut dyn Reporter) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == ErrorKind::EmptyInput => {
            reporter.notice(&err.to_string());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
