use crate::analysis::extrema::{reduce_global, select_local, ExtremaMode, GlobalExtrema};
use crate::analysis::orf::OrfRecord;
use crate::error::BioResult;
use crate::seq::PerSequence;

/// Shortest or longest ORF(s) of each sequence.
///
/// Sequences without ORFs keep an empty list.
pub fn per_sequence_extrema(
    orfs: &PerSequence<Vec<OrfRecord>>,
    mode: ExtremaMode,
) -> PerSequence<Vec<OrfRecord>> {
    orfs.map(|records| select_local(records, mode, OrfRecord::length))
}

/// Shortest or longest ORF length over the whole collection, with the
/// sequences whose own extreme reaches it.
pub fn global_extrema(
    orfs: &PerSequence<Vec<OrfRecord>>,
    mode: ExtremaMode,
) -> BioResult<GlobalExtrema<OrfRecord>> {
    reduce_global(
        per_sequence_extrema(orfs, mode),
        mode,
        OrfRecord::length,
        "open reading frames",
    )
}
