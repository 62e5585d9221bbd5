//! Repeated k-mers ("motifs") within single sequences.

use crate::analysis::extrema::{reduce_global, select_local, ExtremaMode, GlobalExtrema};
use crate::error::{BioError, BioResult};
use crate::seq::{PerSequence, SeqRecord, SequenceCollection};
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A k-mer seen more than once in a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotifRecord {
    kmer: Vec<u8>,
    positions: Vec<usize>,
}

impl MotifRecord {
    pub fn kmer(&self) -> &[u8] {
        &self.kmer
    }

    /// Number of (possibly overlapping) occurrences.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// 0-based start of every occurrence, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Count every window of width `k` and keep those seen more than once.
///
/// Motifs are returned in order of first occurrence. A `k` longer than the
/// sequence yields no motifs.
pub fn scan_motifs(seq: &[u8], k: usize) -> BioResult<Vec<MotifRecord>> {
    if k == 0 {
        return Err(BioError::InvalidKmerSize { k });
    }
    if k > seq.len() {
        return Ok(Vec::new());
    }

    let mut index: HashMap<&[u8], usize> = HashMap::new();
    let mut seen: Vec<(&[u8], Vec<usize>)> = Vec::new();
    for (pos, window) in seq.windows(k).enumerate() {
        match index.entry(window) {
            Entry::Occupied(e) => seen[*e.get()].1.push(pos),
            Entry::Vacant(e) => {
                e.insert(seen.len());
                seen.push((window, vec![pos]));
            }
        }
    }

    Ok(seen
        .into_iter()
        .filter(|(_, positions)| positions.len() > 1)
        .map(|(kmer, positions)| MotifRecord {
            kmer: kmer.to_vec(),
            positions,
        })
        .collect())
}

/// [`scan_motifs`] over every sequence of the collection.
pub fn scan_collection(
    collection: &SequenceCollection,
    k: usize,
) -> BioResult<PerSequence<Vec<MotifRecord>>> {
    let motifs: BioResult<Vec<Vec<MotifRecord>>> =
        par_try_map!(collection.records(), |record: &SeqRecord| scan_motifs(record.seq(), k));
    let motifs = motifs?;

    debug!(
        "found {} repeated {k}-mers across {} sequences",
        motifs.iter().map(Vec::len).sum::<usize>(),
        collection.len()
    );

    Ok(collection.ids().zip(motifs).collect())
}

/// The most frequent motif(s) of each sequence; empty where none repeat.
pub fn most_frequent_per_sequence(
    motifs: &PerSequence<Vec<MotifRecord>>,
) -> PerSequence<Vec<MotifRecord>> {
    motifs.map(|records| select_local(records, ExtremaMode::Max, MotifRecord::count))
}

/// The highest motif count in the collection and the sequences reaching it.
pub fn most_frequent_global(
    motifs: &PerSequence<Vec<MotifRecord>>,
) -> BioResult<GlobalExtrema<MotifRecord>> {
    reduce_global(
        most_frequent_per_sequence(motifs),
        ExtremaMode::Max,
        MotifRecord::count,
        "repeated motifs",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kmers(motifs: &[MotifRecord]) -> Vec<(&str, usize)> {
        motifs
            .iter()
            .map(|m| (std::str::from_utf8(m.kmer()).unwrap(), m.count()))
            .collect()
    }

    #[test]
    fn alternating_dinucleotides() {
        let motifs = scan_motifs(b"ATATATAT", 2).unwrap();
        assert_eq!(kmers(&motifs), vec![("AT", 4), ("TA", 3)]);
        assert_eq!(motifs[0].positions(), &[0, 2, 4, 6]);
        assert_eq!(motifs[1].positions(), &[1, 3, 5]);
    }

    #[test]
    fn singletons_dropped() {
        let motifs = scan_motifs(b"ACGTAC", 2).unwrap();
        assert_eq!(kmers(&motifs), vec![("AC", 2)]);
    }

    #[test]
    fn overlapping_occurrences_counted() {
        let motifs = scan_motifs(b"AAAA", 2).unwrap();
        assert_eq!(kmers(&motifs), vec![("AA", 3)]);
    }

    #[test]
    fn whole_sequence_window() {
        assert!(scan_motifs(b"ATATATAT", 8).unwrap().is_empty());
        assert!(scan_motifs(b"ATATATAT", 9).unwrap().is_empty());
        assert!(scan_motifs(b"", 1).unwrap().is_empty());
    }

    #[test]
    fn zero_width_rejected() {
        match scan_motifs(b"ACGT", 0) {
            Err(BioError::InvalidKmerSize { k }) => assert_eq!(k, 0),
            other => panic!("expected invalid k-mer size error, got {other:?}"),
        }
    }

    #[test]
    fn case_sensitive() {
        let motifs = scan_motifs(b"acAC", 1).unwrap();
        assert!(motifs.is_empty());
    }

    fn collection() -> SequenceCollection {
        [("a", "ATATATAT"), ("b", "GGGGG"), ("c", "ACGT"), ("d", "CCCCC")]
            .into_iter()
            .collect()
    }

    #[test]
    fn scan_every_sequence() {
        let motifs = scan_collection(&collection(), 2).unwrap();
        assert_eq!(motifs.ids().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(kmers(motifs.get("b").unwrap()), vec![("GG", 4)]);
        assert!(motifs.get("c").unwrap().is_empty());
    }

    #[test]
    fn scan_collection_rejects_zero_width() {
        assert!(scan_collection(&collection(), 0).is_err());
    }

    #[test]
    fn most_frequent_per_sequence_ties() {
        let c: SequenceCollection = [("t", "ACGACG"), ("u", "TTTA")].into_iter().collect();
        let motifs = scan_collection(&c, 1).unwrap();
        let top = most_frequent_per_sequence(&motifs);
        assert_eq!(
            kmers(top.get("t").unwrap()),
            vec![("A", 2), ("C", 2), ("G", 2)]
        );
        assert_eq!(kmers(top.get("u").unwrap()), vec![("T", 3)]);
    }

    #[test]
    fn most_frequent_global_ties_across_sequences() {
        let motifs = scan_collection(&collection(), 2).unwrap();
        let top = most_frequent_global(&motifs).unwrap();
        assert_eq!(top.value, 4);
        assert_eq!(top.hits.ids().collect::<Vec<_>>(), vec!["a", "b", "d"]);
        assert_eq!(kmers(top.hits.get("a").unwrap()), vec![("AT", 4)]);
        assert_eq!(kmers(top.hits.get("d").unwrap()), vec![("CC", 4)]);
    }

    #[test]
    fn most_frequent_global_without_motifs() {
        let c: SequenceCollection = [("a", "ACGT"), ("b", "")].into_iter().collect();
        let motifs = scan_collection(&c, 2).unwrap();
        assert!(most_frequent_per_sequence(&motifs)
            .values()
            .all(|v| v.is_empty()));
        match most_frequent_global(&motifs) {
            Err(BioError::EmptyInput { .. }) => {}
            other => panic!("expected empty input error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn scan_is_deterministic(seq in "[ACGT]{0,80}", k in 1usize..6) {
            let first = scan_motifs(seq.as_bytes(), k).unwrap();
            let second = scan_motifs(seq.as_bytes(), k).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn positions_reproduce_kmer(seq in "[ACGT]{0,80}", k in 1usize..6) {
            let bytes = seq.as_bytes();
            for motif in scan_motifs(bytes, k).unwrap() {
                prop_assert!(motif.count() > 1);
                prop_assert_eq!(motif.kmer().len(), k);
                for &pos in motif.positions() {
                    prop_assert_eq!(&bytes[pos..pos + k], motif.kmer());
                }
                let expected = bytes.windows(k).filter(|w| *w == motif.kmer()).count();
                prop_assert_eq!(motif.count(), expected);
            }
        }
    }
}
