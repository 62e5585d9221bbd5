//! Forward-strand open reading frame search.
//!
//! Positions are 1-based and refer to the unshifted sequence. A start codon
//! pairs with the first in-frame stop codon after it; a stop codon may close
//! several starts.

pub mod extrema;

pub use extrema::{global_extrema, per_sequence_extrema};

use crate::error::{BioError, BioResult};
use crate::seq::{PerSequence, ReadingFrame, SeqRecord, SequenceCollection};
use log::debug;

pub const DEFAULT_START_CODONS: &[&[u8]] = &[b"ATG"];
pub const DEFAULT_STOP_CODONS: &[&[u8]] = &[b"TAA", b"TAG", b"TGA"];

pub type Codon = [u8; 3];

/// Start and stop codons, matched byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonTable {
    starts: Vec<Codon>,
    stops: Vec<Codon>,
}

impl CodonTable {
    pub fn new<A, B>(
        starts: impl IntoIterator<Item = A>,
        stops: impl IntoIterator<Item = B>,
    ) -> BioResult<Self>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let starts = starts
            .into_iter()
            .map(|c| to_codon(c.as_ref()))
            .collect::<BioResult<Vec<_>>>()?;
        let stops = stops
            .into_iter()
            .map(|c| to_codon(c.as_ref()))
            .collect::<BioResult<Vec<_>>>()?;
        Ok(Self { starts, stops })
    }

    pub fn starts(&self) -> &[Codon] {
        &self.starts
    }

    pub fn stops(&self) -> &[Codon] {
        &self.stops
    }

    #[inline]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        self.starts.iter().any(|c| c == codon)
    }

    #[inline]
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.stops.iter().any(|c| c == codon)
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self {
            starts: DEFAULT_START_CODONS.iter().map(|c| [c[0], c[1], c[2]]).collect(),
            stops: DEFAULT_STOP_CODONS.iter().map(|c| [c[0], c[1], c[2]]).collect(),
        }
    }
}

fn to_codon(bytes: &[u8]) -> BioResult<Codon> {
    Codon::try_from(bytes).map_err(|_| BioError::InvalidCodon {
        codon: String::from_utf8_lossy(bytes).into_owned(),
    })
}

/// A start codon paired with the first in-frame stop codon after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfRecord {
    frame: ReadingFrame,
    start: usize,
    stop: usize,
    seq: Vec<u8>,
}

impl OrfRecord {
    fn from_anchors(seq: &[u8], frame: ReadingFrame, start: usize, stop: usize) -> Self {
        debug_assert!(start < stop && stop + 2 <= seq.len());
        Self {
            frame,
            start,
            stop,
            seq: seq[start - 1..stop + 2].to_vec(),
        }
    }

    pub fn frame(&self) -> ReadingFrame {
        self.frame
    }

    /// 1-based position of the first base of the start codon.
    pub fn start(&self) -> usize {
        self.start
    }

    /// 1-based position of the first base of the stop codon.
    pub fn stop(&self) -> usize {
        self.stop
    }

    /// `stop - start`: the distance between the two codon anchors, which
    /// leaves out the stop codon itself. `seq().len()` is `length() + 3`.
    pub fn length(&self) -> usize {
        self.stop - self.start
    }

    /// Bases from the start codon through the stop codon, inclusive.
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn start_codon(&self) -> &[u8] {
        &self.seq[..3]
    }

    pub fn stop_codon(&self) -> &[u8] {
        &self.seq[self.seq.len() - 3..]
    }
}

/// All ORFs of `seq` in one reading frame, in start order.
pub fn find_orfs(seq: &[u8], frame: ReadingFrame, codons: &CodonTable) -> Vec<OrfRecord> {
    let shifted = seq.get(frame.offset()..).unwrap_or_default();

    let mut starts = Vec::new();
    let mut stops = Vec::new();
    for (i, codon) in shifted.chunks_exact(3).enumerate() {
        let anchor = i * 3 + frame.number();
        if codons.is_start(codon) {
            starts.push(anchor);
        }
        if codons.is_stop(codon) {
            stops.push(anchor);
        }
    }

    starts
        .into_iter()
        .filter_map(|start| {
            let next = stops.partition_point(|&stop| stop <= start);
            stops
                .get(next)
                .map(|&stop| OrfRecord::from_anchors(seq, frame, start, stop))
        })
        .collect()
}

/// Same as [`find_orfs`] with the frame given as a number, 1..=3.
pub fn find_orfs_in_frame(
    seq: &[u8],
    frame: usize,
    codons: &CodonTable,
) -> BioResult<Vec<OrfRecord>> {
    let frame = ReadingFrame::new(frame)?;
    Ok(find_orfs(seq, frame, codons))
}

/// ORFs of every sequence over `frames`, concatenated in frame order.
///
/// Every sequence of the collection is present in the result, with an empty
/// list when it has no ORF.
pub fn collect_orfs(
    collection: &SequenceCollection,
    frames: &[ReadingFrame],
    codons: &CodonTable,
) -> PerSequence<Vec<OrfRecord>> {
    let orfs: Vec<Vec<OrfRecord>> = par_map!(collection.records(), |record: &SeqRecord| {
        frames
            .iter()
            .flat_map(|&frame| find_orfs(record.seq(), frame, codons))
            .collect::<Vec<_>>()
    });

    debug!(
        "found {} ORFs across {} sequences in {} frame(s)",
        orfs.iter().map(Vec::len).sum::<usize>(),
        collection.len(),
        frames.len()
    );

    collection.ids().zip(orfs).collect()
}
