use crate::analysis::CodonTable;
use crate::error::{BioError, BioResult};
use crate::seq::ReadingFrame;

pub const DEFAULT_KMER: usize = 6;

/// Parameters shared by the ORF and motif analyses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub kmer: usize,
    pub frames: Vec<ReadingFrame>,
    pub codons: CodonTable,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            kmer: DEFAULT_KMER,
            frames: ReadingFrame::ALL.to_vec(),
            codons: CodonTable::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_kmer(mut self, kmer: usize) -> BioResult<Self> {
        if kmer == 0 {
            return Err(BioError::InvalidKmerSize { k: kmer });
        }
        self.kmer = kmer;
        Ok(self)
    }

    /// Frames given by number, 1..=3, scanned in the given order.
    pub fn with_frames(mut self, frames: &[usize]) -> BioResult<Self> {
        self.frames = frames
            .iter()
            .map(|&f| ReadingFrame::new(f))
            .collect::<BioResult<_>>()?;
        Ok(self)
    }

    pub fn with_codons(mut self, codons: CodonTable) -> Self {
        self.codons = codons;
        self
    }
}
