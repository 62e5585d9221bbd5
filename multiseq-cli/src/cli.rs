use anyhow::{Context, Result};
use clap::Parser;
use multiseq_core::analysis::CodonTable;
use multiseq_core::config::{AnalysisConfig, DEFAULT_KMER};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Summarize sequence lengths, open reading frames and repeated k-mers
pub struct Args {
    /// Multi-record FASTA file
    pub input: PathBuf,

    /// Motif width in bases
    #[arg(short, long, default_value_t = DEFAULT_KMER)]
    pub kmer: usize,

    /// Reading frames to scan for ORFs, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 2, 3])]
    pub frames: Vec<usize>,

    /// Start codons, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["ATG"])]
    pub start_codons: Vec<String>,

    /// Stop codons, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["TAA", "TAG", "TGA"])]
    pub stop_codons: Vec<String>,

    /// Write every ORF to this CSV file
    #[arg(long, value_name = "FILE")]
    pub orf_table: Option<PathBuf>,

    /// Write every repeated k-mer to this CSV file
    #[arg(long, value_name = "FILE")]
    pub motif_table: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn config(&self) -> Result<AnalysisConfig> {
        let codons = CodonTable::new(&self.start_codons, &self.stop_codons)
            .context("invalid codon list")?;
        let config = AnalysisConfig::default()
            .with_kmer(self.kmer)
            .context("invalid --kmer")?
            .with_frames(&self.frames)
            .context("invalid --frames")?
            .with_codons(codons);
        Ok(config)
    }
}
