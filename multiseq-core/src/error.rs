use std::io;
use thiserror::Error;

/// Coarse classification of [`BioError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    EmptyInput,
    MalformedInput,
    Io,
}

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid frame: {frame} (must be 1, 2, or 3)")]
    InvalidFrame { frame: usize },

    #[error("invalid extrema mode '{mode}' (expected 'min' or 'max')")]
    InvalidMode { mode: String },

    #[error("invalid k-mer size: {k}")]
    InvalidKmerSize { k: usize },

    #[error("invalid codon '{codon}' (codons are exactly 3 bases)")]
    InvalidCodon { codon: String },

    #[error("no {what} to select extrema from")]
    EmptyInput { what: &'static str },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

impl BioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BioError::InvalidFrame { .. }
            | BioError::InvalidMode { .. }
            | BioError::InvalidKmerSize { .. }
            | BioError::InvalidCodon { .. } => ErrorKind::InvalidArgument,
            BioError::EmptyInput { .. } => ErrorKind::EmptyInput,
            BioError::FastaFormat { .. } => ErrorKind::MalformedInput,
            BioError::Io(_) | BioError::Csv(_) => ErrorKind::Io,
        }
    }
}

pub type BioResult<T> = Result<T, BioError>;
