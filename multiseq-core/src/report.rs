//! Rendering of analysis results.
//!
//! Analyses never print; callers hand their results to a [`Reporter`]
//! chosen once at start-up.

use crate::analysis::{Extrema, ExtremaMode, GlobalExtrema, MotifRecord, OrfRecord};
use log::{info, warn};

pub trait Reporter {
    fn sequence_count(&mut self, source: &str, count: usize);

    fn length_extrema(&mut self, mode: ExtremaMode, extrema: &Extrema<Box<str>>);

    fn orf_extrema(&mut self, mode: ExtremaMode, extrema: &GlobalExtrema<OrfRecord>);

    fn motif_extrema(&mut self, k: usize, extrema: &GlobalExtrema<MotifRecord>);

    /// A step produced nothing worth reporting.
    fn notice(&mut self, message: &str);
}

/// Writes every fact through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn sequence_count(&mut self, source: &str, count: usize) {
        info!("{}", count_line(source, count));
    }

    fn length_extrema(&mut self, mode: ExtremaMode, extrema: &Extrema<Box<str>>) {
        info!("{}", length_line(mode, extrema));
    }

    fn orf_extrema(&mut self, mode: ExtremaMode, extrema: &GlobalExtrema<OrfRecord>) {
        info!("{}", orf_line(mode, extrema));
    }

    fn motif_extrema(&mut self, k: usize, extrema: &GlobalExtrema<MotifRecord>) {
        info!("{}", motif_line(k, extrema));
    }

    fn notice(&mut self, message: &str) {
        warn!("{message}");
    }
}

fn adjective(mode: ExtremaMode) -> &'static str {
    match mode {
        ExtremaMode::Min => "shortest",
        ExtremaMode::Max => "longest",
    }
}

pub fn count_line(source: &str, count: usize) -> String {
    format!("There are {count} sequences in {source}")
}

pub fn length_line(mode: ExtremaMode, extrema: &Extrema<Box<str>>) -> String {
    let ids: Vec<&str> = extrema.items.iter().map(|id| id.as_ref()).collect();
    format!(
        "There are {} {} sequences with ids [{}] and length {}.",
        ids.len(),
        adjective(mode),
        ids.join(", "),
        extrema.value
    )
}

pub fn orf_line(mode: ExtremaMode, extrema: &GlobalExtrema<OrfRecord>) -> String {
    let mut line = format!(
        "The {} ORF length is {} ({} ORF(s) in {} sequence(s)):",
        adjective(mode),
        extrema.value,
        extrema.record_count(),
        extrema.hits.len()
    );
    for (id, orfs) in extrema.hits.iter() {
        for orf in orfs {
            line.push_str(&format!(" {id} at {} (frame {});", orf.start(), orf.frame()));
        }
    }
    line.pop();
    line
}

pub fn motif_line(k: usize, extrema: &GlobalExtrema<MotifRecord>) -> String {
    let mut line = format!(
        "The most frequent {k}-mer occurs {} times ({} sequence(s)):",
        extrema.value,
        extrema.hits.len()
    );
    for (id, motifs) in extrema.hits.iter() {
        for motif in motifs {
            line.push_str(&format!(" {} in {id};", String::from_utf8_lossy(motif.kmer())));
        }
    }
    line.pop();
    line
}
