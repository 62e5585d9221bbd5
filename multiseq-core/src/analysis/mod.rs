pub mod extrema;
pub mod length;
pub mod motif;
pub mod orf;

pub use extrema::{Extrema, ExtremaMode, GlobalExtrema};
pub use length::{count_sequences, length_extrema, sequence_lengths};
pub use motif::{
    most_frequent_global, most_frequent_per_sequence, scan_collection, scan_motifs, MotifRecord,
};
pub use orf::{collect_orfs, find_orfs, find_orfs_in_frame, CodonTable, OrfRecord};
