pub mod csv;
pub mod fasta;

pub use self::csv::{
    write_motif_table, write_motif_table_to_path, write_orf_table, write_orf_table_to_path,
};
pub use fasta::{read_fasta_from_bytes, read_fasta_from_path, read_fasta_from_reader};
