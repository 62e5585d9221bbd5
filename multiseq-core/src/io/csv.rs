use crate::analysis::{MotifRecord, OrfRecord};
use crate::error::BioResult;
use crate::seq::PerSequence;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const ORF_COLUMNS: [&str; 6] = ["id", "frame", "start", "stop", "length", "sequence"];
pub const MOTIF_COLUMNS: [&str; 4] = ["id", "kmer", "count", "positions"];

fn writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).from_writer(out)
}

/// One row per ORF. Positions are 1-based, `length` is `stop - start`.
pub fn write_orf_table<W: Write>(out: W, orfs: &PerSequence<Vec<OrfRecord>>) -> BioResult<()> {
    let mut wtr = writer(out);
    wtr.write_record(ORF_COLUMNS)?;
    for (id, records) in orfs.iter() {
        for orf in records {
            let frame = orf.frame().to_string();
            let start = orf.start().to_string();
            let stop = orf.stop().to_string();
            let length = orf.length().to_string();
            wtr.write_record([
                id.as_bytes(),
                frame.as_bytes(),
                start.as_bytes(),
                stop.as_bytes(),
                length.as_bytes(),
                orf.seq(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// One row per repeated k-mer; `positions` are 0-based and `;`-separated.
pub fn write_motif_table<W: Write>(
    out: W,
    motifs: &PerSequence<Vec<MotifRecord>>,
) -> BioResult<()> {
    let mut wtr = writer(out);
    wtr.write_record(MOTIF_COLUMNS)?;
    for (id, records) in motifs.iter() {
        for motif in records {
            let count = motif.count().to_string();
            let positions = motif
                .positions()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(";");
            wtr.write_record([
                id.as_bytes(),
                motif.kmer(),
                count.as_bytes(),
                positions.as_bytes(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_orf_table_to_path(
    path: impl AsRef<Path>,
    orfs: &PerSequence<Vec<OrfRecord>>,
) -> BioResult<()> {
    write_orf_table(File::create(path)?, orfs)
}

pub fn write_motif_table_to_path(
    path: impl AsRef<Path>,
    motifs: &PerSequence<Vec<MotifRecord>>,
) -> BioResult<()> {
    write_motif_table(File::create(path)?, motifs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{collect_orfs, scan_collection, CodonTable};
    use crate::seq::{ReadingFrame, SequenceCollection};

    fn collection() -> SequenceCollection {
        [("x", "ATGCCCATGTAGAATTCAATGTTATAG"), ("y", "CCCC")]
            .into_iter()
            .collect()
    }

    #[test]
    fn orf_table_rows() {
        let orfs = collect_orfs(&collection(), &ReadingFrame::ALL, &CodonTable::default());
        let mut out = Vec::new();
        write_orf_table(&mut out, &orfs).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "id,frame,start,stop,length,sequence",
                "x,1,1,10,9,ATGCCCATGTAG",
                "x,1,7,10,3,ATGTAG",
                "x,1,19,25,6,ATGTTATAG",
            ]
        );
    }

    #[test]
    fn motif_table_rows() {
        let motifs = scan_collection(&collection(), 3).unwrap();
        let mut out = Vec::new();
        write_motif_table(&mut out, &motifs).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,kmer,count,positions");
        assert!(lines.contains(&"x,ATG,3,0;6;18"));
        assert!(lines.contains(&"y,CCC,2,0;1"));
    }

    #[test]
    fn empty_tables_have_headers() {
        let orfs = PerSequence::<Vec<OrfRecord>>::new();
        let mut out = Vec::new();
        write_orf_table(&mut out, &orfs).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id,frame,start,stop,length,sequence\n");
    }
}
