use crate::error::{BioError, BioResult};
use crate::seq::{SeqRecord, SequenceCollection};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Streaming FASTA parser yielding one record per header line.
///
/// Body lines are trimmed of surrounding ASCII whitespace and appended as raw
/// bytes; they are not validated against any alphabet or encoding. Blank lines
/// are ignored. Only header lines must be UTF-8.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(Vec<u8>, usize)>,
    buf_line: Vec<u8>,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: Vec::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<BioResult<(Vec<u8>, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_until(b'\n', &mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with(b">") {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim_ascii().is_empty() {
                        continue;
                    }
                    return Some(Err(BioError::FastaFormat {
                        msg: "sequence data before the first '>' header",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(BioError::Io(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = BioResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_until(b'\n', &mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with(b">") {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    self.seq_buf.extend_from_slice(self.buf_line.trim_ascii());
                }
                Err(err) => return Some(Err(BioError::Io(err))),
            }
        }

        let capacity = self.seq_buf.capacity();
        let seq = std::mem::replace(&mut self.seq_buf, Vec::with_capacity(capacity));

        Some(Ok(SeqRecord { id, desc, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

/// Load every record into a collection keyed by id.
///
/// A repeated id replaces the sequence stored under the earlier header.
pub fn read_fasta_from_reader<R: BufRead>(reader: R) -> BioResult<SequenceCollection> {
    let mut collection = SequenceCollection::new();
    for record in fasta_records_from_reader(reader) {
        let record = record?;
        if let Some(old) = collection.insert(record) {
            warn!("duplicate sequence id '{}', keeping the later record", old.id());
        }
    }
    debug!("loaded {} sequences", collection.len());
    Ok(collection)
}

pub fn read_fasta_from_path(path: impl AsRef<Path>) -> BioResult<SequenceCollection> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_from_reader(reader)
}

pub fn read_fasta_from_bytes(data: &[u8]) -> BioResult<SequenceCollection> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_from_reader(reader)
}

fn parse_header(header_line: &[u8], line_no: usize) -> BioResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line.strip_prefix(b">").ok_or(BioError::FastaFormat {
        msg: "expected header line starting with '>'",
        line: line_no,
    })?;
    let header = std::str::from_utf8(header).map_err(|_| BioError::FastaFormat {
        msg: "header is not valid UTF-8",
        line: line_no,
    })?;

    let header = header.trim();
    if header.is_empty() {
        return Err(BioError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(char::is_whitespace) {
        Some(idx) => {
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (&header[..idx], desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_single_record() {
        let c = read_fasta_from_bytes(b">seq1\nACGT\n").unwrap();
        assert_eq!(c.len(), 1);
        let r = c.get("seq1").unwrap();
        assert_eq!(r.desc(), None);
        assert_eq!(r.seq(), b"ACGT");
    }

    #[test]
    fn header_with_description() {
        let c = read_fasta_from_bytes(b">seq1 some desc here\nAC\nGT\n").unwrap();
        let r = c.get("seq1").unwrap();
        assert_eq!(r.id(), "seq1");
        assert_eq!(r.desc(), Some("some desc here"));
        assert_eq!(r.seq(), b"ACGT");
    }

    #[test]
    fn tab_separated_description() {
        let c = read_fasta_from_bytes(b">seq1\tdesc\nAC\n").unwrap();
        assert!(c.contains("seq1"));
    }

    #[test]
    fn any_whitespace_ends_the_id() {
        let c = read_fasta_from_bytes(b">a\x0cdesc\nAC\n>b\x0bx\nGT\n>c\xc2\xa0y\nTT\n").unwrap();
        assert_eq!(c.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(c.get("a").unwrap().desc(), Some("desc"));
        assert_eq!(c.get("c").unwrap().desc(), Some("y"));
    }

    #[test]
    fn multiple_records_keep_order() {
        let c = read_fasta_from_bytes(b">seq2\nAC\n>seq1\nGT\n").unwrap();
        assert_eq!(c.ids().collect::<Vec<_>>(), vec!["seq2", "seq1"]);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let c = read_fasta_from_bytes(b"\r\n>a\r\nAC\r\n\r\nGT\r\n>b\r\n").unwrap();
        assert_eq!(c.get("a").unwrap().seq(), b"ACGT");
        assert_eq!(c.get("b").unwrap().seq(), b"");
    }

    #[test]
    fn sequence_bytes_taken_literally() {
        let c = read_fasta_from_bytes(b">a\nacgNN-*x\n").unwrap();
        assert_eq!(c.get("a").unwrap().seq(), b"acgNN-*x");
    }

    #[test]
    fn non_utf8_body_bytes_kept() {
        let c = read_fasta_from_bytes(b">a\nAC\xffGT\n\x80\n").unwrap();
        assert_eq!(c.get("a").unwrap().seq(), b"AC\xffGT\x80");
    }

    #[test]
    fn non_utf8_header_is_malformed() {
        let err = read_fasta_from_bytes(b"\n>a\xff\nAC\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        match err {
            BioError::FastaFormat { line, .. } => assert_eq!(line, 2),
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_sequence_allowed() {
        let c = read_fasta_from_bytes(b">seq1\n>seq2\nA\n").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("seq1").unwrap().seq(), b"");
        assert_eq!(c.get("seq2").unwrap().seq(), b"A");
    }

    #[test]
    fn duplicate_id_replaces_sequence() {
        let c = read_fasta_from_bytes(b">a\nAAA\n>b\nC\n>a\nGG\n").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(c.get("a").unwrap().seq(), b"GG");
    }

    #[test]
    fn body_before_header() {
        let err = read_fasta_from_bytes(b"ACGT\n>seq1\nAC\n").unwrap_err();
        match err {
            BioError::FastaFormat { line, .. } => assert_eq!(line, 1),
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_header_rejected() {
        let err = read_fasta_from_bytes(b">\nACGT\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn empty_input() {
        assert!(read_fasta_from_bytes(b"").unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let err = read_fasta_from_path("/nonexistent/multiseq/input.fa").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn streaming_records() {
        let data: &[u8] = b">a x\nAC\n>b\nGT\n";
        let records: Vec<SeqRecord> = fasta_records_from_reader(data)
            .collect::<BioResult<_>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].desc(), Some("x"));
    }
}
