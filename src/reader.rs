use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use log::{debug, warn};

use crate::error::{EditorError, Result};
use crate::types::{FastqFile, FastqRecord};

pub(crate) enum ReaderMaybeGzip {
    GZIP(MultiGzDecoder<BufReader<File>>),
    UNCOMPRESSED(BufReader<File>),
}

impl Read for ReaderMaybeGzip {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ReaderMaybeGzip::GZIP(backer) => backer.read(buf),
            ReaderMaybeGzip::UNCOMPRESSED(backer) => backer.read(buf),
        }
    }
}

/// Open `path` for reading, decompressing on the fly when the name ends in `.gz`.
pub(crate) fn open_maybe_gzip(path: &Path) -> io::Result<BufReader<ReaderMaybeGzip>> {
    let file = BufReader::new(File::open(path)?);
    let gzipped = path.to_str().is_some_and(|name| name.ends_with(".gz"));

    Ok(BufReader::new(if gzipped {
        debug!("parsing {} as a gzip", path.display());
        ReaderMaybeGzip::GZIP(MultiGzDecoder::new(file))
    } else {
        ReaderMaybeGzip::UNCOMPRESSED(file)
    }))
}

pub(crate) fn read_fastq_file(path: &Path) -> Result<FastqFile> {
    let reader = open_maybe_gzip(path).map_err(|err| EditorError::io(path, err))?;
    let records = parse_fastq(reader, path)?;
    Ok(FastqFile { path: path.to_path_buf(), records })
}

/// Parse 4-line records: header, sequence, separator (not checked), quality.
///
/// Trailing whitespace is stripped from every line. Lines left over after the last
/// complete record are dropped with a warning.
pub(crate) fn parse_fastq<R: BufRead>(reader: R, path: &Path) -> Result<Vec<FastqRecord>> {
    let mut records = Vec::new();
    let mut pending: Vec<String> = Vec::with_capacity(4);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| EditorError::io(path, err))?;
        let line = line.trim_end();

        if pending.is_empty() && !line.starts_with('@') {
            return Err(EditorError::MalformedInput {
                path: path.to_path_buf(),
                line: index + 1,
                msg: "record header does not start with '@'".to_owned(),
            });
        }

        pending.push(line.to_owned());
        if pending.len() == 4 {
            let quality = pending.pop().unwrap_or_default();
            pending.pop();
            let sequence = pending.pop().unwrap_or_default();
            let header = pending.pop().unwrap_or_default();
            records.push(FastqRecord { header, sequence, quality });
        }
    }

    if !pending.is_empty() {
        warn!("{}: dropping {} trailing line(s) that do not form a full record",
              path.display(), pending.len());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    use super::*;

    fn parse(text: &str) -> Result<Vec<FastqRecord>> {
        parse_fastq(Cursor::new(text.as_bytes()), Path::new("test.fastq"))
    }

    #[test]
    fn parses_records_in_file_order() {
        let records = parse("@r1\nACGT\n+\nFFFF\n@r2 desc\nGG\n+r2 desc\nII\n").unwrap();
        assert_eq!(records, vec![
            FastqRecord { header: "@r1".into(), sequence: "ACGT".into(), quality: "FFFF".into() },
            FastqRecord { header: "@r2 desc".into(), sequence: "GG".into(), quality: "II".into() },
        ]);
        for record in &records {
            assert_eq!(record.sequence.len(), record.quality.len());
        }
    }

    #[test]
    fn duplicate_headers_are_all_kept() {
        let records = parse("@dup\nA\n+\nF\n@dup\nC\n+\nF\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "A");
        assert_eq!(records[1].sequence, "C");
    }

    #[test]
    fn separator_line_is_not_validated() {
        let records = parse("@r1\nACGT\nanything\nFFFF\n").unwrap();
        assert_eq!(records[0].quality, "FFFF");
    }

    #[test]
    fn missing_final_newline_and_crlf_are_accepted() {
        assert_eq!(parse("@r1\nAC\n+\nFF").unwrap().len(), 1);
        let records = parse("@r1\r\nAC\r\n+\r\nFF\r\n").unwrap();
        assert_eq!(records[0].header, "@r1");
        assert_eq!(records[0].quality, "FF");
    }

    #[test]
    fn bad_header_is_malformed_input() {
        let err = parse("@r1\nAC\n+\nFF\nr2\nAC\n+\nFF\n").unwrap_err();
        match err {
            EditorError::MalformedInput { line, .. } => assert_eq!(line, 5),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn blank_header_line_is_malformed_input() {
        assert!(matches!(parse("\n@r1\nAC\n+\nFF\n"), Err(EditorError::MalformedInput { line: 1, .. })));
    }

    #[test]
    fn trailing_partial_record_is_dropped() {
        let records = parse("@r1\nAC\n+\nFF\n@r2\nGG\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "@r1");
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn reads_plain_and_gzipped_files() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("a.fq");
        fs::write(&plain, "@r1\nACGT\n+\nFFFF\n").unwrap();

        let gzipped = dir.path().join("b.fq.gz");
        let mut encoder = GzEncoder::new(fs::File::create(&gzipped).unwrap(), Compression::default());
        encoder.write_all(b"@r1\nACGT\n+\nFFFF\n").unwrap();
        encoder.finish().unwrap();

        let a = read_fastq_file(&plain).unwrap();
        let b = read_fastq_file(&gzipped).unwrap();
        assert_eq!(a.path, plain);
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn corrupt_gzip_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.fastq.gz");
        fs::write(&path, "@r1\nACGT\n+\nFFFF\n").unwrap();

        assert!(matches!(read_fastq_file(&path), Err(EditorError::Io { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(read_fastq_file(&dir.path().join("nope.fq")), Err(EditorError::Io { .. })));
    }
}
