use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use bio::io::fastq;
use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::{EditorError, Result};
use crate::types::FastqRecord;

/// `output_root/basename(input)`, with `.gz` added unless the name already ends in it.
pub(crate) fn output_path_for(output_root: &Path, input: &Path) -> Result<PathBuf> {
    let mut name: OsString = input.file_name()
        .ok_or_else(|| EditorError::Config(format!("{} has no file name", input.display())))?
        .to_owned();
    if !name.to_str().is_some_and(|name| name.ends_with(".gz")) {
        name.push(".gz");
    }
    Ok(output_root.join(name))
}

fn write_records<W: Write>(writer: W, records: &[FastqRecord]) -> io::Result<()> {
    let mut fastq_writer = fastq::Writer::new(writer);
    for record in records {
        let (id, desc) = record.id_and_desc();
        fastq_writer.write(id, desc, record.sequence.as_bytes(), record.quality.as_bytes())?;
    }
    fastq_writer.flush()
}

/// Write `records` as gzipped FASTQ to `path`, replacing any existing file.
pub(crate) fn write_fastq_gz(path: &Path, records: &[FastqRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| EditorError::io(parent, err))?;
    }

    let file = File::create(path).map_err(|err| EditorError::io(path, err))?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    write_records(&mut encoder, records)
        .and_then(|_| encoder.finish().map(|_| ()))
        .map_err(|err| EditorError::io(path, err))
}
