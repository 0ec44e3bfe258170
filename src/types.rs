use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::ValueEnum;
use strum::VariantArray;

/// File name suffixes recognised as FASTQ, plain or gzipped. Matching is case-sensitive.
pub(crate) const FASTQ_EXTENSIONS: [&str; 4] = [".fastq", ".fastq.gz", ".fq", ".fq.gz"];

/// Phred 40 under the Phred+33 encoding.
pub(crate) const INSERTED_QUALITY: char = 'F';

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FastqRecord {
    /// Full header line, leading '@' included
    pub(crate) header: String,
    pub(crate) sequence: String,
    pub(crate) quality: String,
}

impl FastqRecord {
    /// Header split the way `bio::io::fastq::Writer` puts it back together: `@{id} {desc}`.
    pub(crate) fn id_and_desc(&self) -> (&str, Option<&str>) {
        let name = self.header.strip_prefix('@').unwrap_or(&self.header);
        match name.split_once(' ') {
            Some((id, desc)) => (id, Some(desc)),
            None => (name, None),
        }
    }
}

/// One input file, records in the order they appear on disk.
#[derive(Debug)]
pub(crate) struct FastqFile {
    pub(crate) path: PathBuf,
    pub(crate) records: Vec<FastqRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, VariantArray)]
pub(crate) enum InsertionMode {
    Prepend,
    Append,
}

impl ValueEnum for InsertionMode {
    fn value_variants<'a>() -> &'a [Self] {
        Self::VARIANTS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            InsertionMode::Prepend => PossibleValue::new("prepend")
                .help("insert the sequence before every read"),
            InsertionMode::Append => PossibleValue::new("append")
                .help("insert the sequence after every read"),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InsertionSpec {
    pub(crate) sequence: String,
    pub(crate) mode: InsertionMode,
}
