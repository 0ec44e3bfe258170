use bio::alphabets::dna;

use crate::types::{FastqRecord, InsertionMode, InsertionSpec, INSERTED_QUALITY};

/// Synthetic quality string for `sequence`: one maximum-confidence symbol per base.
pub(crate) fn quality_of(sequence: &str) -> String {
    std::iter::repeat(INSERTED_QUALITY).take(sequence.len()).collect()
}

/// True when every character is an IUPAC nucleotide code, either case.
pub(crate) fn looks_like_nucleotides(sequence: &str) -> bool {
    dna::iupac_alphabet().is_word(sequence.as_bytes())
}

impl InsertionSpec {
    pub(crate) fn apply(&self, record: &FastqRecord) -> FastqRecord {
        let quality = quality_of(&self.sequence);
        let (sequence, quality) = match self.mode {
            InsertionMode::Prepend => (
                format!("{}{}", self.sequence, record.sequence),
                format!("{}{}", quality, record.quality),
            ),
            InsertionMode::Append => (
                format!("{}{}", record.sequence, self.sequence),
                format!("{}{}", record.quality, quality),
            ),
        };
        FastqRecord { header: record.header.clone(), sequence, quality }
    }
}
