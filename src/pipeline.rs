use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use pluralizer::pluralize;

use crate::augment::looks_like_nucleotides;
use crate::error::{EditorError, Result};
use crate::reader::read_fastq_file;
use crate::types::{FastqRecord, InsertionSpec};
use crate::walker::list_fastq;
use crate::writer::{output_path_for, write_fastq_gz};

pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) insertion: InsertionSpec,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) files: usize,
    pub(crate) records: usize,
}

impl Config {
    fn same_as_input(&self, path: &Path) -> bool {
        if path == self.input.as_path() {
            return true;
        }
        match (fs::canonicalize(&self.input), fs::canonicalize(path)) {
            (Ok(input), Ok(other)) => input == other,
            _ => false,
        }
    }

    /// Check arguments and directories, creating the output directory if needed.
    /// Nothing inside the input directory is touched.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.insertion.sequence.is_empty() {
            return Err(EditorError::Config("the sequence to insert must not be empty".to_owned()));
        }
        if !looks_like_nucleotides(&self.insertion.sequence) {
            warn!("sequence {} contains characters outside the IUPAC nucleotide alphabet; inserting as-is",
                  self.insertion.sequence);
        }

        if !self.input.exists() {
            return Err(EditorError::Config(format!("input folder {} does not exist", self.input.display())));
        }
        if !self.input.is_dir() {
            return Err(EditorError::Config(format!("input {} is not a folder", self.input.display())));
        }

        if self.same_as_input(&self.output) {
            return Err(EditorError::Config(
                "please choose a different output folder than the input folder".to_owned()));
        }
        fs::create_dir_all(&self.output).map_err(|err| EditorError::io(&self.output, err))?;
        Ok(())
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} files {msg}") {
        bar.set_style(style);
    }
    bar
}

/// Validate, then rewrite every FASTQ file under the input folder into the output folder.
///
/// Stops at the first error. Outputs already written stay on disk.
pub(crate) fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let inputs = list_fastq(&config.input)?;
    if inputs.is_empty() {
        warn!("no FASTQ files found under {}", config.input.display());
    } else {
        info!("found {} under {}", pluralize("FASTQ file", inputs.len() as isize, true),
              config.input.display());
    }

    let bar = progress_bar(inputs.len());
    let mut written = HashSet::new();
    let mut summary = RunSummary::default();

    for input in &inputs {
        let fastq = read_fastq_file(input)?;
        let augmented: Vec<FastqRecord> = fastq.records.iter()
            .map(|record| config.insertion.apply(record))
            .collect();

        let output = output_path_for(&config.output, &fastq.path)?;
        if !written.insert(output.clone()) {
            warn!("{} overwrites an output written earlier in this run", output.display());
        }
        write_fastq_gz(&output, &augmented)?;

        bar.suspend(|| info!("{} -> {} ({})", fastq.path.display(), output.display(),
                             pluralize("record", augmented.len() as isize, true)));
        bar.inc(1);
        summary.files += 1;
        summary.records += augmented.len();
    }
    bar.finish_and_clear();

    Ok(summary)
}
