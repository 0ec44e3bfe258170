use std::path::PathBuf;
use std::process::exit;

use clap::ValueHint;
use log::{error, info};
use pluralizer::pluralize;

use crate::pipeline::Config;
use crate::types::{InsertionMode, InsertionSpec};

mod augment;
mod error;
mod pipeline;
mod reader;
mod types;
mod walker;
mod writer;

fn command() -> clap::Command {
    clap::command!("fqaffix")
        .about("Prepend or append a sequence to every entry of the FASTQ files in a folder. \
        Only works with Phred+33 FASTQ files; inserted bases get quality 'F' (Phred 40).")
        .arg(clap::arg!(-i --input <"input folder"> "folder with FASTQ file(s), gzipped or not; accepted \
        extensions are .fastq, .fastq.gz, .fq and .fq.gz, searched recursively")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::DirPath))
        .arg(clap::arg!(-o --output <"output folder"> "where to write the gzipped FASTQ files; must differ from \
        the input folder, created if missing")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::DirPath))
        .arg(clap::arg!(-m --mode <"mode"> "insert before (prepend) or after (append) each read")
            .required(true)
            .value_parser(clap::value_parser!(InsertionMode)))
        .arg(clap::arg!(-s --sequence <"sequence"> "sequence to prepend or append, e.g. ATCGATCGATCGATCG")
            .required(true))
}

fn config_from_args(args: &clap::ArgMatches) -> Option<Config> {
    Some(Config {
        input: args.get_one::<PathBuf>("input")?.clone(),
        output: args.get_one::<PathBuf>("output")?.clone(),
        insertion: InsertionSpec {
            sequence: args.get_one::<String>("sequence")?.clone(),
            mode: *args.get_one::<InsertionMode>("mode")?,
        },
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = command().get_matches();
    let Some(config) = config_from_args(&args) else {
        error!("missing required arguments");
        exit(1);
    };

    match pipeline::run(&config) {
        Ok(summary) => info!("wrote {} with {} to {}", pluralize("file", summary.files as isize, true),
                             pluralize("record", summary.records as isize, true), config.output.display()),
        Err(err) => {
            error!("{err}");
            exit(1);
        }
    }
}
