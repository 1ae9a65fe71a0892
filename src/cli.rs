//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::error::Error;
use crate::io::RecordFormat;
use crate::pipelines::{FilterOptions, DEFAULT_BATCH_SIZE};
use crate::tagging::{LexiconTagger, ProcessTagger, Tagger};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "norfilter",
    about = "Norwegian sentence selection for speech recording."
)]
/// Holds every command that is callable by the `norfilter` command.
pub enum Norfilter {
    #[structopt(about = "Filter a sentence corpus into output chunks")]
    Filter(Filter),
    #[structopt(about = "Run a single sentence through the filters")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Tagger selection. Exactly one of the two has to be provided.
pub struct TaggerArgs {
    #[structopt(
        long = "tagger-cmd",
        help = "whitespace-separated command line of a tagger process, without quoting (one sentence per line in, one JSON array of [form, tag] per line out)"
    )]
    pub tagger_cmd: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "lexicon",
        help = "path to a form<TAB>UPOS lexicon"
    )]
    pub lexicon: Option<PathBuf>,
}

impl TaggerArgs {
    /// Start/load the selected tagger.
    pub fn build(&self) -> Result<Box<dyn Tagger>, Error> {
        match (&self.tagger_cmd, &self.lexicon) {
            (Some(cmd), None) => Ok(Box::new(ProcessTagger::from_command_line(cmd)?)),
            (None, Some(path)) => Ok(Box::new(LexiconTagger::from_path(path)?)),
            (None, None) => Err(Error::Config(
                "no tagger: provide either --tagger-cmd or --lexicon".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::Config(
                "--tagger-cmd and --lexicon are mutually exclusive".to_string(),
            )),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Filter command and parameters.
///
/// ```sh
/// norfilter-filter 0.1.0
/// Filter a sentence corpus into output chunks
///
/// USAGE:
///     norfilter filter [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -s, --single-sentences    write sentences only, without metadata fields
///
/// OPTIONS:
///     -b, --batch-size <batch-size>    number of sentences per tagger call [default: 64]
///     -c, --chunk-size <chunk-size>    number of sentences per output file [default: 1000]
///         --column <column>            0-based index of the sentence column [default: 1]
///         --lexicon <lexicon>          path to a form<TAB>UPOS lexicon
///         --stats-json <stats-json>    also write statistics as JSON
///         --tagger-cmd <tagger-cmd>    command line of a tagger process
///
/// ARGS:
///     <src>    source corpus (.tsv)
///     <dst>    destination folder (must exist)
/// ```
pub struct Filter {
    #[structopt(parse(from_os_str), help = "source corpus (.tsv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder (must exist)")]
    pub dst: PathBuf,
    #[structopt(
        long = "column",
        help = "0-based index of the sentence column",
        default_value = "1"
    )]
    pub column: usize,
    #[structopt(
        help = "number of sentences per output file",
        long = "chunk-size",
        default_value = "1000",
        short = "c"
    )]
    pub chunk_size: usize,
    #[structopt(
        help = "number of sentences per tagger call",
        long = "batch-size",
        default_value = "64",
        short = "b"
    )]
    pub batch_size: usize,
    #[structopt(
        short = "s",
        long = "single-sentences",
        help = "write sentences only, without metadata fields"
    )]
    pub single_sentences: bool,
    #[structopt(
        parse(from_os_str),
        long = "stats-json",
        help = "also write statistics as JSON"
    )]
    pub stats_json: Option<PathBuf>,
    #[structopt(flatten)]
    pub tagger: TaggerArgs,
}

impl Filter {
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            column: self.column,
            chunk_size: self.chunk_size,
            batch_size: self.batch_size,
            format: if self.single_sentences {
                RecordFormat::SentenceOnly
            } else {
                RecordFormat::Full
            },
        }
    }
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(help = "sentence to check")]
    pub sentence: String,
    #[structopt(flatten)]
    pub tagger: TaggerArgs,
}
