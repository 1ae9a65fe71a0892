//! # Norfilter
//!
//! Selects, from a Norwegian translation corpus, sentences that are suitable as
//! crowd-sourced speech recording prompts.
//!
//! Sentences go through a chain of cheap lexical filters (capitalization, punctuation,
//! character set, reading time, word count), then through a part-of-speech tagger
//! that rejects proper nouns. Accepted sentences are written in chunks of 1000.
//!
//! ## Getting started
//!
//! ```sh
//! norfilter 0.1.0
//! Norwegian sentence selection for speech recording.
//!
//! USAGE:
//!     norfilter <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check     Run a single sentence through the filters
//!     filter    Filter a sentence corpus into output chunks
//!     help      Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Use `RUST_LOG=info` to follow progress.
use std::fs::File;

use structopt::StructOpt;

use norfilter::cli;
use norfilter::error::Error;
use norfilter::filtering::{FilterChain, ProperNounFilter, Verdict};
use norfilter::pipelines::{check_sentence, Pipeline, SentenceFilter, DEFAULT_BATCH_SIZE};

#[macro_use]
extern crate log;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Norfilter::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Norfilter::Filter(f) => {
            let tagger = f.tagger.build()?;
            let p = SentenceFilter::new(f.src.clone(), f.dst.clone(), tagger, f.options());
            let stats = p.run()?;

            if let Some(path) = &f.stats_json {
                info!("writing statistics to {:?}", path);
                serde_json::to_writer_pretty(File::create(path)?, &stats)?;
            }

            if !stats.is_consistent() {
                warn!("statistics do not add up: {:?}", stats);
            }
            print!("\n{stats}");
        }

        cli::Norfilter::Check(c) => {
            let chain = FilterChain::default();
            let mut filter = ProperNounFilter::new(c.tagger.build()?, DEFAULT_BATCH_SIZE);
            match check_sentence(&c.sentence, &chain, &mut filter)? {
                Verdict::Accepted => println!("accepted"),
                Verdict::RejectedBy(name) => println!("rejected by {name}"),
            }
        }
    };
    Ok(())
}
