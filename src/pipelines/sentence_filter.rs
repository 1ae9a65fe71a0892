//! Sentence selection pipeline.
//!
//! Selects sentences from a tab-separated translation corpus
//! that are suitable as speech recording prompts.
//!
//! # Processing
//! 1. Each line of the corpus is read, and its sentence column extracted. Malformed lines are skipped.
//! 1. Sentences go through the fast filter chain ([FilterChain::default]), stopping at the first failing filter.
//! 1. Survivors are tagged in batches, and sentences holding a proper noun are discarded ([ProperNounFilter]).
//! 1. Remaining sentences are written in chunks ([ChunkWriter]), in input order.
//!
//! Every line is accounted for in the returned [Stats].
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};

use crate::error::Error;
use crate::filtering::{FilterChain, ProperNounFilter, Verdict, PROPER_NOUN_FILTER};
use crate::io::{
    ChunkWriter, CorpusReader, Line, RecordFormat, DEFAULT_CHUNK_SIZE, DEFAULT_COLUMN,
};
use crate::pipelines::pipeline::Pipeline;
use crate::stats::Stats;
use crate::tagging::Tagger;

/// Log a progress line every that many input lines.
const PROGRESS_EVERY: u64 = 100_000;

/// Default number of sentences per tagger call.
pub const DEFAULT_BATCH_SIZE: usize = 64;

#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// 0-based index of the sentence column.
    pub column: usize,
    /// Records per output file.
    pub chunk_size: usize,
    /// Sentences per tagger call.
    pub batch_size: usize,
    pub format: RecordFormat,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN,
            chunk_size: DEFAULT_CHUNK_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            format: RecordFormat::Full,
        }
    }
}

pub struct SentenceFilter<T: Tagger> {
    src: PathBuf,
    dst: PathBuf,
    options: FilterOptions,
    chain: FilterChain,
    tagger: T,
}

impl<T: Tagger> SentenceFilter<T> {
    pub fn new(src: PathBuf, dst: PathBuf, tagger: T, options: FilterOptions) -> Self {
        debug!("filtering {:?} into {:?} with {:?}", src, dst, options);
        Self {
            src,
            dst,
            options,
            chain: FilterChain::default(),
            tagger,
        }
    }

    /// Replace the fast filter chain.
    pub fn with_chain(mut self, chain: FilterChain) -> Self {
        self.chain = chain;
        self
    }

    /// Check paths and sizes before doing any work.
    fn validate(&self) -> Result<(), Error> {
        if !self.src.is_file() {
            return Err(Error::Config(format!(
                "input {:?} does not exist or is not a file",
                self.src
            )));
        }
        let is_tsv = self
            .src
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("tsv"));
        if !is_tsv {
            return Err(Error::Config(format!(
                "input {:?} must be a .tsv file",
                self.src
            )));
        }
        if !self.dst.is_dir() {
            return Err(Error::Config(format!(
                "{:?} is not a directory. Create it or specify an existing directory",
                self.dst
            )));
        }
        if self.options.chunk_size == 0 || self.options.batch_size == 0 {
            return Err(Error::Config(
                "chunk and batch sizes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Runs the fast filters on every line of the corpus, and returns the survivors in input order.
    fn fast_pass(&self, stats: &mut Stats) -> Result<Vec<String>, Error> {
        info!("applying fast filters on {:?}", self.src);
        let reader = CorpusReader::from_path(&self.src, self.options.column)?;

        let mut survivors = Vec::new();
        for line in reader {
            match line? {
                Line::Malformed(_) => stats.add_malformed(),
                Line::Sentence(sentence) => {
                    stats.add_input();
                    match self.chain.verdict(&sentence) {
                        Verdict::Accepted => survivors.push(sentence),
                        Verdict::RejectedBy(name) => stats.add_rejection(name),
                    }
                    if stats.total_input() % PROGRESS_EVERY == 0 {
                        info!(
                            "{} lines processed, {} kept",
                            stats.total_input(),
                            survivors.len()
                        );
                    }
                }
            }
        }

        info!(
            "{} out of {} sentences passed fast filters",
            survivors.len(),
            stats.total_input()
        );
        Ok(survivors)
    }

    /// Tags survivors batch per batch, and streams the accepted ones to the writer.
    fn tagging_pass(
        survivors: Vec<String>,
        filter: &mut ProperNounFilter<T>,
        writer: &mut ChunkWriter,
        stats: &mut Stats,
    ) -> Result<(), Error> {
        info!(
            "applying proper noun filter on {} sentences",
            survivors.len()
        );
        let batches = survivors.into_iter().chunks(filter.batch_size());
        for batch in &batches {
            let batch: Vec<String> = batch.collect();
            let kept = filter.detect_batch(&batch)?;
            for (sentence, keep) in batch.into_iter().zip(kept) {
                if keep {
                    stats.add_accepted();
                    writer.push(sentence)?;
                } else {
                    stats.add_rejection(PROPER_NOUN_FILTER);
                }
            }
        }
        Ok(())
    }
}

impl<T: Tagger> Pipeline<Stats> for SentenceFilter<T> {
    fn run(self) -> Result<Stats, Error> {
        self.validate()?;

        let mut stats = Stats::for_chain(&self.chain);
        let survivors = self.fast_pass(&mut stats)?;

        let Self {
            dst,
            options,
            tagger,
            ..
        } = self;

        let mut filter = ProperNounFilter::new(tagger, options.batch_size);
        let mut writer = ChunkWriter::new(&dst, options.chunk_size, options.format);
        Self::tagging_pass(survivors, &mut filter, &mut writer, &mut stats)?;

        let nb_chunks = writer.finish()?;
        stats.set_output(nb_chunks, &dst);
        info!(
            "{} sentences accepted, written in {} file(s)",
            stats.total_accepted(),
            nb_chunks
        );
        Ok(stats)
    }
}

/// Runs a single sentence through `chain`, then through `filter` if it passed.
pub fn check_sentence<T: Tagger>(
    sentence: &str,
    chain: &FilterChain,
    filter: &mut ProperNounFilter<T>,
) -> Result<Verdict, Error> {
    match chain.verdict(sentence) {
        Verdict::Accepted if !filter.detect(sentence)? => {
            Ok(Verdict::RejectedBy(PROPER_NOUN_FILTER))
        }
        verdict => Ok(verdict),
    }
}

/// Shorthand for running a [SentenceFilter] with default options.
pub fn filter_corpus<T: Tagger>(src: &Path, dst: &Path, tagger: T) -> Result<Stats, Error> {
    SentenceFilter::new(
        src.to_path_buf(),
        dst.to_path_buf(),
        tagger,
        FilterOptions::default(),
    )
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::sentence::{MaxWords, StartsWithCapital};
    use crate::tagging::{LexiconTagger, Pos};

    fn lexicon() -> LexiconTagger {
        let mut lex = LexiconTagger::default();
        lex.insert("Mandag", Pos::Propn);
        lex
    }

    #[test]
    fn check() {
        let chain = FilterChain::default();
        let mut filter = ProperNounFilter::new(lexicon(), 1);
        let ok = "Sykehusavdelingen arbeidsmiljøloven forsikringsselskapet blåbærsyltetøyet \
            arbeidsgiveravgiften sykehusavdelingen forsikringsselskapet arbeidsmiljøloven \
            blåbærsyltetøyet arbeidsgiveravgiften.";
        assert_eq!(
            check_sentence(ok, &chain, &mut filter).unwrap(),
            Verdict::Accepted
        );

        let propn = "Mandag arbeidsmiljøloven forsikringsselskapet blåbærsyltetøyet \
            arbeidsgiveravgiften sykehusavdelingen forsikringsselskapet arbeidsmiljøloven \
            blåbærsyltetøyet arbeidsgiveravgiften sykehusavdelingen.";
        assert_eq!(
            check_sentence(propn, &chain, &mut filter).unwrap(),
            Verdict::RejectedBy(PROPER_NOUN_FILTER)
        );

        assert_eq!(
            check_sentence("hei.", &chain, &mut filter).unwrap(),
            Verdict::RejectedBy("starts_with_capital")
        );
    }

    #[test]
    fn custom_chain() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.tsv");
        std::fs::write(
            &src,
            "1\tHei på deg.\n2\thei.\n3\tMandag er fin.\n4\tDette er altfor langt.\n5\tHun sov.\n",
        )
        .unwrap();

        let mut chain = FilterChain::new();
        chain
            .add(Box::new(StartsWithCapital))
            .add(Box::new(MaxWords::with_max_words(3)));
        let options = FilterOptions {
            chunk_size: 2,
            format: RecordFormat::SentenceOnly,
            ..Default::default()
        };
        let stats = SentenceFilter::new(src, dir.path().to_path_buf(), lexicon(), options)
            .with_chain(chain)
            .run()
            .unwrap();

        let names: Vec<&str> = stats.rejections().iter().map(|r| r.filter()).collect();
        assert_eq!(
            names,
            vec!["starts_with_capital", "maximum_word_filter", PROPER_NOUN_FILTER]
        );
        assert_eq!(stats.rejected_by("starts_with_capital"), 1);
        assert_eq!(stats.rejected_by("maximum_word_filter"), 1);
        assert_eq!(stats.rejected_by(PROPER_NOUN_FILTER), 1);
        assert_eq!(stats.total_accepted(), 2);
        assert_eq!(stats.chunks_written(), 1);
        assert!(stats.is_consistent());

        let out = std::fs::read_to_string(dir.path().join("output_1.tsv")).unwrap();
        assert_eq!(out, "Hei på deg.\nHun sov.\n");
    }

    #[test]
    fn invalid_paths() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.txt");
        std::fs::write(&src, "1\tHei.\n").unwrap();

        let res = filter_corpus(&src, dir.path(), lexicon());
        assert!(matches!(res, Err(Error::Config(_))));

        let src = dir.path().join("corpus.tsv");
        std::fs::write(&src, "1\tHei.\n").unwrap();
        let res = filter_corpus(&src, &dir.path().join("missing"), lexicon());
        assert!(matches!(res, Err(Error::Config(_))));

        let res = filter_corpus(&dir.path().join("missing.tsv"), dir.path(), lexicon());
        assert!(matches!(res, Err(Error::Config(_))));
    }

    #[test]
    fn zero_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.tsv");
        std::fs::write(&src, "1\tHei.\n").unwrap();
        let options = FilterOptions {
            chunk_size: 0,
            ..Default::default()
        };
        let res = SentenceFilter::new(src, dir.path().to_path_buf(), lexicon(), options).run();
        assert!(matches!(res, Err(Error::Config(_))));
    }
}
