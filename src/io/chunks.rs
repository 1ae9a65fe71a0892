/*! Chunked output writer.

Accepted sentences are buffered and written in files of [ChunkWriter::chunk_size] records,
named `output_1.tsv`, `output_2.tsv`, …

Files are only created when a chunk is flushed, and previous files with the same name are truncated.
!*/
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;

/// Default number of records per output file.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Catalog entry of the source corpus.
pub const SOURCE_URL: &str = "https://www.nb.no/sprakbanken/ressurskatalog/oai-nb-no-sbr-80/";

/// Licensing provenance of the source corpus.
pub const RATIONALE: &str = "This is a CC0 licensed corpus cleared from newspaper text. \
The source sentences from a translation corpus is used.  \
It is released by Språkbanken.";

pub const DOMAIN: &str = "General";

/// Shape of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// `sentence \t source_url \t rationale \t (empty QA feedback) \t domain`
    #[default]
    Full,
    /// Sentence only.
    SentenceOnly,
}

/// An output line. Fields are not escaped.
pub struct Record<'a> {
    sentence: &'a str,
    format: RecordFormat,
}

impl<'a> Record<'a> {
    pub fn new(sentence: &'a str, format: RecordFormat) -> Self {
        Self { sentence, format }
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            RecordFormat::Full => write!(
                f,
                "{}\t{}\t{}\t\t{}",
                self.sentence, SOURCE_URL, RATIONALE, DOMAIN
            ),
            RecordFormat::SentenceOnly => f.write_str(self.sentence),
        }
    }
}

pub struct ChunkWriter {
    dst: PathBuf,
    chunk_size: usize,
    format: RecordFormat,
    buf: Vec<String>,
    nb_chunks: u64,
}

impl ChunkWriter {
    /// Create a new [ChunkWriter] writing into the `dst` directory.
    /// Nothing is created unless a chunk is flushed.
    ///
    /// A `chunk_size` of 0 is bumped to 1.
    pub fn new(dst: &Path, chunk_size: usize, format: RecordFormat) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            dst: dst.to_path_buf(),
            chunk_size,
            format,
            buf: Vec::with_capacity(chunk_size),
            nb_chunks: 0,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of files written so far.
    pub fn nb_chunks(&self) -> u64 {
        self.nb_chunks
    }

    /// Path of the `n`th (1-based) chunk.
    pub fn chunk_path(&self, n: u64) -> PathBuf {
        self.dst.join(format!("output_{n}.tsv"))
    }

    /// Add a sentence, flushing the buffer when it is full.
    pub fn push(&mut self, sentence: String) -> Result<(), Error> {
        self.buf.push(sentence);
        if self.buf.len() >= self.chunk_size {
            self.flush_chunk()?;
        }
        Ok(())
    }

    /// Add every sentence of `sentences`, in order.
    pub fn write_all<I: IntoIterator<Item = String>>(&mut self, sentences: I) -> Result<(), Error> {
        for sentence in sentences {
            self.push(sentence)?;
        }
        Ok(())
    }

    /// Flush the remaining (partial) chunk, and return the number of written files.
    pub fn finish(mut self) -> Result<u64, Error> {
        if !self.buf.is_empty() {
            self.flush_chunk()?;
        }
        Ok(self.nb_chunks)
    }

    fn flush_chunk(&mut self) -> Result<(), Error> {
        let path = self.chunk_path(self.nb_chunks + 1);
        info!("creating {:?} ({} records)", path, self.buf.len());

        let mut w = BufWriter::new(File::create(&path)?);
        for sentence in self.buf.drain(..) {
            writeln!(w, "{}", Record::new(&sentence, self.format))?;
        }
        w.flush()?;

        self.nb_chunks += 1;
        debug!("{} chunks written", self.nb_chunks);
        Ok(())
    }
}
