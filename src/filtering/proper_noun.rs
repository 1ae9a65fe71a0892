//! Proper noun filtering through part-of-speech tagging.
//!
//! Sentences are sent to the [Tagger] in batches. A sentence is kept when none of its tokens is tagged `PROPN`.
use log::debug;

use crate::error::Error;
use crate::tagging::{Tagger, Token};

/// Stable name, used in statistics.
pub const PROPER_NOUN_FILTER: &str = "proper_noun_filter";

pub struct ProperNounFilter<T: Tagger> {
    tagger: T,
    batch_size: usize,
}

impl<T: Tagger> ProperNounFilter<T> {
    /// Create a new filter.
    ///
    /// A `batch_size` of 0 is bumped to 1.
    pub fn new(tagger: T, batch_size: usize) -> Self {
        Self {
            tagger,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns `true` for each sentence that holds no proper noun, in order.
    ///
    /// Any tagging error aborts the whole batch.
    pub fn detect_batch<S: AsRef<str>>(&mut self, sentences: &[S]) -> Result<Vec<bool>, Error> {
        let mut kept = Vec::with_capacity(sentences.len());
        for batch in sentences.chunks(self.batch_size) {
            let batch: Vec<&str> = batch.iter().map(AsRef::as_ref).collect();
            let tags = self.tagger.tag(&batch)?;
            if tags.len() != batch.len() {
                return Err(Error::Tagging(format!(
                    "tagger returned {} results for {} sentences",
                    tags.len(),
                    batch.len()
                )));
            }
            kept.extend(
                tags.iter()
                    .map(|tokens| !tokens.iter().any(Token::is_proper_noun)),
            );
            debug!("tagged {}/{} sentences", kept.len(), sentences.len());
        }
        Ok(kept)
    }

    /// Single sentence convenience.
    pub fn detect(&mut self, sentence: &str) -> Result<bool, Error> {
        Ok(self.detect_batch(&[sentence])?.into_iter().all(|kept| kept))
    }
}
