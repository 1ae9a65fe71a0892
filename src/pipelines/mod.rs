//! Pipelines.
//!
//! Provides a light [pipeline::Pipeline] trait and the [SentenceFilter] pipeline.
#[allow(clippy::module_inception)]
pub mod pipeline;
mod sentence_filter;

pub use pipeline::Pipeline;
pub use sentence_filter::{
    check_sentence, filter_corpus, FilterOptions, SentenceFilter, DEFAULT_BATCH_SIZE,
};
