/*! Filtering utilities

Filters operate on sentences and return `true` when the sentence is kept.

- [sentence] holds cheap lexical filters implementing [Filter] (see [sentence::MaxWords] for example),
- [FilterChain] runs an ordered list of them and reports the first rejection as a [Verdict],
- [ProperNounFilter] is the expensive one: it needs a [crate::tagging::Tagger] and works on batches.
! */
mod chain;
mod filter;
mod proper_noun;
pub mod sentence;

pub use chain::{FilterChain, Verdict};
pub use filter::Filter;
pub use proper_noun::{ProperNounFilter, PROPER_NOUN_FILTER};
