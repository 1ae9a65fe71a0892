/*! Part-of-speech tagging.

Holds a [Tagger] trait for plugging in tagging models, and two implementations:
- [ProcessTagger] talks to an external tagger process (line-delimited JSON),
- [LexiconTagger] uses a `form<TAB>UPOS` dictionary.
!*/
mod lexicon;
mod process;
mod tagger;

pub use lexicon::LexiconTagger;
pub use process::ProcessTagger;
pub use tagger::{Pos, Tagger, Token};

/// Allows picking a tagger at runtime.
impl Tagger for Box<dyn Tagger> {
    fn tag(&mut self, sentences: &[&str]) -> Result<Vec<Vec<Token>>, crate::error::Error> {
        (**self).tag(sentences)
    }
}
