//! Dictionary-based tagger.
//!
//! Looks tokens up in a `form<TAB>UPOS` table, first by exact form then lowercased.
//! Unknown tokens get [Pos::X]. Lines starting with `#` are comments.
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use super::{Pos, Tagger, Token};
use crate::error::Error;

#[derive(Debug, Default)]
pub struct LexiconTagger {
    entries: HashMap<String, Pos>,
}

impl LexiconTagger {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading lexicon {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a lexicon. The first entry for a given form wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for record in rdr.records() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(form), Some(tag)) if !form.is_empty() => {
                    let pos: Pos = tag.trim().parse()?;
                    entries.entry(form.to_string()).or_insert(pos);
                }
                _ => {
                    return Err(Error::Tagging(format!(
                        "invalid lexicon entry at line {}",
                        record.position().map_or(0, |p| p.line())
                    )))
                }
            }
        }

        debug!("lexicon has {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn insert(&mut self, form: &str, pos: Pos) {
        self.entries.insert(form.to_string(), pos);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, form: &str) -> Pos {
        self.entries
            .get(form)
            .or_else(|| self.entries.get(&form.to_lowercase()))
            .copied()
            .unwrap_or(Pos::X)
    }

    fn tag_one(&self, sentence: &str) -> Vec<Token> {
        sentence
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|form| Token::new(form.to_string(), self.lookup(form)))
            .collect()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&mut self, sentences: &[&str]) -> Result<Vec<Vec<Token>>, Error> {
        Ok(sentences.iter().map(|s| self.tag_one(s)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "# form\tupos
Per\tPROPN
Oslo\tPROPN
hun\tPRON
møtte\tVERB
møtte\tNOUN
.\tPUNCT
";

    #[test]
    fn load() {
        let lex = LexiconTagger::from_reader(LEXICON.as_bytes()).unwrap();
        assert_eq!(lex.len(), 5);
        // first entry wins
        assert_eq!(lex.lookup("møtte"), Pos::Verb);
    }

    #[test]
    fn tag() {
        let mut lex = LexiconTagger::from_reader(LEXICON.as_bytes()).unwrap();
        let tags = lex.tag(&["Hun møtte Per i går."]).unwrap();
        let got: Vec<(&str, Pos)> = tags[0].iter().map(|t| (t.form(), t.pos())).collect();
        assert_eq!(
            got,
            vec![
                ("Hun", Pos::Pron),
                ("møtte", Pos::Verb),
                ("Per", Pos::Propn),
                ("i", Pos::X),
                ("går", Pos::X),
                (".", Pos::Punct),
            ]
        );
    }

    #[test]
    fn bad_tag() {
        let res = LexiconTagger::from_reader("Per\tNNP\n".as_bytes());
        assert!(matches!(res, Err(Error::Tagging(_))));
    }

    #[test]
    fn missing_tag() {
        assert!(LexiconTagger::from_reader("Per\n".as_bytes()).is_err());
    }

    #[test]
    fn insert() {
        let mut lex = LexiconTagger::default();
        assert!(lex.is_empty());
        lex.insert("Bergen", Pos::Propn);
        let tags = lex.tag(&["Bergen", "bergen"]).unwrap();
        assert!(tags[0][0].is_proper_noun());
        // lowercase fallback only goes one way
        assert!(!tags[1][0].is_proper_noun());
    }
}
