/*! Tagger trait and tag types.

All part-of-speech taggers should implement [Tagger] to be useable by [crate::filtering::ProperNounFilter].
!*/
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Universal Dependencies part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Pos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }
}

impl FromStr for Pos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "X" => Pos::X,
            other => return Err(Error::Tagging(format!("unknown part-of-speech tag {other:?}"))),
        };
        Ok(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged token.
///
/// Serialized as a `[form, tag]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenSer", into = "TokenSer")]
pub struct Token {
    form: String,
    pos: Pos,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenSer(String, String);

impl From<Token> for TokenSer {
    fn from(t: Token) -> Self {
        Self(t.form, t.pos.to_string())
    }
}

impl TryFrom<TokenSer> for Token {
    type Error = Error;

    fn try_from(t: TokenSer) -> Result<Self, Self::Error> {
        Ok(Self {
            form: t.0,
            pos: t.1.parse()?,
        })
    }
}

impl Token {
    pub fn new(form: String, pos: Pos) -> Self {
        Self { form, pos }
    }

    /// Get a reference to the token's form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Get the token's tag.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_proper_noun(&self) -> bool {
        self.pos == Pos::Propn
    }
}

pub trait Tagger {
    /// Tags a batch of sentences.
    ///
    /// Returns one token list per sentence, in the order of `sentences`.
    fn tag(&mut self, sentences: &[&str]) -> Result<Vec<Vec<Token>>, Error>;
}
