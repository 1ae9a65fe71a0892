//! sentence-level filtering
//!
//! Cheap, purely lexical checks that need no linguistic model.
//! Every filter returns `true` when the sentence is kept.
use super::Filter;

/// Punctuation marks that may end a sentence.
const END_PUNCTUATION: [char; 2] = ['.', '?'];

/// Punctuation allowed inside a sentence by [NoSpecialCharacters].
///
/// Period, question mark, comma, hyphen, ASCII apostrophe and typographic apostrophe (U+2019).
pub const ALLOWED_PUNCTUATION: [char; 6] = ['.', '?', ',', '-', '\'', '\u{2019}'];

/// Letters outside of ASCII that are allowed by [NoSpecialCharacters].
pub const NORWEGIAN_LETTERS: [char; 6] = ['æ', 'ø', 'å', 'Æ', 'Ø', 'Å'];

fn is_end_punctuation(c: char) -> bool {
    END_PUNCTUATION.contains(&c)
}

/// First character is an uppercase letter.
///
/// The very first character is checked, leading whitespace is not skipped.
#[derive(Debug, Default)]
pub struct StartsWithCapital;

impl Filter<&str> for StartsWithCapital {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().next().map_or(false, char::is_uppercase)
    }

    fn name(&self) -> &'static str {
        "starts_with_capital"
    }
}

/// No opening or closing parenthesis.
#[derive(Debug, Default)]
pub struct HasNoParentheses;

impl Filter<&str> for HasNoParentheses {
    fn detect(&self, sentence: &str) -> bool {
        !sentence.contains(&['(', ')'][..])
    }

    fn name(&self) -> &'static str {
        "has_no_parentheses"
    }
}

/// Last character is `.` or `?`.
#[derive(Debug, Default)]
pub struct EndsWithPunctuation;

impl Filter<&str> for EndsWithPunctuation {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().last().map_or(false, is_end_punctuation)
    }

    fn name(&self) -> &'static str {
        "ends_with_punctuation"
    }
}

/// Exactly one `.` or `?` in the whole string, and it is the last character.
#[derive(Debug, Default)]
pub struct OnlyOneSentence;

impl Filter<&str> for OnlyOneSentence {
    fn detect(&self, sentence: &str) -> bool {
        let nb_punct = sentence.chars().filter(|c| is_end_punctuation(*c)).count();
        nb_punct == 1 && EndsWithPunctuation.detect(sentence)
    }

    fn name(&self) -> &'static str {
        "only_one_sentence"
    }
}

/// No ASCII digit.
#[derive(Debug, Default)]
pub struct HasNoNumbers;

impl Filter<&str> for HasNoNumbers {
    fn detect(&self, sentence: &str) -> bool {
        !sentence.chars().any(|c| c.is_ascii_digit())
    }

    fn name(&self) -> &'static str {
        "has_no_numbers"
    }
}

/// Every character is either an ASCII letter, one of [NORWEGIAN_LETTERS],
/// whitespace or one of [ALLOWED_PUNCTUATION].
///
/// Accented letters such as `é` are rejected.
#[derive(Debug, Default)]
pub struct NoSpecialCharacters;

impl NoSpecialCharacters {
    fn allowed(c: char) -> bool {
        c.is_ascii_alphabetic()
            || c.is_whitespace()
            || NORWEGIAN_LETTERS.contains(&c)
            || ALLOWED_PUNCTUATION.contains(&c)
    }
}

impl Filter<&str> for NoSpecialCharacters {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().all(Self::allowed)
    }

    fn name(&self) -> &'static str {
        "no_special_characters"
    }
}

/// Reading time estimation.
///
/// Words are whitespace-separated. A word longer than [ReadingTime::long_word] characters
/// counts as two. The estimated time is `count / wpm * 60` seconds, and has to be in
/// `[min_secs, max_secs]` (inclusive).
///
/// Defaults: 150 wpm, 10 characters, between 8 and 17 seconds.
#[derive(Debug)]
pub struct ReadingTime {
    wpm: u32,
    long_word: usize,
    min_secs: f64,
    max_secs: f64,
}

impl ReadingTime {
    pub fn new(wpm: u32, long_word: usize, min_secs: f64, max_secs: f64) -> Self {
        Self {
            wpm,
            long_word,
            min_secs,
            max_secs,
        }
    }

    /// Effective word count, long words counting as two.
    pub fn word_count(&self, sentence: &str) -> usize {
        sentence
            .split_whitespace()
            .map(|word| {
                if word.chars().count() > self.long_word {
                    2
                } else {
                    1
                }
            })
            .sum()
    }

    /// Estimated reading time, in seconds.
    pub fn seconds(&self, sentence: &str) -> f64 {
        self.word_count(sentence) as f64 * 60.0 / f64::from(self.wpm)
    }
}

impl Default for ReadingTime {
    fn default() -> Self {
        Self::new(150, 10, 8.0, 17.0)
    }
}

impl Filter<&str> for ReadingTime {
    fn detect(&self, sentence: &str) -> bool {
        let secs = self.seconds(sentence);
        (self.min_secs..=self.max_secs).contains(&secs)
    }

    fn name(&self) -> &'static str {
        "reading_time_filter"
    }
}

/// Rejects sentences where a word other than the first one starts with an uppercase letter.
///
/// This overshoots (acronyms, titles), but removes most proper nouns before tagging.
#[derive(Debug, Default)]
pub struct BasicProperNoun;

impl Filter<&str> for BasicProperNoun {
    fn detect(&self, sentence: &str) -> bool {
        !sentence
            .split_whitespace()
            .skip(1)
            .filter_map(|word| word.chars().next())
            .any(char::is_uppercase)
    }

    fn name(&self) -> &'static str {
        "basic_proper_noun_filter"
    }
}

/// Maximum number of whitespace-separated words.
///
/// [MaxWords::max_words] is 18 by default.
#[derive(Debug)]
pub struct MaxWords {
    max_words: usize,
}

impl MaxWords {
    /// specify a maximum word count
    pub fn with_max_words(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Get a reference to the maximum word count.
    pub fn max_words(&self) -> &usize {
        &self.max_words
    }
}

impl Default for MaxWords {
    fn default() -> Self {
        Self { max_words: 18 }
    }
}

impl Filter<&str> for MaxWords {
    fn detect(&self, sentence: &str) -> bool {
        sentence.split_whitespace().count() <= self.max_words
    }

    fn name(&self) -> &'static str {
        "maximum_word_filter"
    }
}
