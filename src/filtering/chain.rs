//! Ordered filter chain.
//!
//! Filters are evaluated in insertion order and evaluation stops at the first rejection.
//! The default chain puts the cheapest and most discriminating checks first.
use super::sentence::{
    BasicProperNoun, EndsWithPunctuation, HasNoNumbers, HasNoParentheses, MaxWords,
    NoSpecialCharacters, OnlyOneSentence, ReadingTime, StartsWithCapital,
};
use super::Filter;

/// Result of running a sentence through a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// Holds the name of the first filter that rejected the sentence.
    RejectedBy(&'static str),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

type BoxedFilter = Box<dyn for<'a> Filter<&'a str> + Send + Sync>;

/// Chains sentence filters, short-circuiting on the first rejection.
pub struct FilterChain(Vec<BoxedFilter>);

impl FilterChain {
    /// Empty chain. Accepts everything.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, filter: BoxedFilter) -> &mut FilterChain {
        self.0.push(filter);
        self
    }

    /// Filter names, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn verdict(&self, sentence: &str) -> Verdict {
        self.0
            .iter()
            .find(|filter| !filter.detect(sentence))
            .map_or(Verdict::Accepted, |filter| Verdict::RejectedBy(filter.name()))
    }
}

impl Default for FilterChain {
    /// The fast filter stage:
    /// 1. [StartsWithCapital]
    /// 1. [HasNoParentheses]
    /// 1. [EndsWithPunctuation]
    /// 1. [OnlyOneSentence]
    /// 1. [HasNoNumbers]
    /// 1. [NoSpecialCharacters]
    /// 1. [ReadingTime]
    /// 1. [BasicProperNoun]
    /// 1. [MaxWords]
    fn default() -> Self {
        let mut chain = Self::new();
        chain
            .add(Box::new(StartsWithCapital))
            .add(Box::new(HasNoParentheses))
            .add(Box::new(EndsWithPunctuation))
            .add(Box::new(OnlyOneSentence))
            .add(Box::new(HasNoNumbers))
            .add(Box::new(NoSpecialCharacters))
            .add(Box::new(ReadingTime::default()))
            .add(Box::new(BasicProperNoun))
            .add(Box::new(MaxWords::default()));
        chain
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Counts calls, and accepts according to `keep`.
    struct Probe {
        name: &'static str,
        keep: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Filter<&str> for Probe {
        fn detect(&self, _: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.keep
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn probe(name: &'static str, keep: bool) -> (Box<Probe>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let p = Probe {
            name,
            keep,
            calls: calls.clone(),
        };
        (Box::new(p), calls)
    }

    #[test]
    fn default_order() {
        let chain = FilterChain::default();
        assert_eq!(
            chain.names(),
            vec![
                "starts_with_capital",
                "has_no_parentheses",
                "ends_with_punctuation",
                "only_one_sentence",
                "has_no_numbers",
                "no_special_characters",
                "reading_time_filter",
                "basic_proper_noun_filter",
                "maximum_word_filter",
            ]
        );
    }

    #[test]
    fn short_circuit() {
        let (a, a_calls) = probe("a", true);
        let (b, b_calls) = probe("b", false);
        let (c, c_calls) = probe("c", true);
        let mut chain = FilterChain::new();
        chain.add(a).add(b).add(c);

        assert_eq!(chain.verdict("whatever"), Verdict::RejectedBy("b"));
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_chain_accepts() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert!(chain.verdict("").is_accepted());
    }

    #[test]
    fn first_failure_wins() {
        let chain = FilterChain::default();
        // lowercase, parentheses, digits: only the first one is reported
        assert_eq!(
            chain.verdict("hei (5)"),
            Verdict::RejectedBy("starts_with_capital")
        );
        assert_eq!(
            chain.verdict("Hei. Hvordan går det?"),
            Verdict::RejectedBy("only_one_sentence")
        );
        assert_eq!(
            chain.verdict("Jeg koster $5."),
            Verdict::RejectedBy("has_no_numbers")
        );
        assert_eq!(
            chain.verdict("Hvordan går det i dag?"),
            Verdict::RejectedBy("reading_time_filter")
        );
    }

    #[test]
    fn accepted() {
        let chain = FilterChain::default();
        // 10 long words, counting as 20
        let sentence = "Sykehusavdelingen arbeidsmiljøloven forsikringsselskapet \
            blåbærsyltetøyet arbeidsgiveravgiften sykehusavdelingen forsikringsselskapet \
            arbeidsmiljøloven blåbærsyltetøyet arbeidsgiveravgiften.";
        assert_eq!(chain.verdict(sentence), Verdict::Accepted);
    }
}
