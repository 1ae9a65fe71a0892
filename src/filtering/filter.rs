//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
///
/// `detect` returns `true` when the item is kept.
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;

    /// Stable name, used in statistics and reports.
    fn name(&self) -> &'static str;
}
