//! Lazy, restartable sequences.
//!
//! A [`Sequence`] is a recipe, not a stream: every call to [`Sequence::iter`]
//! starts from position zero with a freshly unwrapped count, and nothing is
//! sampled until the iterator is advanced.

use fuzz_core::{Result, Source, Value, Wrapped};

/// `count` unwraps of `elem`, produced on demand.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    elem: Wrapped<T>,
    count: Wrapped<usize>,
}

/// Build a sequence of `count` unwraps of `elem`.
pub fn from<T: Value>(elem: impl Into<Wrapped<T>>, count: impl Into<Wrapped<usize>>) -> Sequence<T> {
    Sequence {
        elem: elem.into(),
        count: count.into(),
    }
}

impl<T: Value> Sequence<T> {
    /// Start a new pass over the sequence.
    ///
    /// The count is unwrapped here, once per pass. Passes are independent
    /// of one another.
    pub fn iter<'a>(&'a self, src: &'a mut Source) -> Result<SequenceIter<'a, T>> {
        let remaining = self.count.unwrap(src)?;

        Ok(SequenceIter {
            elem: &self.elem,
            src,
            remaining,
        })
    }
}

/// Iterator over one pass of a [`Sequence`].
///
/// Stops early after yielding the first error.
pub struct SequenceIter<'a, T> {
    elem: &'a Wrapped<T>,
    src: &'a mut Source,
    remaining: usize,
}

impl<T: Value> SequenceIter<'_, T> {
    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T: Value> Iterator for SequenceIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        let item = self.elem.unwrap(self.src);
        if item.is_err() {
            self.remaining = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Value> ExactSizeIterator for SequenceIter<'_, T> {}
