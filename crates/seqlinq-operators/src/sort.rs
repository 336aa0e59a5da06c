//! Materialized sorted view (LINQ `OrderBy`).
//!
//! The one non-lazy wrapper: building it drains the entire upstream. It must
//! therefore never be applied to an unbounded source.

use std::cmp::Ordering;

use seqlinq_core::prelude::{BoxSource, Source};

/// All upstream elements, pulled eagerly at construction and sorted with
/// the caller's three-way comparator.
///
/// The sort is stable: elements comparing `Equal` keep their relative
/// source order.
pub struct Ordered<T> {
    sorted: std::vec::IntoIter<T>,
}

impl<T> Ordered<T> {
    pub fn new(mut input: BoxSource<T>, mut comparator: impl FnMut(&T, &T) -> Ordering) -> Self {
        let mut buffer = Vec::new();
        while let Some(item) = input.pull() {
            buffer.push(item);
        }
        // Vec::sort_by is stable, which the contract relies on.
        buffer.sort_by(|a, b| comparator(a, b));
        Self {
            sorted: buffer.into_iter(),
        }
    }

    /// Number of elements not yet yielded.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.len() == 0
    }
}

impl<T> Source<T> for Ordered<T> {
    fn pull(&mut self) -> Option<T> {
        self.sorted.next()
    }
}
