//! The fluent `Sequence` facade over the operator wrappers.
//!
//! Each operator moves `self` into a new lazy layer, so the pre-operator
//! sequence can never be observed again and single-pass exhaustion is a
//! compile-time property. Chains evaluate pull-based and depth-first: no
//! operator pulls more upstream elements than the current request needs.

use std::cmp::Ordering;

use seqlinq_core::prelude::{BoxSource, IterSource, Source};
use seqlinq_core::{Error, Result};
use seqlinq_operators::{Filter, Limit, Map, Ordered};

/// A lazily-evaluated sequence of `T` backed by one single-pass source.
///
/// Re-iteration is a property of the root source, not of this type: a
/// `Sequence` built over a non-rewindable stream yields its elements once.
pub struct Sequence<T> {
    source: BoxSource<T>,
}

impl<T: 'static> Sequence<T> {
    /// Wrap an externally supplied source without copying it. The source
    /// need only support single-pass forward iteration.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            source: Box::new(IterSource::new(source.into_iter())),
        }
    }

    /// Wrap a concrete collection.
    pub fn from_values(values: Vec<T>) -> Self {
        Self::from_source(values)
    }

    fn wrap(source: impl Source<T> + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Keep only the elements the predicate accepts (LINQ `Where`).
    ///
    /// Lazy: the predicate runs at most once per source element, in source
    /// order, only as elements are pulled downstream.
    pub fn where_(self, predicate: impl FnMut(&T) -> bool + 'static) -> Self {
        Self::wrap(Filter::new(self.source, predicate))
    }

    /// Project each element into a new form (LINQ `Select`).
    ///
    /// Lazy and order-preserving; a side-effecting projector runs exactly
    /// once per element actually consumed.
    pub fn select<U: 'static>(self, project: impl FnMut(T) -> U + 'static) -> Sequence<U> {
        Sequence::wrap(Map::new(self.source, project))
    }

    /// Bypass the first `count` elements, or all of them if the sequence is
    /// shorter.
    pub fn skip(self, count: usize) -> Self {
        Self::wrap(Limit::skip(self.source, count))
    }

    /// Yield at most the first `count` elements, never pulling beyond them.
    /// Safe over unbounded sources.
    pub fn take(self, count: usize) -> Self {
        Self::wrap(Limit::take(self.source, count))
    }

    /// Sort by a three-way comparator (negative/zero/positive in the LINQ
    /// formulation; [`Ordering`] here).
    ///
    /// Eager: this is the one operator that pulls and buffers the *entire*
    /// remaining sequence before returning, so it must not be used on
    /// unbounded sources. The sort is stable; elements comparing `Equal`
    /// keep their relative source order.
    pub fn order_by(self, comparator: impl FnMut(&T, &T) -> Ordering) -> Self {
        let ordered = Ordered::new(self.source, comparator);
        #[cfg(feature = "tracing")]
        tracing::trace!(rows = ordered.len(), "order_by materialized sequence");
        Self::wrap(ordered)
    }

    /// Count the remaining elements. Consumes the sequence; a single-pass
    /// root source is exhausted afterwards.
    pub fn count(mut self) -> usize {
        let mut rows = 0;
        while self.source.pull().is_some() {
            rows += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(rows, "count drained sequence");
        rows
    }

    /// First element, or [`Error::NoMatchingElement`] if the sequence is
    /// empty.
    pub fn first(self) -> Result<T> {
        self.first_by(|_| true)
    }

    /// First element the predicate accepts, pulling nothing past it, or
    /// [`Error::NoMatchingElement`] if none matches.
    pub fn first_by(self, predicate: impl FnMut(&T) -> bool) -> Result<T> {
        self.find(predicate).ok_or(Error::NoMatchingElement)
    }

    /// First element, or the caller's `default` if the sequence is empty.
    /// Never fails for "no match".
    pub fn first_or_default(self, default: T) -> T {
        self.first_or_default_by(|_| true, default)
    }

    /// First element the predicate accepts, or `default` if and only if no
    /// element satisfies it.
    pub fn first_or_default_by(self, predicate: impl FnMut(&T) -> bool, default: T) -> T {
        self.find(predicate).unwrap_or(default)
    }

    fn find(mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        while let Some(item) = self.source.pull() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }
}

impl<T> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

/// Standard for-each consumption: every `next` is one pull through the
/// whole lazy chain.
impl<T> Iterator for Sequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.pull()
    }
}
