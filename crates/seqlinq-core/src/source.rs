//! The single-pass forward-iteration capability every input must provide.
//!
//! Operators chain through `BoxSource`; each wrapper owns its upstream and
//! pulls from it on demand. Nothing here buffers or replays: once a source
//! reports `None` it must keep reporting `None`.

/// Produce one element per call, in order, until exhausted.
pub trait Source<T> {
    fn pull(&mut self) -> Option<T>;
}

/// Boxed form the lazy wrappers chain through.
pub type BoxSource<T> = Box<dyn Source<T>>;

impl<T> Source<T> for BoxSource<T> {
    fn pull(&mut self) -> Option<T> {
        (**self).pull()
    }
}

/// Adapts any `Iterator` into a `Source`.
///
/// This is the bridge for concrete collections (`Vec`, slices via
/// `into_iter`) and for externally supplied single-pass iterators alike;
/// no elements are copied.
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Source<I::Item> for IterSource<I> {
    fn pull(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}
