//! Projection wrapper (LINQ `Select`).

use seqlinq_core::prelude::{BoxSource, Source};

/// Order-preserving 1:1 projection: pulls one upstream element, applies the
/// transform, yields the result. The transform runs exactly once per element
/// actually pulled by a downstream consumer, and never ahead of demand.
pub struct Map<T, U> {
    input: BoxSource<T>,
    project: Box<dyn FnMut(T) -> U>,
}

impl<T, U> Map<T, U> {
    pub fn new(input: BoxSource<T>, project: impl FnMut(T) -> U + 'static) -> Self {
        Self {
            input,
            project: Box::new(project),
        }
    }
}

impl<T, U> Source<U> for Map<T, U> {
    fn pull(&mut self) -> Option<U> {
        self.input.pull().map(|item| (self.project)(item))
    }
}
