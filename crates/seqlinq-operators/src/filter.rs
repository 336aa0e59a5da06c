//! Filter wrapper with a caller-supplied predicate (LINQ `Where`).

use seqlinq_core::prelude::{BoxSource, Source};

/// On each pull, keeps pulling from the upstream until the predicate
/// accepts an element, then yields it. The predicate runs at most once per
/// upstream element, in source order; nothing is buffered.
pub struct Filter<T> {
    input: BoxSource<T>,
    predicate: Box<dyn FnMut(&T) -> bool>,
}

impl<T> Filter<T> {
    pub fn new(input: BoxSource<T>, predicate: impl FnMut(&T) -> bool + 'static) -> Self {
        Self {
            input,
            predicate: Box::new(predicate),
        }
    }
}

impl<T> Source<T> for Filter<T> {
    fn pull(&mut self) -> Option<T> {
        while let Some(item) = self.input.pull() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}
