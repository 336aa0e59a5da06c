//! Positional window wrapper covering both `skip` and `take`.

use seqlinq_core::prelude::{BoxSource, Source};

/// Discards a leading offset and/or caps how many elements flow through.
///
/// Offsets are positional within the upstream's own iteration order. Once
/// the cap is reached the upstream is never pulled again, so `take` is safe
/// over unbounded or expensive sources. Composing `skip(a)` then `take(b)`
/// yields the contiguous window `[a, a + b)`.
pub struct Limit<T> {
    input: BoxSource<T>,
    to_skip: usize,
    remaining: Option<usize>,
}

impl<T> Limit<T> {
    /// Bypass the first `count` elements (or fewer, if the upstream is
    /// shorter) and yield the remainder.
    pub fn skip(input: BoxSource<T>, count: usize) -> Self {
        Self {
            input,
            to_skip: count,
            remaining: None,
        }
    }

    /// Yield at most the first `count` elements, then report exhaustion
    /// without pulling further.
    pub fn take(input: BoxSource<T>, count: usize) -> Self {
        Self {
            input,
            to_skip: 0,
            remaining: Some(count),
        }
    }
}

impl<T> Source<T> for Limit<T> {
    fn pull(&mut self) -> Option<T> {
        while self.to_skip > 0 {
            self.input.pull()?;
            self.to_skip -= 1;
        }
        match self.remaining {
            Some(0) => None,
            Some(ref mut left) => {
                let item = self.input.pull()?;
                *left -= 1;
                Some(item)
            }
            None => self.input.pull(),
        }
    }
}
