#![forbid(unsafe_code)]
//! seqlinq: lazy LINQ-style operator chains over single-pass sources.
//!
//! A [`Sequence`] wraps one forward-only source; every transforming operator
//! consumes it and returns a new sequence layered on top, and nothing is
//! evaluated until the chain is actually iterated (or an operator forces
//! materialization, as `order_by`, `count`, and the `first*` family do).
//!
//! ```
//! use seqlinq::Sequence;
//!
//! let cheap: Vec<i32> = Sequence::from_values(vec![3, 9, 1, 7])
//!     .where_(|n| *n < 8)
//!     .order_by(|a, b| a.cmp(b))
//!     .take(2)
//!     .collect();
//! assert_eq!(cheap, vec![1, 3]);
//! ```

pub mod pipeline;
pub mod sequence;

pub use pipeline::{Pipeline, Step};
pub use seqlinq_core::{Error, Result};
pub use sequence::Sequence;
