#![forbid(unsafe_code)]
//! seqlinq-operators: the lazy wrapper types behind each operator
//! (filter/map/limit/sort).
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - Each wrapper owns its upstream `BoxSource` and knows how to produce
//!   "the next element" given its own state; chains evaluate depth-first,
//!   one element per pull.
//! - `Ordered` is the single exception to laziness: it drains its upstream
//!   at construction time.

pub mod filter;
pub mod limit;
pub mod map;
pub mod sort;

pub use filter::Filter;
pub use limit::Limit;
pub use map::Map;
pub use sort::Ordered;
