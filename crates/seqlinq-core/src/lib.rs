#![forbid(unsafe_code)]
//! seqlinq-core: the error type, the single-pass `Source` pull capability,
//! and JSON value helpers shared by the operator and facade crates.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - A `Source` is the only capability the engine requires of its input:
//!   produce the next element, or report exhaustion. Length and random
//!   access are deliberately absent.

pub mod error;
pub mod json;
pub mod prelude;
pub mod source;

pub use error::{Error, Result};
pub use source::{BoxSource, IterSource, Source};
