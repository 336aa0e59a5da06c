//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::source::{BoxSource, IterSource, Source};
