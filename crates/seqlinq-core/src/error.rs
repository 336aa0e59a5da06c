use thiserror::Error;

/// Canonical result for the whole engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A dynamically-typed entry point was handed something that is not a
    /// sequence (e.g. a JSON scalar where an array was required), or a
    /// pipeline description that does not parse.
    #[error("cannot build a sequence: {0}")]
    InvalidInput(String),

    /// A malformed operator argument, caught before any element is pulled
    /// (e.g. a negative skip/take count arriving through the untyped
    /// pipeline layer).
    #[error("invalid operator argument: {0}")]
    InvalidArgument(String),

    /// `first` found no element satisfying its condition. An expected,
    /// matchable outcome, distinct from caller bugs.
    #[error("no elements in sequence match the condition")]
    NoMatchingElement,
}
