//! Declarative JSON pipelines over untyped value sequences.
//!
//! A linear list of steps, deserialized from JSON and applied in order to a
//! JSON array. Example:
//!
//! ```json
//! { "steps": [
//!     { "op": "where", "field": "genre", "equals": "Fantasy" },
//!     { "op": "order_by", "field": "title" },
//!     { "op": "take", "count": 10 }
//! ] }
//! ```
//!
//! Counts arrive untyped here, so this layer is where malformed operator
//! arguments surface: every step is validated before a single element is
//! pulled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use seqlinq_core::json;
use seqlinq_core::{Error, Result};

use crate::Sequence;

impl Sequence<Value> {
    /// Build a sequence from a JSON array. Anything else fails with
    /// [`Error::InvalidInput`].
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(Self::from_values(json::array_values(value)?))
    }
}

/// A linear operator pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub steps: Vec<Step>,
}

/// One pipeline step, tagged by `op`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Keep objects whose `field` equals the literal.
    Where { field: String, equals: Value },

    /// Project each object to the value of `field` (`null` if absent).
    Select { field: String },

    Skip { count: i64 },

    Take { count: i64 },

    /// Sort ascending by `field` under [`json::total_cmp`]. Objects missing
    /// the field sort as `null`.
    OrderBy { field: String },
}

impl Pipeline {
    /// Parse a pipeline description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidInput(format!("pipeline: {e}")))
    }

    /// Apply every step, in order, to the given JSON array.
    ///
    /// All argument validation happens up front; the returned sequence is
    /// still lazy apart from any `order_by` steps, which materialize at
    /// build time just like [`Sequence::order_by`] itself.
    pub fn apply(&self, source: Value) -> Result<Sequence<Value>> {
        for step in &self.steps {
            step.validate()?;
        }
        let mut sequence = Sequence::from_json(source)?;
        for step in &self.steps {
            sequence = step.apply(sequence)?;
        }
        Ok(sequence)
    }
}

impl Step {
    fn validate(&self) -> Result<()> {
        match self {
            Step::Skip { count } => checked_count("skip", *count).map(|_| ()),
            Step::Take { count } => checked_count("take", *count).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn apply(&self, sequence: Sequence<Value>) -> Result<Sequence<Value>> {
        Ok(match self {
            Step::Where { field, equals } => {
                let field = field.clone();
                let literal = equals.clone();
                sequence.where_(move |item| item.get(&field) == Some(&literal))
            }
            Step::Select { field } => {
                let field = field.clone();
                sequence.select(move |item| item.get(&field).cloned().unwrap_or(Value::Null))
            }
            Step::Skip { count } => sequence.skip(checked_count("skip", *count)?),
            Step::Take { count } => sequence.take(checked_count("take", *count)?),
            Step::OrderBy { field } => sequence.order_by(|a, b| {
                json::total_cmp(
                    a.get(field).unwrap_or(&Value::Null),
                    b.get(field).unwrap_or(&Value::Null),
                )
            }),
        })
    }
}

fn checked_count(op: &str, count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        Error::InvalidArgument(format!("{op} count must be non-negative, got {count}"))
    })
}
