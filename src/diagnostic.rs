use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::configuration::RequiredGroup;

/// A grading remark for the learner. None of these are fatal; they are carried in a [`ValidationResult`](crate::ValidationResult).
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// Nothing better to report: no wires yet, or no configuration came close enough to say anything useful.
    #[error("No connections made.")]
    NoConnections,
    /// One user node reaches into two required groups of the same configuration.
    #[error("Short Circuit Detected! Distinct phases connected together.")]
    ShortCircuit,
    /// A required group is not entirely inside any single user node.
    #[error("Incomplete: {missing}")]
    Incomplete {
        /// The whole group, not just the terminals that are off the node.
        missing: RequiredGroup,
    },
}

// the caller renders diagnostics as plain text, so that is the wire form too
impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
