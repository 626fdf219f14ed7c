//! Errors from looking up scenarios and loading wiring.
//!
//! Grading itself never fails; these only arise at the edges where scenario ids and wire lists come in from outside.

use thiserror::Error;

/// Result type alias using [`GradeError`].
pub type Result<T> = std::result::Result<T, GradeError>;

/// Everything that can go wrong before grading starts.
#[derive(Error, Debug)]
pub enum GradeError {
    /// No scenario in the catalog has this id.
    #[error("Unknown scenario '{id}'")]
    UnknownScenario {
        /// The id asked for.
        id: String,
    },

    /// The wiring file could not be read.
    #[error("Failed to read wiring file '{path}': {source}")]
    ReadWiring {
        /// The path as given.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The wiring was not a JSON list of wires.
    #[error("Malformed wiring: {0}")]
    ParseWiring(#[from] serde_json::Error),

    /// A validation result could not be rendered as JSON.
    #[error("Failed to render result: {0}")]
    RenderResult(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failure_is_not_reported_as_bad_wiring() {
        let cause = serde_json::from_str::<u8>("x").unwrap_err();
        let message = GradeError::RenderResult(cause).to_string();
        assert!(message.starts_with("Failed to render result"));
        assert!(!message.contains("wiring"));
    }
}
