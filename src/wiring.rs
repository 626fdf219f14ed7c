//! Reading a learner's wires from the drawing surface.
//!
//! The surface hands over a JSON list. Each wire is either an object with `from` and `to` fields
//! (any other fields, such as `id` or `color`, are ignored) or a two-element array:
//!
//! ```json
//! [
//!   { "id": "w1", "from": "BUS_P_A", "to": "T1_H1", "color": "#f00" },
//!   ["T1_H2", "BUS_P_N"]
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;
use unordered_pair::UnorderedPair;

use crate::error::{GradeError, Result};
use crate::terminal::{Connection, Terminal};

#[derive(Deserialize)]
#[serde(untagged)]
enum WireRecord {
    Drawn { from: Terminal, to: Terminal },
    Pair(Terminal, Terminal),
}

impl From<WireRecord> for Connection {
    fn from(value: WireRecord) -> Self {
        match value {
            WireRecord::Drawn { from, to } => UnorderedPair(from, to),
            WireRecord::Pair(a, b) => UnorderedPair(a, b),
        }
    }
}

/// Parse a JSON list of wires.
pub fn parse_connections(input: &str) -> Result<Vec<Connection>> {
    let records: Vec<WireRecord> = serde_json::from_str(input)?;
    Ok(records.into_iter().map(Connection::from).collect())
}

/// Read and parse a JSON file of wires.
pub fn read_connections(path: &Path) -> Result<Vec<Connection>> {
    let content = std::fs::read_to_string(path).map_err(|e| GradeError::ReadWiring {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_connections(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::wire;

    #[test]
    fn accepts_both_shapes() {
        let wires = parse_connections(r##"[
            { "id": "w1", "from": "BUS_P_A", "to": "T1_H1", "color": "#f00" },
            ["T1_H2", "BUS_P_N"]
        ]"##).unwrap();

        assert_eq!(wires, vec![wire("T1_H1", "BUS_P_A"), wire("BUS_P_N", "T1_H2")]);
    }

    #[test]
    fn empty_list_is_no_wires() {
        assert!(parse_connections("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_connections(r#"{"from": "a"}"#), Err(GradeError::ParseWiring(_))));
        assert!(matches!(parse_connections(r#"[["a"]]"#), Err(GradeError::ParseWiring(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_connections(Path::new("/nonexistent/wiring.json")).unwrap_err();
        assert!(matches!(err, GradeError::ReadWiring { .. }));
    }
}
