use serde::Serialize;

use crate::configuration::AcceptanceConfiguration;
use crate::diagnostic::Diagnostic;
use crate::error::{GradeError, Result};
use crate::graph::electrical_nodes;
use crate::matcher::match_configuration;
use crate::terminal::Connection;

/// The grade for one set of user wires.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Some acceptance configuration was matched exactly.
    pub passed: bool,
    /// 0 to 100. Always 100 when passed, otherwise the completeness of the closest unshorted configuration.
    pub score: f64,
    /// Empty when passed.
    pub errors: Vec<Diagnostic>,
}

impl ValidationResult {
    /// The diagnostics rendered as text, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Render as JSON, indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) };
        rendered.map_err(GradeError::RenderResult)
    }
}

/// Grade `connections` against every acceptance configuration of a scenario.
///
/// The first configuration matched exactly passes the scenario and ends the search.
/// Failing that, the score and diagnostics come from the most complete configuration that was not shorted.
/// A shorted configuration only reports its short circuit if nothing else has been recorded yet,
/// so when every configuration is shorted the first one evaluated is the one reported.
pub fn validate(configurations: &[AcceptanceConfiguration], connections: &[Connection]) -> ValidationResult {
    let nodes = electrical_nodes(connections);

    let mut best_score = 0.0;
    let mut best_errors = vec![Diagnostic::NoConnections];

    for (index, configuration) in configurations.iter().enumerate() {
        let outcome = match_configuration(configuration, &nodes);

        let Some(score) = outcome.score() else {
            tracing::debug!(index, "configuration short-circuited");
            if matches!(best_errors.first(), None | Some(Diagnostic::NoConnections)) {
                best_errors = outcome.errors;
            }
            continue;
        };

        if outcome.errors.is_empty() {
            tracing::debug!(index, "configuration matched");
            return ValidationResult {
                passed: true,
                score: 100.0,
                errors: Vec::new(),
            };
        }

        tracing::debug!(index, satisfied = outcome.satisfied, total = outcome.total, "configuration incomplete");
        if score > best_score {
            best_score = score;
            best_errors = outcome.errors;
        }
    }

    ValidationResult {
        passed: false,
        score: best_score,
        errors: best_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::RequiredGroup;
    use crate::terminal::wire;

    fn config(groups: &[&[&str]]) -> AcceptanceConfiguration {
        groups.iter().map(|g| RequiredGroup::new(g.iter().copied())).collect()
    }

    #[test]
    fn no_wires_reports_sentinel() {
        let configs = [config(&[&["A", "a"]])];
        let result = validate(&configs, &[]);
        assert_eq!(result, ValidationResult {
            passed: false,
            score: 0.0,
            errors: vec![Diagnostic::NoConnections],
        });
        assert_eq!(result.messages(), vec!["No connections made."]);
    }

    #[test]
    fn closest_incomplete_wins() {
        let configs = [
            config(&[&["A", "x"], &["B", "y"]]),
            config(&[&["A", "a"], &["B", "b"], &["C", "c"], &["D", "d"]]),
        ];
        let result = validate(&configs, &[wire("A", "a"), wire("B", "b"), wire("C", "c")]);
        assert!(!result.passed);
        assert_eq!(result.score, 75.0);
        assert_eq!(result.messages(), vec!["Incomplete: D, d"]);
    }

    #[test]
    fn short_does_not_displace_a_partial_score() {
        let configs = [
            config(&[&["A", "a"], &["B", "b"]]),
            config(&[&["A", "b"], &["B", "a"]]),
        ];
        let result = validate(&configs, &[wire("A", "a")]);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.messages(), vec!["Incomplete: B, b"]);
    }

    #[test]
    fn first_short_is_reported_when_all_short() {
        let configs = [
            config(&[&["A"], &["B"]]),
            config(&[&["A"], &["C"], &["B"]]),
        ];
        let result = validate(&configs, &[wire("A", "B")]);
        assert!(!result.passed);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.errors, vec![Diagnostic::ShortCircuit]);
    }

    #[test]
    fn short_replaces_sentinel_after_zero_score() {
        // the first configuration scores 0 and leaves the sentinel in place
        let configs = [
            config(&[&["X", "Y"]]),
            config(&[&["A"], &["B"]]),
        ];
        let result = validate(&configs, &[wire("A", "B")]);
        assert_eq!(result.errors, vec![Diagnostic::ShortCircuit]);
    }

    #[test]
    fn later_exact_match_passes() {
        let configs = [
            config(&[&["A", "b"]]),
            config(&[&["A", "a"], &["B", "b"]]),
        ];
        let result = validate(&configs, &[wire("b", "B"), wire("a", "A")]);
        assert!(result.passed);
        assert_eq!(result.score, 100.0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn serializes_messages_as_text() {
        let configs = [config(&[&["A", "a"]])];
        let json = serde_json::to_value(validate(&configs, &[])).unwrap();
        assert_eq!(json, serde_json::json!({
            "passed": false,
            "score": 0.0,
            "errors": ["No connections made."],
        }));
    }

    #[test]
    fn renders_json_compact_and_pretty() {
        let configs = [config(&[&["A", "a"]])];
        let result = validate(&configs, &[wire("A", "a")]);

        assert_eq!(result.to_json(false).unwrap(), r#"{"passed":true,"score":100.0,"errors":[]}"#);
        assert!(result.to_json(true).unwrap().contains("\n  \"passed\": true"));
    }
}
