use crate::configuration::AcceptanceConfiguration;
use crate::diagnostic::Diagnostic;
use crate::graph::ElectricalNode;

/// How well the user's electrical nodes match one [`AcceptanceConfiguration`].
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    /// Some user node touched two distinct groups. When set, `satisfied` is meaningless and left at zero.
    pub short_circuit: bool,
    /// Groups lying entirely within one user node.
    pub satisfied: usize,
    /// Groups in the configuration.
    pub total: usize,
    /// A single [`Diagnostic::ShortCircuit`], or one [`Diagnostic::Incomplete`] per unsatisfied group.
    pub errors: Vec<Diagnostic>,
}

impl MatchOutcome {
    /// Completeness in percent, or [`None`] for a shorted configuration, which takes no part in scoring.
    pub fn score(&self) -> Option<f64> {
        match (self.short_circuit, self.total) {
            (true, _) => None,
            (false, 0) => Some(100.0),
            (false, total) => Some(self.satisfied as f64 / total as f64 * 100.0),
        }
    }

    /// Every group satisfied and nothing shorted.
    pub fn is_full_match(&self) -> bool {
        !self.short_circuit && self.errors.is_empty()
    }
}

/// Compare the user's electrical `nodes` against one acceptance configuration.
///
/// First, every node is checked for touching more than one group; the first such node disqualifies the whole configuration
/// and nothing further is examined.
/// Otherwise each group is satisfied if and only if a single node contains all of it. A group split over two nodes earns nothing.
pub fn match_configuration(configuration: &AcceptanceConfiguration, nodes: &[ElectricalNode]) -> MatchOutcome {
    let groups = configuration.groups();
    let total = groups.len();

    let shorted = nodes.iter().any(|node| {
        groups.iter()
            .filter(|group| node.touches(group))
            .take(2)
            .count() > 1
    });

    if shorted {
        return MatchOutcome {
            short_circuit: true,
            satisfied: 0,
            total,
            errors: vec![Diagnostic::ShortCircuit],
        };
    }

    let mut satisfied = 0;
    let mut errors = Vec::new();
    for group in groups {
        if nodes.iter().any(|node| node.is_superset_of(group)) {
            satisfied += 1;
        } else {
            errors.push(Diagnostic::Incomplete { missing: group.clone() });
        }
    }

    MatchOutcome { short_circuit: false, satisfied, total, errors }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::configuration::RequiredGroup;
    use crate::graph::electrical_nodes;
    use crate::terminal::wire;

    fn three_groups() -> AcceptanceConfiguration {
        AcceptanceConfiguration::from_iter([
            RequiredGroup::new(["BUS_P_A", "T1_H1"]),
            RequiredGroup::new(["BUS_P_B", "T2_H1"]),
            RequiredGroup::new(["BUS_P_N", "T1_H2", "T2_H2"]),
        ])
    }

    #[test]
    fn partial_wiring_scores_satisfied_fraction() {
        let nodes = electrical_nodes(&[wire("BUS_P_A", "T1_H1"), wire("BUS_P_B", "T2_H1")]);
        let outcome = match_configuration(&three_groups(), &nodes);

        assert!(!outcome.short_circuit);
        assert_eq!((outcome.satisfied, outcome.total), (2, 3));
        assert_relative_eq!(outcome.score().unwrap(), 200.0 / 3.0);
        assert_eq!(outcome.errors, vec![Diagnostic::Incomplete {
            missing: RequiredGroup::new(["BUS_P_N", "T1_H2", "T2_H2"]),
        }]);
    }

    #[test]
    fn split_group_is_not_satisfied() {
        // neutral wired in two separate pieces
        let nodes = electrical_nodes(&[wire("BUS_P_N", "T1_H2"), wire("T2_H2", "T2_H2")]);
        let outcome = match_configuration(&three_groups(), &nodes);

        assert_eq!(outcome.satisfied, 0);
        assert_eq!(outcome.errors.len(), 3);
    }

    #[test]
    fn touching_two_groups_is_a_short() {
        let nodes = electrical_nodes(&[wire("BUS_P_A", "T1_H1"), wire("T1_H1", "T2_H1")]);
        let outcome = match_configuration(&three_groups(), &nodes);

        assert!(outcome.short_circuit);
        assert_eq!(outcome.score(), None);
        assert_eq!(outcome.errors, vec![Diagnostic::ShortCircuit]);
        assert!(!outcome.is_full_match());
    }

    #[test]
    fn unknown_terminals_are_tolerated() {
        let nodes = electrical_nodes(&[wire("BUS_P_A", "T1_H1"), wire("NOWHERE", "T9_X9")]);
        let outcome = match_configuration(&three_groups(), &nodes);

        assert!(!outcome.short_circuit);
        assert_eq!(outcome.satisfied, 1);
    }

    #[test]
    fn empty_configuration_is_trivially_complete() {
        let outcome = match_configuration(&AcceptanceConfiguration::default(), &[]);
        assert_eq!(outcome.score(), Some(100.0));
        assert!(outcome.is_full_match());
    }
}
