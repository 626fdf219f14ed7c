use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::terminal::Terminal;

/// A set of terminals that must all share one electrical node.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredGroup(Vec<Terminal>);

impl RequiredGroup {
    /// Build a group from its member terminals, kept in the given order.
    pub fn new<T: Into<Terminal>>(terminals: impl IntoIterator<Item = T>) -> Self {
        Self(terminals.into_iter().map(Into::into).collect())
    }

    /// The member terminals.
    pub fn terminals(&self) -> &[Terminal] {
        &self.0
    }

    /// Number of member terminals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Groups are never empty by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for RequiredGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

/// One complete, physically valid wiring solution, expressed as the groups of terminals that must be joined.
///
/// Distinct groups must stay apart: a user node reaching into two of them is a short circuit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcceptanceConfiguration(Vec<RequiredGroup>);

impl AcceptanceConfiguration {
    /// The required groups, in order.
    pub fn groups(&self) -> &[RequiredGroup] {
        &self.0
    }

    /// Number of required groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this configuration has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// No terminal appears in more than one group (nor twice in one group).
    pub fn is_partition(&self) -> bool {
        self.0.iter().flat_map(|g| g.0.iter()).all_unique()
    }

    /// An order-free view of this configuration, for comparing configurations as sets of sets.
    pub fn canonical(&self) -> BTreeSet<BTreeSet<Terminal>> {
        self.0.iter()
            .map(|g| g.0.iter().cloned().collect())
            .collect()
    }
}

impl FromIterator<RequiredGroup> for AcceptanceConfiguration {
    fn from_iter<T: IntoIterator<Item = RequiredGroup>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Accumulates required groups keyed by their bus terminal.
///
/// The first time a bus is seen its group is opened with the bus itself as the first member,
/// so every transformer terminal tied to the same bus collapses into one group no matter which
/// choice produced it. Groups keep the order in which their buses were first touched.
#[derive(Default)]
pub(crate) struct GroupBuilder {
    groups: Vec<RequiredGroup>,
    by_bus: HashMap<Terminal, usize>,
}

impl GroupBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Tie `terminal` to `bus`.
    pub(crate) fn tie(&mut self, bus: &Terminal, terminal: Terminal) -> &mut Self {
        let Self { groups, by_bus } = self;
        let slot = *by_bus.entry(bus.clone()).or_insert_with(|| {
            groups.push(RequiredGroup(vec![bus.clone()]));
            groups.len() - 1
        });
        groups[slot].0.push(terminal);
        self
    }

    pub(crate) fn build(self) -> AcceptanceConfiguration {
        AcceptanceConfiguration(self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keys_on_bus() {
        let a = Terminal::from("BUS_P_A");
        let n = Terminal::from("BUS_P_N");
        let mut builder = GroupBuilder::new();
        builder
            .tie(&a, "T1_H1".into())
            .tie(&n, "T1_H2".into())
            .tie(&a, "T2_H2".into());
        let config = builder.build();

        assert_eq!(config.groups(), &[
            RequiredGroup::new(["BUS_P_A", "T1_H1", "T2_H2"]),
            RequiredGroup::new(["BUS_P_N", "T1_H2"]),
        ]);
        assert!(config.is_partition());
    }

    #[test]
    fn overlapping_groups_are_not_a_partition() {
        let config = AcceptanceConfiguration::from_iter([
            RequiredGroup::new(["BUS_P_A", "T1_H1"]),
            RequiredGroup::new(["BUS_P_B", "T1_H1"]),
        ]);
        assert!(!config.is_partition());
    }

    #[test]
    fn group_display_lists_members() {
        assert_eq!(RequiredGroup::new(["BUS_S_n", "T1_X2", "T2_X2"]).to_string(), "BUS_S_n, T1_X2, T2_X2");
    }
}
