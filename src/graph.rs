use std::collections::{BTreeSet, HashSet};

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use unordered_pair::UnorderedPair;

use crate::configuration::RequiredGroup;
use crate::terminal::{Connection, Terminal};

/// A maximal set of terminals transitively joined by wires.
///
/// Electrical nodes are never stored; they are recomputed from the wires on every validation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElectricalNode {
    terminals: BTreeSet<Terminal>,
}

impl ElectricalNode {
    /// Whether `terminal` lies on this node.
    pub fn contains(&self, terminal: &str) -> bool {
        self.terminals.contains(terminal)
    }

    /// Every member of `group` lies on this node.
    pub fn is_superset_of(&self, group: &RequiredGroup) -> bool {
        group.terminals().iter().all(|t| self.terminals.contains(t))
    }

    /// At least one member of `group` lies on this node.
    pub fn touches(&self, group: &RequiredGroup) -> bool {
        group.terminals().iter().any(|t| self.terminals.contains(t))
    }

    /// Number of terminals on this node.
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Always false for nodes produced by [`electrical_nodes`].
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// The terminals on this node, in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter()
    }
}

impl FromIterator<Terminal> for ElectricalNode {
    fn from_iter<T: IntoIterator<Item = Terminal>>(iter: T) -> Self {
        Self { terminals: iter.into_iter().collect() }
    }
}

/// Partition the terminals mentioned by `connections` into electrical nodes.
///
/// Every terminal named by at least one wire lands in exactly one node; terminals never wired are absent.
/// Duplicate wires and self-loops collapse in the graph and do not change the result.
/// The returned nodes are in no particular order.
pub fn electrical_nodes(connections: &[Connection]) -> Vec<ElectricalNode> {
    let mut graph: UnGraphMap<&str, ()> = UnGraphMap::with_capacity(
        // two fresh terminals per wire at most
        connections.len() * 2,
        connections.len(),
    );
    for UnorderedPair(a, b) in connections {
        graph.add_edge(a.as_str(), b.as_str(), ());
    }

    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.node_count());
    let mut nodes = Vec::new();

    for start in graph.nodes() {
        if visited.contains(&start) {
            continue;
        }

        let mut bfs = Bfs::new(&graph, start);
        let mut terminals = BTreeSet::new();
        while let Some(terminal) = bfs.next(&graph) {
            visited.insert(terminal);
            terminals.insert(Terminal::from(terminal));
        }
        nodes.push(ElectricalNode { terminals });
    }

    tracing::trace!(
        terminals = graph.node_count(),
        wires = graph.edge_count(),
        nodes = nodes.len(),
        "computed electrical nodes"
    );

    nodes
}
