use std::collections::VecDeque;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::network::circuit::Circuit;

/// Dependencies between the gates of a circuit
///
/// Node i is gate i; there is one edge from a gate to each of its users, per use.
/// Primary inputs are not part of the graph.
pub(crate) struct DependencyGraph {
    graph: DiGraph<(), ()>,
}

impl DependencyGraph {
    /// Build the graph of a circuit
    pub fn from_circuit(circuit: &Circuit) -> DependencyGraph {
        let mut graph = DiGraph::with_capacity(circuit.nb_gates(), 2 * circuit.nb_gates());
        for _ in 0..circuit.nb_gates() {
            graph.add_node(());
        }
        for (i, (_, call)) in circuit.gates().enumerate() {
            for dep in call.dependencies() {
                if let Some(j) = circuit.position(dep) {
                    graph.add_edge(NodeIndex::new(j), NodeIndex::new(i), ());
                }
            }
        }
        DependencyGraph { graph }
    }

    /// Topological order using Kahn's algorithm
    ///
    /// Ready gates are processed in declaration order. Returns the sorted gates and the gates
    /// that could not be sorted, both as indices.
    pub fn kahn(&self) -> (Vec<usize>, Vec<usize>) {
        let n = self.graph.node_count();
        let mut in_degree: Vec<usize> = self
            .graph
            .node_indices()
            .map(|v| self.graph.edges_directed(v, Direction::Incoming).count())
            .collect();
        let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(i) = ready.pop_front() {
            order.push(i);
            for e in self.graph.edges_directed(NodeIndex::new(i), Direction::Outgoing) {
                let j = e.target().index();
                in_degree[j] -= 1;
                if in_degree[j] == 0 {
                    ready.push_back(j);
                }
            }
        }
        let remaining = (0..n).filter(|&i| in_degree[i] != 0).collect();
        (order, remaining)
    }

    /// Gates that are part of a dependency cycle, in declaration order
    pub fn cyclic_gates(&self) -> Vec<usize> {
        let mut ret = Vec::new();
        for scc in tarjan_scc(&self.graph) {
            let looped = scc.len() == 1 && self.graph.contains_edge(scc[0], scc[0]);
            if scc.len() > 1 || looped {
                ret.extend(scc.iter().map(|v| v.index()));
            }
        }
        ret.sort();
        ret
    }

    /// Logic depth of each gate: 1 for gates fed only by primary inputs
    ///
    /// Returns None if the circuit has a cycle.
    pub fn levels(&self) -> Option<Vec<usize>> {
        let (order, remaining) = self.kahn();
        if !remaining.is_empty() {
            return None;
        }
        let mut level = vec![1; order.len()];
        for i in order {
            for e in self.graph.edges_directed(NodeIndex::new(i), Direction::Outgoing) {
                let j = e.target().index();
                level[j] = level[j].max(level[i] + 1);
            }
        }
        Some(level)
    }
}
