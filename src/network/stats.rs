//! Compute circuit statistics
//!
//! ```
//! # use trisim::Circuit;
//! # let circuit = Circuit::new();
//! use trisim::network::stats::stats;
//! let stats = stats(&circuit);
//!
//! // Check that there is no inverter
//! assert_eq!(stats.nb_inv, 0);
//!
//! // Show the statistics
//! println!("{}", stats);
//! ```

use std::fmt;

use crate::network::graph::DependencyGraph;
use crate::{Circuit, Gate};

/// Number of inputs and gates in a circuit
#[derive(Clone, Debug)]
pub struct CircuitStats {
    /// Number of primary inputs
    pub nb_inputs: usize,
    /// Number of inverters
    pub nb_inv: usize,
    /// Number of And gates
    pub nb_and: usize,
    /// Number of Or gates
    pub nb_or: usize,
    /// Number of gates whose output is not used by another gate
    pub nb_unused: usize,
    /// Longest path from an input to an output, in gates; None if there is a cycle
    pub depth: Option<usize>,
}

impl CircuitStats {
    /// Total number of gates
    pub fn nb_gates(&self) -> usize {
        self.nb_inv + self.nb_and + self.nb_or
    }
}

impl fmt::Display for CircuitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats:")?;
        writeln!(f, "  Inputs: {}", self.nb_inputs)?;
        writeln!(f, "  Gates: {}", self.nb_gates())?;
        if self.nb_inv != 0 {
            writeln!(f, "  Inv: {}", self.nb_inv)?;
        }
        if self.nb_and != 0 {
            writeln!(f, "  And: {}", self.nb_and)?;
        }
        if self.nb_or != 0 {
            writeln!(f, "  Or: {}", self.nb_or)?;
        }
        if self.nb_unused != 0 {
            writeln!(f, "  Unused: {}", self.nb_unused)?;
        }
        match self.depth {
            Some(d) => writeln!(f, "  Depth: {}", d),
            None => writeln!(f, "  Depth: cyclic"),
        }
    }
}

/// Compute the statistics of the circuit
pub fn stats(c: &Circuit) -> CircuitStats {
    let mut ret = CircuitStats {
        nb_inputs: c.primary_inputs().len(),
        nb_inv: 0,
        nb_and: 0,
        nb_or: 0,
        nb_unused: 0,
        depth: None,
    };
    let mut used = vec![false; c.nb_gates()];
    for (_, call) in c.gates() {
        match call.gate() {
            Gate::Inv => ret.nb_inv += 1,
            Gate::And2 => ret.nb_and += 1,
            Gate::Or2 => ret.nb_or += 1,
        }
        for dep in call.dependencies() {
            if let Some(j) = c.position(dep) {
                used[j] = true;
            }
        }
    }
    ret.nb_unused = used.iter().filter(|u| !**u).count();
    ret.depth = DependencyGraph::from_circuit(c)
        .levels()
        .map(|l| l.into_iter().max().unwrap_or(0));
    ret
}
