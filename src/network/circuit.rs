use std::fmt;

use fxhash::{FxHashMap, FxHashSet};

use crate::error::Error;
use crate::network::gates::GateCall;
use crate::network::state::Vector;

/// Values of named signals, by name
pub type SignalTable = FxHashMap<String, Vector>;

/// Representation of a circuit as an ordered list of named gates
///
/// Gates may be declared in any order: a gate may use signals that are declared later.
/// Each output name is declared at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    gates: Vec<(String, GateCall)>,
    index: FxHashMap<String, usize>,
}

impl Circuit {
    /// Create a new circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of gates in the circuit
    pub fn nb_gates(&self) -> usize {
        self.gates.len()
    }

    /// Returns true if the circuit has no gate
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Get the output name of the gate at index i
    pub fn name(&self, i: usize) -> &str {
        &self.gates[i].0
    }

    /// Get the gate call at index i
    pub fn call(&self, i: usize) -> &GateCall {
        &self.gates[i].1
    }

    /// Get the index of the gate driving a signal, if any
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterate over the gates in declaration order
    pub fn gates(&self) -> impl Iterator<Item = (&str, &GateCall)> + '_ {
        self.gates.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Add a new gate driving the signal `name`; return its index
    pub fn add(&mut self, name: &str, call: GateCall) -> Result<usize, Error> {
        if self.index.contains_key(name) {
            return Err(Error::DuplicateDefinition(name.to_owned()));
        }
        let i = self.gates.len();
        self.index.insert(name.to_owned(), i);
        self.gates.push((name.to_owned(), call));
        Ok(i)
    }

    /// Names read by some gate but not driven by any gate, in order of first use
    pub fn primary_inputs(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut ret = Vec::new();
        for (_, call) in &self.gates {
            for dep in call.dependencies() {
                if !self.index.contains_key(dep) && seen.insert(dep.as_str()) {
                    ret.push(dep.clone());
                }
            }
        }
        ret
    }

    /// Check that no gate redefines one of the inputs
    pub fn check_inputs(&self, inputs: &SignalTable) -> Result<(), Error> {
        for (name, _) in &self.gates {
            if inputs.contains_key(name) {
                return Err(Error::DuplicateDefinition(name.clone()));
            }
        }
        Ok(())
    }

    /// Build a new circuit with the gates in the given order
    ///
    /// `order` must be a permutation of the gate indices.
    pub fn reordered(&self, order: &[usize]) -> Circuit {
        assert_eq!(order.len(), self.nb_gates());
        let mut ret = Circuit::new();
        for &i in order {
            let (name, call) = &self.gates[i];
            ret.index.insert(name.clone(), ret.gates.len());
            ret.gates.push((name.clone(), call.clone()));
        }
        ret
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, call) in &self.gates {
            writeln!(f, "{name} = {call}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Circuit {
        let mut c = Circuit::new();
        c.add("out1", GateCall::and2("out4", "in2")).unwrap();
        c.add("out2", GateCall::or2("out1", "out3")).unwrap();
        c.add("out3", GateCall::and2("in1", "in3")).unwrap();
        c.add("out4", GateCall::inv("in1")).unwrap();
        c
    }

    #[test]
    fn test_basic() {
        let c = example();
        assert_eq!(c.nb_gates(), 4);
        assert_eq!(c.name(2), "out3");
        assert_eq!(c.position("out4"), Some(3));
        assert_eq!(c.position("in1"), None);
        assert_eq!(c.primary_inputs(), vec!["in2", "in1", "in3"]);
    }

    #[test]
    fn test_duplicate() {
        let mut c = example();
        assert!(matches!(
            c.add("out2", GateCall::inv("in1")),
            Err(Error::DuplicateDefinition(n)) if n == "out2"
        ));
        let mut inputs = SignalTable::default();
        inputs.insert("out3".to_owned(), Vec::new());
        assert!(c.check_inputs(&inputs).is_err());
    }

    #[test]
    fn test_reorder() {
        let c = example().reordered(&[3, 2, 0, 1]);
        assert_eq!(c.name(0), "out4");
        assert_eq!(c.position("out2"), Some(3));
        assert_eq!(
            c.to_string(),
            "out4 = inv(in1)\nout3 = and2(in1, in3)\nout1 = and2(out4, in2)\nout2 = or2(out1, out3)\n"
        );
    }
}
