//! Resolution of a circuit: compute the value of every gate output from the inputs
//!
//! Gates may be declared in any order. Two strategies are available and give the same results:
//! * [`Strategy::Scan`] repeatedly scans the pending gates and resolves the first one whose
//!   operands are all known;
//! * [`Strategy::Topo`] sorts the gates once with Kahn's algorithm and evaluates them in order.
//!
//! A circuit that cannot be fully resolved is an error: there are no partial results.

mod scan;
mod topo;

pub use topo::dependency_order;

use itertools::Itertools;

use crate::error::{Error, Unsatisfiable};
use crate::log::targets;
use crate::network::graph::DependencyGraph;
use crate::network::{Circuit, GateCall, SignalTable, State, Vector};

/// Order in which gates are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Repeated scan of the pending gates
    #[default]
    Scan,
    /// Explicit topological sort
    Topo,
}

/// Resolution options
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Order in which gates are resolved
    pub strategy: Strategy,
}

/// Resolve all gates of a circuit with the default options
///
/// Returns the value of each gate output, in the order the gates were declared.
pub fn resolve(inputs: &SignalTable, circuit: &Circuit) -> Result<Vec<(String, Vector)>, Error> {
    resolve_with(inputs, circuit, &Config::default())
}

/// Resolve all gates of a circuit
///
/// Returns the value of each gate output, in the order the gates were declared.
pub fn resolve_with(
    inputs: &SignalTable,
    circuit: &Circuit,
    config: &Config,
) -> Result<Vec<(String, Vector)>, Error> {
    circuit.check_inputs(inputs)?;
    if let Some(u) = find_undefined(inputs, circuit) {
        return Err(Error::Unsatisfiable(u));
    }
    let mut table = match config.strategy {
        Strategy::Scan => scan::run(inputs, circuit)?,
        Strategy::Topo => topo::run(inputs, circuit)?,
    };
    log::debug!(
        target: targets::RESOLVE,
        "Resolved {} gates from {} inputs",
        circuit.nb_gates(),
        inputs.len()
    );
    let mut ret = Vec::with_capacity(circuit.nb_gates());
    for (name, _) in circuit.gates() {
        let v = table.remove(name).unwrap_or_default();
        ret.push((name.to_owned(), v));
    }
    Ok(ret)
}

/// Operand values of a gate, if they are all known
fn operands<'a>(table: &'a SignalTable, call: &GateCall) -> Option<Vec<&'a [State]>> {
    call.dependencies()
        .iter()
        .map(|dep| table.get(dep).map(Vec::as_slice))
        .collect()
}

/// First operand, in declaration order, that is neither an input nor a gate output
fn find_undefined(inputs: &SignalTable, circuit: &Circuit) -> Option<Unsatisfiable> {
    for (name, call) in circuit.gates() {
        for dep in call.dependencies() {
            if !inputs.contains_key(dep) && circuit.position(dep).is_none() {
                return Some(Unsatisfiable::Undefined {
                    gate: name.to_owned(),
                    operand: dep.clone(),
                });
            }
        }
    }
    None
}

/// Error for a resolution that got stuck with all operands defined
///
/// Reports every stuck gate in declaration order, including those that only read a cycle.
fn cycle_error(circuit: &Circuit, mut stuck: Vec<usize>) -> Error {
    stuck.sort_unstable();
    stuck.dedup();
    let cyclic = DependencyGraph::from_circuit(circuit).cyclic_gates();
    log::debug!(
        target: targets::RESOLVE,
        "Gates on a cycle: {}",
        cyclic.iter().map(|&i| circuit.name(i)).join(", ")
    );
    let u = Unsatisfiable::Cycle(stuck.iter().map(|&i| circuit.name(i).to_owned()).collect());
    log::debug!(target: targets::RESOLVE, "Resolution failed: {u}");
    Error::Unsatisfiable(u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::generators::{random_circuit, random_inputs, testcases};
    use State::*;

    fn table(entries: &[(&str, &[State])]) -> SignalTable {
        entries
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_vec()))
            .collect()
    }

    fn example() -> Circuit {
        let mut c = Circuit::new();
        c.add("out1", GateCall::and2("out4", "in2")).unwrap();
        c.add("out2", GateCall::or2("out1", "out3")).unwrap();
        c.add("out3", GateCall::and2("in1", "in3")).unwrap();
        c.add("out4", GateCall::inv("in1")).unwrap();
        c
    }

    fn both(inputs: &SignalTable, c: &Circuit) -> Result<Vec<(String, Vector)>, Error> {
        let scan = resolve_with(inputs, c, &Config { strategy: Strategy::Scan });
        let topo = resolve_with(inputs, c, &Config { strategy: Strategy::Topo });
        match (&scan, &topo) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(Error::Unsatisfiable(a)), Err(Error::Unsatisfiable(b))) => assert_eq!(a, b),
            _ => panic!("Strategies disagree: {scan:?} vs {topo:?}"),
        }
        scan
    }

    #[test]
    fn test_known_values() {
        let inputs = table(&[
            ("in1", &[False, True, True]),
            ("in2", &[True, False, True]),
            ("in3", &[True, True, True]),
        ]);
        let res = both(&inputs, &example()).unwrap();
        let expected = vec![
            ("out1".to_owned(), vec![True, False, False]),
            ("out2".to_owned(), vec![True, True, True]),
            ("out3".to_owned(), vec![False, True, True]),
            ("out4".to_owned(), vec![True, False, False]),
        ];
        assert_eq!(res, expected);
    }

    #[test]
    fn test_unknown_values() {
        let inputs = table(&[
            ("in1", &[False, True, Unknown]),
            ("in2", &[Unknown, Unknown, True]),
            ("in3", &[Unknown, True, True]),
        ]);
        let res = both(&inputs, &example()).unwrap();
        let expected = vec![
            ("out1".to_owned(), vec![Unknown, False, Unknown]),
            ("out2".to_owned(), vec![Unknown, True, Unknown]),
            ("out3".to_owned(), vec![False, True, Unknown]),
            ("out4".to_owned(), vec![True, False, Unknown]),
        ];
        assert_eq!(res, expected);
    }

    #[test]
    fn test_circle() {
        let mut c = Circuit::new();
        c.add("out1", GateCall::inv("out2")).unwrap();
        c.add("out2", GateCall::inv("out1")).unwrap();
        let err = both(&SignalTable::default(), &c).unwrap_err();
        assert!(err.is_unsatisfiable());
        assert!(matches!(
            err,
            Error::Unsatisfiable(Unsatisfiable::Cycle(names)) if names == ["out1", "out2"]
        ));
    }

    #[test]
    fn test_cycle_downstream() {
        let mut c = Circuit::new();
        c.add("late", GateCall::and2("a", "i")).unwrap();
        c.add("ok", GateCall::inv("i")).unwrap();
        c.add("a", GateCall::inv("b")).unwrap();
        c.add("b", GateCall::or2("a", "ok")).unwrap();
        let inputs = table(&[("i", &[True])]);
        let err = both(&inputs, &c).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsatisfiable(Unsatisfiable::Cycle(names)) if names == ["late", "a", "b"]
        ));
    }

    #[test]
    fn test_undefined() {
        let mut c = example();
        c.add("out5", GateCall::or2("out2", "nowhere")).unwrap();
        let inputs = table(&[("in1", &[True]), ("in2", &[True]), ("in3", &[True])]);
        let err = both(&inputs, &c).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not resolve all gates: out5 reads nowhere, which is not generated anywhere"
        );

        // A missing primary input is reported the same way
        let inputs = table(&[("in1", &[True]), ("in3", &[True])]);
        let err = both(&inputs, &example()).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsatisfiable(Unsatisfiable::Undefined { gate, operand })
                if gate == "out1" && operand == "in2"
        ));
    }

    #[test]
    fn test_redefined_input() {
        let mut c = Circuit::new();
        c.add("in1", GateCall::inv("in1")).unwrap();
        let inputs = table(&[("in1", &[True])]);
        assert!(matches!(
            resolve(&inputs, &c),
            Err(Error::DuplicateDefinition(n)) if n == "in1"
        ));
    }

    #[test]
    fn test_width_mismatch() {
        let inputs = table(&[
            ("in1", &[False, True]),
            ("in2", &[True, False, True]),
            ("in3", &[True, True]),
        ]);
        assert!(matches!(
            resolve(&inputs, &example()),
            Err(Error::WidthMismatch { name, left: 2, right: 3 }) if name == "out1"
        ));
    }

    #[test]
    fn test_empty() {
        assert!(resolve(&SignalTable::default(), &Circuit::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_full_adder() {
        let c = testcases::full_adder();
        let a = [False, True, False, True, False, True, False, True];
        let b = [False, False, True, True, False, False, True, True];
        let cin = [False, False, False, False, True, True, True, True];
        let inputs = table(&[("a", &a), ("b", &b), ("cin", &cin)]);
        let res = both(&inputs, &c).unwrap();
        let get = |n: &str| res.iter().find(|(m, _)| m == n).unwrap().1.clone();
        for i in 0..8 {
            let total = [a[i], b[i], cin[i]].iter().filter(|s| **s == True).count();
            assert_eq!(get("sum")[i], State::from(total % 2 == 1));
            assert_eq!(get("cout")[i], State::from(total >= 2));
        }
        assert_eq!(res[0].0, "sum");
        assert_eq!(res[1].0, "cout");

        // Carry is known even when the sum is not
        let inputs = table(&[("a", &[True]), ("b", &[True]), ("cin", &[Unknown])]);
        let res = both(&inputs, &c).unwrap();
        assert_eq!(res[0].1, vec![Unknown]);
        assert_eq!(res[1].1, vec![True]);
    }

    #[test]
    fn test_long_chain() {
        let c = testcases::inverter_chain(101);
        let inputs = table(&[("in", &[True, Unknown, False])]);
        let res = both(&inputs, &c).unwrap();
        assert_eq!(res[0].0, "c101");
        assert_eq!(res[0].1, vec![False, Unknown, True]);
        assert_eq!(res[100].1, vec![False, Unknown, True]);
    }

    #[test]
    fn test_ring() {
        let err = both(&SignalTable::default(), &testcases::ring(4)).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsatisfiable(Unsatisfiable::Cycle(names)) if names.len() == 4
        ));
    }

    #[test]
    fn test_declaration_order() {
        let inputs = table(&[
            ("in1", &[False, True, Unknown]),
            ("in2", &[Unknown, Unknown, True]),
            ("in3", &[Unknown, True, True]),
        ]);
        let reference = resolve(&inputs, &example()).unwrap();
        let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 3, 0, 1], [1, 0, 3, 2], [1, 3, 0, 2]];
        for order in orders {
            let c = example().reordered(&order);
            let res = both(&inputs, &c).unwrap();
            // Results follow the declaration order of the circuit they came from
            for (k, &i) in order.iter().enumerate() {
                assert_eq!(res[k], reference[i]);
            }
        }
    }

    #[test]
    fn test_random() {
        for seed in 0..20 {
            let c = random_circuit(4, 30, seed);
            let inputs: SignalTable = random_inputs(&c, 8, 0.2, seed).into_iter().collect();
            let res = both(&inputs, &c).unwrap();
            assert_eq!(res.len(), 30);
            for (name, v) in &res {
                assert_eq!(v.len(), 8, "{name}");
            }
            // The sorted circuit gives the same values
            let (order, _) = DependencyGraph::from_circuit(&c).kahn();
            let sorted = c.reordered(&order);
            let mut res_sorted = resolve(&inputs, &sorted).unwrap();
            let mut res = res;
            res.sort();
            res_sorted.sort();
            assert_eq!(res, res_sorted);
        }
    }
}
