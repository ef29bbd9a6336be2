//! Circuit and input generators

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::network::circuit::Circuit;
use crate::network::gates::GateCall;
use crate::network::state::{State, Vector};

/// Generate random values for the primary inputs of a circuit
///
/// Each bit is unknown with probability `unknown_ratio`, and 0 or 1 with equal probability otherwise.
///
/// Panics if `unknown_ratio` is not between 0 and 1.
pub fn random_inputs(
    circuit: &Circuit,
    width: usize,
    unknown_ratio: f64,
    seed: u64,
) -> Vec<(String, Vector)> {
    assert!(
        (0.0..=1.0).contains(&unknown_ratio),
        "Unknown ratio {unknown_ratio} is not a probability"
    );
    let mut rng = SmallRng::seed_from_u64(seed);
    circuit
        .primary_inputs()
        .into_iter()
        .map(|name| {
            let v = (0..width)
                .map(|_| {
                    if rng.gen_bool(unknown_ratio) {
                        State::Unknown
                    } else {
                        State::from(rng.gen::<bool>())
                    }
                })
                .collect();
            (name, v)
        })
        .collect()
}

/// Generate a random acyclic circuit, declared in a random order
///
/// Inputs are named `i0`, `i1`, ... and gates `x0`, `x1`, ...; gate `xk` only reads inputs and gates
/// with a smaller index.
pub fn random_circuit(nb_inputs: usize, nb_gates: usize, seed: u64) -> Circuit {
    assert!(nb_inputs > 0);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut gates = Vec::new();
    for k in 0..nb_gates {
        let mut pick = || {
            let i = rng.gen_range(0..nb_inputs + k);
            if i < nb_inputs {
                format!("i{i}")
            } else {
                format!("x{}", i - nb_inputs)
            }
        };
        let a = pick();
        let b = pick();
        let call = match rng.gen_range(0..3) {
            0 => GateCall::inv(&a),
            1 => GateCall::and2(&a, &b),
            _ => GateCall::or2(&a, &b),
        };
        gates.push((format!("x{k}"), call));
    }
    gates.shuffle(&mut rng);
    let mut ret = Circuit::new();
    for (name, call) in gates {
        ret.add(&name, call).expect("Generated gate names are unique");
    }
    ret
}

/// Simple generators to test functionality
pub mod testcases {
    use crate::network::circuit::Circuit;
    use crate::network::gates::GateCall;

    fn build(gates: &[(&str, GateCall)]) -> Circuit {
        let mut ret = Circuit::new();
        for (name, call) in gates {
            ret.add(name, call.clone()).expect("Test circuit names are unique");
        }
        ret
    }

    /// A one-bit full adder on inputs `a`, `b`, `cin`, with outputs `sum` and `cout`
    ///
    /// Gates are declared outputs first, so that most of them depend on later declarations.
    pub fn full_adder() -> Circuit {
        build(&[
            ("sum", GateCall::or2("s1", "s2")),
            ("cout", GateCall::or2("g", "h")),
            ("s2", GateCall::and2("np", "cin")),
            ("s1", GateCall::and2("p", "ncin")),
            ("np", GateCall::inv("p")),
            ("ncin", GateCall::inv("cin")),
            ("h", GateCall::and2("p", "cin")),
            ("p", GateCall::or2("t1", "t2")),
            ("g", GateCall::and2("a", "b")),
            ("t2", GateCall::and2("na", "b")),
            ("t1", GateCall::and2("a", "nb")),
            ("nb", GateCall::inv("b")),
            ("na", GateCall::inv("a")),
        ])
    }

    /// A chain of inverters from `in` to `c{len}`, declared from the end of the chain
    pub fn inverter_chain(len: usize) -> Circuit {
        let mut ret = Circuit::new();
        for i in (1..=len).rev() {
            let prev = if i == 1 {
                "in".to_owned()
            } else {
                format!("c{}", i - 1)
            };
            ret.add(&format!("c{i}"), GateCall::inv(&prev)).expect("Chain names are unique");
        }
        ret
    }

    /// A ring of inverters, each reading the previous one; has no valid evaluation order
    pub fn ring(len: usize) -> Circuit {
        assert!(len > 0);
        let mut ret = Circuit::new();
        for i in 0..len {
            let prev = format!("r{}", (i + len - 1) % len);
            ret.add(&format!("r{i}"), GateCall::inv(&prev)).expect("Ring names are unique");
        }
        ret
    }
}
