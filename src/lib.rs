//! Tri-state simulation of small combinational circuits
//!
//! A circuit is a list of named gates (inverters, 2-input And and 2-input Or) reading other named
//! signals. Each signal carries a vector of bits that may be 0, 1 or unknown (X); unknown values
//! propagate with Kleene's three-valued logic, so that `0 & X = 0` but `1 & X = X`.
//!
//! # Usage
//!
//! ```bash
//! # Simulate a circuit; prints the value of every gate output
//! trisim sim input.txt circuit.txt
//! # Show statistics about the circuit
//! trisim show circuit.txt
//! # Generate random inputs with 10% unknown bits
//! trisim gen circuit.txt -o input.txt --width 8 --unknown 0.1
//! ```
//!
//! Input files give the value of each input signal, and circuit files the gates:
//! ```text
//!     # input.txt
//!     in1 = [0, 1, X]
//!     in2 = [X, X, 1]
//!
//!     # circuit.txt
//!     out1 = and2(out2, in2)
//!     out2 = inv(in1)
//! ```
//! Gates may be declared in any order; circular dependencies are reported as errors.
//!
//! # Library
//!
//! The same can be done programmatically:
//! ```
//! # use trisim::{Circuit, GateCall, SignalTable, State};
//! let mut circuit = Circuit::new();
//! circuit.add("out1", GateCall::and2("out2", "in2")).unwrap();
//! circuit.add("out2", GateCall::inv("in1")).unwrap();
//!
//! let mut inputs = SignalTable::default();
//! inputs.insert("in1".to_owned(), vec![State::False, State::True, State::Unknown]);
//! inputs.insert("in2".to_owned(), vec![State::Unknown, State::Unknown, State::True]);
//!
//! let outputs = trisim::sim::resolve(&inputs, &circuit).unwrap();
//! assert_eq!(outputs[0].0, "out1");
//! assert_eq!(outputs[0].1, vec![State::Unknown, State::False, State::Unknown]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod io;
pub mod log;
pub mod network;
pub mod sim;

pub use error::{Error, Unsatisfiable};
pub use network::{stats, Circuit, Gate, GateCall, SignalTable, State, Vector};
