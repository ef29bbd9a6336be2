//! IO for circuit files
//!
//! These files describe the circuit with one gate per line:
//! ```text
//!     # This is a comment
//!     out1 = and2(out4, in2)
//!     out2 = or2(out1, out3)
//!     out3 = and2(in1, in3)
//!     out4 = inv(in1)
//! ```
//! Gates may use signals declared further down the file.

use std::io::{Read, Write};

use crate::error::Error;
use crate::log::targets;
use crate::network::{Circuit, Gate, GateCall};

use super::utils::{split_list, split_once_exact, statements};

/// Parse a gate call such as `and2(a, b)`
pub fn parse_call(line: usize, text: &str) -> Result<GateCall, Error> {
    let (func, args) = split_once_exact(line, text, '(')?;
    let gate: Gate = func.parse()?;
    GateCall::new(gate, split_list(args, '(', ')'))
}

/// Read a circuit, keeping the declaration order of the gates
pub fn read_circuit<R: Read>(r: R) -> Result<Circuit, Error> {
    let mut ret = Circuit::new();
    for (line, t) in statements(r)? {
        let (name, call) = split_once_exact(line, &t, '=')?;
        ret.add(name, parse_call(line, call)?)?;
    }
    log::debug!(target: targets::PARSE, "Read {} gates", ret.nb_gates());
    Ok(ret)
}

/// Write a circuit, one gate per line
pub fn write_circuit<W: Write>(w: &mut W, circuit: &Circuit) -> Result<(), Error> {
    for (name, call) in circuit.gates() {
        writeln!(w, "{name} = {call}")?;
    }
    Ok(())
}
