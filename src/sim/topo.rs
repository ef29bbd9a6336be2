use crate::error::Error;
use crate::log::targets;
use crate::network::graph::DependencyGraph;
use crate::network::{Circuit, SignalTable};

use super::{cycle_error, operands};

/// Resolve the gates in topological order
///
/// The order is computed once with Kahn's algorithm; gates left over are on or behind a cycle.
pub(super) fn run(inputs: &SignalTable, circuit: &Circuit) -> Result<SignalTable, Error> {
    let (order, remaining) = DependencyGraph::from_circuit(circuit).kahn();
    if !remaining.is_empty() {
        log::trace!(
            target: targets::RESOLVE,
            "{} gates cannot be sorted",
            remaining.len()
        );
        return Err(cycle_error(circuit, remaining));
    }
    let mut table = inputs.clone();
    for i in order {
        let call = circuit.call(i);
        let Some(ops) = operands(&table, call) else {
            // Operands are checked before sorting
            return Err(cycle_error(circuit, vec![i]));
        };
        let value = call.gate().eval(circuit.name(i), &ops)?;
        log::trace!(target: targets::RESOLVE, "{} = {}", circuit.name(i), call);
        table.insert(circuit.name(i).to_owned(), value);
    }
    Ok(table)
}

/// Order in which the gates of a circuit can be evaluated
///
/// Every gate comes after the gates it reads. Fails if the circuit has a cycle.
pub fn dependency_order(circuit: &Circuit) -> Result<Vec<usize>, Error> {
    let (order, remaining) = DependencyGraph::from_circuit(circuit).kahn();
    if remaining.is_empty() {
        Ok(order)
    } else {
        Err(cycle_error(circuit, remaining))
    }
}
