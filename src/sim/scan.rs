use crate::error::Error;
use crate::log::targets;
use crate::network::{Circuit, SignalTable};

use super::{cycle_error, operands};

/// Resolve the gates by repeated scans of the pending list
///
/// Each pass resolves the first pending gate whose operands are all known, then restarts
/// from the front. A pass that resolves nothing means the remaining gates are stuck.
pub(super) fn run(inputs: &SignalTable, circuit: &Circuit) -> Result<SignalTable, Error> {
    let mut table = inputs.clone();
    let mut pending: Vec<usize> = (0..circuit.nb_gates()).collect();
    let mut nb_passes = 0;
    while !pending.is_empty() {
        nb_passes += 1;
        let mut resolved = None;
        for (pos, &i) in pending.iter().enumerate() {
            let call = circuit.call(i);
            if let Some(ops) = operands(&table, call) {
                resolved = Some((pos, call.gate().eval(circuit.name(i), &ops)?));
                break;
            }
        }
        let Some((pos, value)) = resolved else {
            return Err(cycle_error(circuit, pending));
        };
        let i = pending.remove(pos);
        log::trace!(
            target: targets::RESOLVE,
            "{} = {} resolved after {} skipped",
            circuit.name(i),
            circuit.call(i),
            pos
        );
        table.insert(circuit.name(i).to_owned(), value);
    }
    log::trace!(target: targets::RESOLVE, "Scan finished in {nb_passes} passes");
    Ok(table)
}
