//! Read and write circuits and signal values to files

mod circuit;
pub mod rule_log;
mod utils;
mod values;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use circuit::{parse_call, read_circuit, write_circuit};
pub use values::{format_values, parse_vector, read_inputs, read_values, write_values};

use crate::error::Error;
use crate::network::{Circuit, SignalTable, Vector};

/// Read a circuit from a file
pub fn read_circuit_file(path: &Path) -> Result<Circuit, Error> {
    read_circuit(File::open(path)?)
}

/// Write a circuit to a file
pub fn write_circuit_file(path: &Path, circuit: &Circuit) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    write_circuit(&mut w, circuit)?;
    w.flush()?;
    Ok(())
}

/// Read input values from a file
pub fn read_input_file(path: &Path) -> Result<SignalTable, Error> {
    read_inputs(File::open(path)?)
}

/// Write signal values to a file
pub fn write_values_file(path: &Path, values: &[(String, Vector)]) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    write_values(&mut w, values)?;
    w.flush()?;
    Ok(())
}

/// Count the errors of each rule in a log file
pub fn read_rule_log_file(path: &Path) -> Result<Vec<(String, usize)>, Error> {
    rule_log::count_rule_errors(File::open(path)?)
}
