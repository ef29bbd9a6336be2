//! Representation and handling of tri-state circuits

mod circuit;
mod gates;
pub mod generators;
pub(crate) mod graph;
mod state;
pub mod stats;

pub use circuit::{Circuit, SignalTable};
pub use gates::{Gate, GateCall};
pub use state::{State, Vector};
