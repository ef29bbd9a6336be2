use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::Error;
use crate::network::state::{State, Vector};

/// Built-in gate functions
///
/// All gates operate bitwise on the vectors of their operands.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Gate {
    /// Inverter
    Inv,
    /// 2-input And gate
    And2,
    /// 2-input Or gate
    Or2,
}

impl Gate {
    /// All built-in gates
    pub const ALL: [Gate; 3] = [Gate::Inv, Gate::And2, Gate::Or2];

    /// Name of the gate function in circuit files
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Inv => "inv",
            Gate::And2 => "and2",
            Gate::Or2 => "or2",
        }
    }

    /// Number of operands taken by the gate
    pub fn arity(&self) -> usize {
        match self {
            Gate::Inv => 1,
            Gate::And2 | Gate::Or2 => 2,
        }
    }

    /// Compute the output vector of the gate named `name` from its operand vectors
    ///
    /// Operands of binary gates must have the same width.
    pub fn eval(&self, name: &str, operands: &[&[State]]) -> Result<Vector, Error> {
        if operands.len() != self.arity() {
            return Err(Error::Arity {
                gate: self.name().to_owned(),
                expected: self.arity(),
                found: operands.len(),
            });
        }
        let ret: Vector = match self {
            Gate::Inv => operands[0].iter().map(|s| !*s).collect(),
            Gate::And2 => zip_checked(name, operands[0], operands[1])?
                .map(|(a, b)| a & b)
                .collect(),
            Gate::Or2 => zip_checked(name, operands[0], operands[1])?
                .map(|(a, b)| a | b)
                .collect(),
        };
        Ok(ret)
    }
}

fn zip_checked<'a>(
    name: &str,
    a: &'a [State],
    b: &'a [State],
) -> Result<impl Iterator<Item = (State, State)> + 'a, Error> {
    if a.len() != b.len() {
        return Err(Error::WidthMismatch {
            name: name.to_owned(),
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().copied().zip(b.iter().copied()))
}

impl FromStr for Gate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Gate, Error> {
        let t = s.trim().to_lowercase();
        Gate::ALL
            .into_iter()
            .find(|g| g.name() == t)
            .ok_or_else(|| Error::UnknownGate(s.trim().to_owned()))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A gate function applied to named operands
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GateCall {
    gate: Gate,
    args: Box<[String]>,
}

impl GateCall {
    /// Create a gate call, checking the number of operands
    pub fn new<S: Into<String>>(
        gate: Gate,
        args: impl IntoIterator<Item = S>,
    ) -> Result<GateCall, Error> {
        let args: Box<[String]> = args.into_iter().map(Into::into).collect();
        if args.len() != gate.arity() {
            return Err(Error::Arity {
                gate: gate.name().to_owned(),
                expected: gate.arity(),
                found: args.len(),
            });
        }
        Ok(GateCall { gate, args })
    }

    /// Create an inverter
    pub fn inv(a: &str) -> GateCall {
        GateCall {
            gate: Gate::Inv,
            args: Box::new([a.to_owned()]),
        }
    }

    /// Create a 2-input And
    pub fn and2(a: &str, b: &str) -> GateCall {
        GateCall {
            gate: Gate::And2,
            args: Box::new([a.to_owned(), b.to_owned()]),
        }
    }

    /// Create a 2-input Or
    pub fn or2(a: &str, b: &str) -> GateCall {
        GateCall {
            gate: Gate::Or2,
            args: Box::new([a.to_owned(), b.to_owned()]),
        }
    }

    /// The gate function
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Obtain the names of all signals feeding this gate
    pub fn dependencies(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GateCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.gate, self.args.iter().join(", "))
    }
}
