use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use crate::error::Error;

/// Value carried by one bit of a signal: 0, 1 or unknown (X)
///
/// Operators follow Kleene's three-valued logic: False absorbs And, True absorbs Or,
/// and any other combination involving an unknown stays unknown.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum State {
    /// Logic 0
    False,
    /// Logic 1
    True,
    /// Indeterminate value
    Unknown,
}

/// An ordered group of bits driven by the same named signal
pub type Vector = Vec<State>;

impl State {
    /// Parse a single value token
    ///
    /// Tokens are case-insensitive; any token containing an `x` is unknown.
    pub fn from_token(token: &str) -> Result<State, Error> {
        let t = token.trim().to_lowercase();
        if t.contains('x') {
            return Ok(State::Unknown);
        }
        match t.as_str() {
            "1" | "y" | "yes" | "t" | "true" | "on" => Ok(State::True),
            "0" | "n" | "no" | "f" | "false" | "off" => Ok(State::False),
            _ => Err(Error::InvalidToken(token.trim().to_owned())),
        }
    }

    /// Returns the boolean value, or None if unknown
    pub fn to_bool(self) -> Option<bool> {
        match self {
            State::False => Some(false),
            State::True => Some(true),
            State::Unknown => None,
        }
    }

    /// Returns true if the value is unknown
    pub fn is_unknown(self) -> bool {
        self == State::Unknown
    }
}

impl From<bool> for State {
    fn from(b: bool) -> State {
        if b {
            State::True
        } else {
            State::False
        }
    }
}

impl From<Option<bool>> for State {
    fn from(b: Option<bool>) -> State {
        b.map_or(State::Unknown, State::from)
    }
}

impl FromStr for State {
    type Err = Error;
    fn from_str(s: &str) -> Result<State, Error> {
        State::from_token(s)
    }
}

impl Not for State {
    type Output = State;
    fn not(self) -> State {
        match self {
            State::False => State::True,
            State::True => State::False,
            State::Unknown => State::Unknown,
        }
    }
}

impl BitAnd for State {
    type Output = State;
    fn bitand(self, rhs: State) -> State {
        use State::*;
        match (self, rhs) {
            (False, _) | (_, False) => False,
            (True, True) => True,
            _ => Unknown,
        }
    }
}

impl BitOr for State {
    type Output = State;
    fn bitor(self, rhs: State) -> State {
        use State::*;
        match (self, rhs) {
            (True, _) | (_, True) => True,
            (False, False) => False,
            _ => Unknown,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            State::False => "0",
            State::True => "1",
            State::Unknown => "X",
        };
        write!(f, "{c}")
    }
}
