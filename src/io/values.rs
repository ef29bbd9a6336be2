//! IO for signal values
//!
//! One signal per line, with its bits between brackets:
//! ```text
//!     # This is a comment
//!     in1 = [0, 1, 1]
//!     in2 = [1, X, 1]
//! ```
//! Values are 0/1 or X; the usual boolean spellings (true, no, ...) are accepted on input.

use std::io::{Read, Write};

use itertools::Itertools;

use crate::error::Error;
use crate::log::targets;
use crate::network::{SignalTable, State, Vector};

use super::utils::{split_list, split_once_exact, statements};

/// Parse the right-hand side of a value line
pub fn parse_vector(text: &str) -> Result<Vector, Error> {
    split_list(text, '[', ']')
        .into_iter()
        .map(State::from_token)
        .collect()
}

/// Read signal values, keeping the file order
pub fn read_values<R: Read>(r: R) -> Result<Vec<(String, Vector)>, Error> {
    let mut ret: Vec<(String, Vector)> = Vec::new();
    for (line, t) in statements(r)? {
        let (name, value) = split_once_exact(line, &t, '=')?;
        if ret.iter().any(|(n, _)| n == name) {
            return Err(Error::DuplicateDefinition(name.to_owned()));
        }
        ret.push((name.to_owned(), parse_vector(value)?));
    }
    log::debug!(target: targets::PARSE, "Read {} signal values", ret.len());
    Ok(ret)
}

/// Read the values of the inputs of a circuit
pub fn read_inputs<R: Read>(r: R) -> Result<SignalTable, Error> {
    Ok(read_values(r)?.into_iter().collect())
}

/// Format signal values, one per line, without a final newline
pub fn format_values(values: &[(String, Vector)]) -> String {
    values
        .iter()
        .map(|(name, v)| format!("{} = [{}]", name, v.iter().join(", ")))
        .join("\n")
}

/// Write signal values, one per line
pub fn write_values<W: Write>(w: &mut W, values: &[(String, Vector)]) -> Result<(), Error> {
    for (name, v) in values {
        writeln!(w, "{} = [{}]", name, v.iter().join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use State::*;

    #[test]
    fn test_read() {
        let example = "in1 = [0, 1, 1]\nin2 = [1, 0, 1]\n\nin3 = [yes, x, False]";
        let values = read_values(example.as_bytes()).unwrap();
        assert_eq!(
            values,
            vec![
                ("in1".to_owned(), vec![False, True, True]),
                ("in2".to_owned(), vec![True, False, True]),
                ("in3".to_owned(), vec![True, Unknown, False]),
            ]
        );
        let table = read_inputs(example.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table["in3"], vec![True, Unknown, False]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            read_values("a = [0, 1]\nb = [1, maybe]".as_bytes()),
            Err(Error::InvalidToken(t)) if t == "maybe"
        ));
        assert!(matches!(
            read_values("a = [0]\nb = c = [1]".as_bytes()),
            Err(Error::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            read_values("a = [0]\na = [1]".as_bytes()),
            Err(Error::DuplicateDefinition(n)) if n == "a"
        ));
    }

    #[test]
    fn test_write() {
        let values = vec![
            ("out1".to_owned(), vec![Unknown, False, Unknown]),
            ("out2".to_owned(), vec![Unknown, True, Unknown]),
        ];
        assert_eq!(
            format_values(&values),
            "out1 = [X, 0, X]\nout2 = [X, 1, X]"
        );
        let mut buf = Vec::new();
        write_values(&mut buf, &values).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "out1 = [X, 0, X]\nout2 = [X, 1, X]\n");
        assert_eq!(read_values(text.as_bytes()).unwrap(), values);
    }
}
