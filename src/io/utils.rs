use std::io::{BufRead, BufReader, Read};

use crate::error::Error;
use crate::log::targets;

/// Non-empty, non-comment lines of a file with their 1-based line number
pub fn statements<R: Read>(r: R) -> Result<Vec<(usize, String)>, Error> {
    let mut ret = Vec::new();
    for (i, l) in BufReader::new(r).lines().enumerate() {
        let t = l?.trim().to_owned();
        if t.is_empty() || t.starts_with('#') {
            continue;
        }
        ret.push((i + 1, t));
    }
    log::trace!(target: targets::PARSE, "Read {} statements", ret.len());
    Ok(ret)
}

/// Split a string on a delimiter that must appear exactly once
pub fn split_once_exact<'a>(
    line: usize,
    text: &'a str,
    delimiter: char,
) -> Result<(&'a str, &'a str), Error> {
    let mut parts = text.split(delimiter);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((a.trim(), b.trim())),
        _ => Err(Error::MalformedLine {
            line,
            delimiter,
            text: text.to_owned(),
        }),
    }
}

/// Split a comma-separated list, ignoring the surrounding delimiters
pub fn split_list<'a>(text: &'a str, open: char, close: char) -> Vec<&'a str> {
    let t = text.trim();
    let t = t.trim_start_matches(open).trim_end_matches(close).trim();
    if t.is_empty() {
        Vec::new()
    } else {
        t.split(',').map(str::trim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value() {
        assert_eq!(split_once_exact(1, "a = b", '=').unwrap(), ("a", "b"));
        assert!(matches!(
            split_once_exact(4, "a = b = c", '='),
            Err(Error::MalformedLine {
                line: 4,
                delimiter: '=',
                ..
            })
        ));
        assert!(split_once_exact(1, "a b", '=').is_err());
    }

    #[test]
    fn test_list() {
        assert_eq!(split_list("[0, 1, X]", '[', ']'), vec!["0", "1", "X"]);
        assert_eq!(split_list("a,b)", '(', ')'), vec!["a", "b"]);
        assert!(split_list("[ ]", '[', ']').is_empty());
        assert_eq!(split_list("a))", '(', ')'), vec!["a"]);
        assert_eq!(split_list("[[1, 0]]", '[', ']'), vec!["1", "0"]);
    }

    #[test]
    fn test_statements() {
        let text = "# comment\n\n  a = b  \nc = d\n";
        let s = statements(text.as_bytes()).unwrap();
        assert_eq!(s, vec![(3, "a = b".to_owned()), (4, "c = d".to_owned())]);
    }
}
