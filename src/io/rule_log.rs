//! Error counts in rule-check logs
//!
//! Logs are made of chunks, each starting with a rule line; errors are lines starting with `ERROR:`.
//! ```text
//!     Rule Apple:
//!     Line 1 message
//!     ERROR: Input is wrong
//!     Rule Peach:
//!     Line 1 message
//! ```
//! A new chunk starts at every `Rule` preceded by a non-word character, indentation included.
//! Text before the first rule is ignored. A rule appearing several times accumulates its errors.

use std::io::Read;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::error::Error;
use crate::log::targets;

const RULE: &str = "Rule";

/// Split a log before each `Rule` that follows a non-word character, dropping that character
fn rule_chunks(text: &str) -> Vec<&str> {
    let mut ret = Vec::new();
    let mut begin = 0;
    let mut prev: Option<(usize, char)> = None;
    for (pos, c) in text.char_indices() {
        if let Some((sep, p)) = prev {
            let word = p.is_alphanumeric() || p == '_';
            if !word && text[pos..].starts_with(RULE) {
                ret.push(&text[begin..sep]);
                begin = pos;
            }
        }
        prev = Some((pos, c));
    }
    ret.push(&text[begin..]);
    ret
}

/// Count the errors of each rule, in order of first appearance
pub fn count_rule_errors<R: Read>(mut r: R) -> Result<Vec<(String, usize)>, Error> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;
    let mut ret: Vec<(String, usize)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    for chunk in rule_chunks(&text) {
        let mut lines = chunk.lines();
        let errors = |l: &&str| l.starts_with("ERROR:");
        if !chunk.starts_with(RULE) {
            let lost = lines.filter(errors).count();
            if lost != 0 {
                log::debug!(target: targets::PARSE, "{lost} errors outside of a rule");
            }
            continue;
        }
        let name = lines.next().unwrap_or_default().trim().to_owned();
        let count = lines.filter(errors).count();
        let i = *index.entry(name.clone()).or_insert_with(|| {
            ret.push((name, 0));
            ret.len() - 1
        });
        ret[i].1 += count;
    }
    Ok(ret)
}

/// Format error counts, one rule per line, without a final newline
pub fn format_rule_errors(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(rule, n)| {
            if *n == 1 {
                format!("{rule} {n} ERROR")
            } else {
                format!("{rule} {n} ERRORS")
            }
        })
        .join("\n")
}
