use crate::error::ReqmineError;
use crate::parsing::title::strip_section_number;
use fancy_regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A parenthesised number not preceded by a digit, then the shortest text up
/// to a dot that is followed by another marker, a word boundary or the end.
const ENUMERATED_CLAUSE_PATTERN: &str = r"(?s)(?<!\d)\(\d+\)\s*(.*?)\.(?=\s*(?:\(\d+\)|\b|$))";

/// fancy-regex's default backtracking budget.
const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Backtracking steps allowed per input byte. The lazy scan pushes a
/// handful of states per character it walks over.
const BACKTRACK_STEPS_PER_BYTE: usize = 16;

static ENUMERATED_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENUMERATED_CLAUSE_PATTERN).expect("valid regex"));

/// A section body broken into its number and clause texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSection {
    pub number: String,
    pub clauses: Vec<String>,
    /// True when the body had `(n)` markers; false when the whole body is one clause.
    pub enumerated: bool,
}

impl SplitSection {
    /// Clause number for the 1-based clause at `position`.
    pub fn clause_number(&self, position: usize) -> String {
        if self.enumerated {
            format!("{}.{}", self.number, position)
        } else {
            self.number.clone()
        }
    }
}

/// Split a section body into enumerated clauses.
///
/// Returns `Ok(None)` when the body does not start with a section number or
/// nothing is left once the number is removed.
pub fn split(body: &str) -> Result<Option<SplitSection>, ReqmineError> {
    let Some((number, rest)) = strip_section_number(body) else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Ok(None);
    }

    let clauses = enumerated_clauses(rest)?;
    if clauses.is_empty() {
        return Ok(Some(SplitSection {
            number: number.to_string(),
            clauses: vec![rest.to_string()],
            enumerated: false,
        }));
    }

    Ok(Some(SplitSection {
        number: number.to_string(),
        clauses,
        enumerated: true,
    }))
}

fn enumerated_clauses(text: &str) -> Result<Vec<String>, ReqmineError> {
    let mut clauses = Vec::new();
    // Every clause starts with "(", so there is nothing to scan for.
    if !text.contains('(') {
        return Ok(clauses);
    }

    let limit = text.len().saturating_mul(BACKTRACK_STEPS_PER_BYTE);
    let sized;
    let pattern = if limit <= DEFAULT_BACKTRACK_LIMIT {
        &*ENUMERATED_CLAUSE
    } else {
        sized = RegexBuilder::new(ENUMERATED_CLAUSE_PATTERN)
            .backtrack_limit(limit)
            .build()
            .map_err(|e| ReqmineError::Pattern(e.to_string()))?;
        &sized
    };

    for caps in pattern.captures_iter(text) {
        let caps = caps.map_err(|e| ReqmineError::Pattern(e.to_string()))?;
        if let Some(inner) = caps.get(1) {
            clauses.push(inner.as_str().to_string());
        }
    }
    Ok(clauses)
}
