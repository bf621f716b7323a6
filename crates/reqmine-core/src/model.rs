use serde::Serialize;

/// Decoded text of a document, split into lines.
///
/// Lines are split on `'\n'` only; nothing is trimmed, so a trailing `'\r'`
/// stays part of its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    lines: Vec<String>,
}

impl RawDocument {
    pub fn from_text(text: &str) -> Self {
        RawDocument {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// A numbered top-level block of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// All lines of the section concatenated, starting with the numbered
    /// line itself and ending with a single trailing space.
    pub body: String,
}

/// One row of the output table.
///
/// Serialized field names and order are the columns of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    #[serde(rename = "section")]
    pub section_title: String,
    /// `"<section>.<n>"` for enumerated sub-clauses, bare `"<section>"` otherwise.
    pub clause_number: String,
    pub clause_text: String,
    /// Matched keywords joined with `" / "`, in keyword-set order.
    pub requirement_type: String,
}

/// A section dropped because its body does not start with a section number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSection {
    pub index: usize,
    pub title: String,
}

/// Outcome of running the extraction pipeline over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Requirement clauses in section order, then sub-clause order.
    pub clauses: Vec<Clause>,
    /// Number of sections the segmenter produced.
    pub section_count: usize,
    pub skipped_sections: Vec<SkippedSection>,
    /// Clauses that matched no keyword.
    pub dropped_clauses: usize,
}
