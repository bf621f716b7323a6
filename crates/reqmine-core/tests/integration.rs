//! Integration tests for the extract_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built text without decoding a
//! real PDF, so these tests need neither poppler nor sample documents.

use reqmine_core::error::ReqmineError;
use reqmine_core::export::write_csv;
use reqmine_core::extraction::PdfExtractor;
use reqmine_core::keywords::builtin::{load_preset, DEFAULT_PRESET};
use reqmine_core::{extract_clauses, extract_file, extract_pdf};

struct MockExtractor {
    text: String,
}

impl PdfExtractor for MockExtractor {
    fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ReqmineError> {
        Ok(self.text.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ReqmineError> {
        Err(ReqmineError::Extraction("corrupt xref table".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn mock(text: &str) -> MockExtractor {
    MockExtractor {
        text: text.to_string(),
    }
}

fn default_keywords() -> Vec<String> {
    load_preset(DEFAULT_PRESET).unwrap().keywords
}

const CONTROLLER_DOCUMENT: &str = "Acme Controller Specification\n\
Revision 3\n\
Scope\n\
1. (1) The controller shall boot in under 2 seconds. (2) The enclosure is grey. (3) Firmware should be signed.\n\
Safety\n\
requirements\n\
2. Operators must wear gloves at all times.\n\
appendix\n\
3. Informative notes only.\n";

// ---------------------------------------------------------------------------
// Test 1: Enumerated section with the default keyword set
// ---------------------------------------------------------------------------
#[test]
fn enumerated_section_default_keywords() {
    let text = "Intro.\n1. System shall operate continuously. (1) The system shall log errors. \
                (2) The operator must acknowledge alarms within 5 seconds.";
    let report = extract_pdf(&[], &mock(text), &default_keywords()).unwrap();

    assert_eq!(report.section_count, 1);
    assert_eq!(report.clauses.len(), 2);

    assert_eq!(report.clauses[0].clause_number, "1.1");
    assert_eq!(report.clauses[0].clause_text, "The system shall log errors");
    assert_eq!(report.clauses[0].requirement_type, "shall");

    assert_eq!(report.clauses[1].clause_number, "1.2");
    assert_eq!(
        report.clauses[1].clause_text,
        "The operator must acknowledge alarms within 5 seconds"
    );
    assert_eq!(report.clauses[1].requirement_type, "must");
}

// ---------------------------------------------------------------------------
// Test 2: Mixed document, titles, fallbacks and dropped clauses
// ---------------------------------------------------------------------------
#[test]
fn mixed_document() {
    let report = extract_pdf(&[], &mock(CONTROLLER_DOCUMENT), &default_keywords()).unwrap();

    assert_eq!(report.section_count, 3);
    // "(2) The enclosure is grey" and section 3 match nothing
    assert_eq!(report.dropped_clauses, 2);

    let rows: Vec<(&str, &str, &str)> = report
        .clauses
        .iter()
        .map(|c| {
            (
                c.section_title.as_str(),
                c.clause_number.as_str(),
                c.requirement_type.as_str(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Scope", "1.1", "shall"),
            ("Scope", "1.3", "should"),
            ("Safety requirements", "2", "must"),
        ]
    );
    // Lines are joined without a separator, so the next line runs on.
    assert_eq!(
        report.clauses[2].clause_text,
        " Operators must wear gloves at all times.appendix "
    );
}

// ---------------------------------------------------------------------------
// Test 3: Documents without numbered lines produce nothing
// ---------------------------------------------------------------------------
#[test]
fn no_sections_no_rows() {
    let text = "Release notes\nThe build must pass.\nEverything shall be green.\n";
    let report = extract_pdf(&[], &mock(text), &default_keywords()).unwrap();
    assert_eq!(report.section_count, 0);
    assert!(report.clauses.is_empty());
    assert!(report.skipped_sections.is_empty());
}

#[test]
fn empty_document() {
    let report = extract_clauses("", &default_keywords()).unwrap();
    assert_eq!(report.section_count, 0);
    assert!(report.clauses.is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Custom keywords replace the defaults and keep their order
// ---------------------------------------------------------------------------
#[test]
fn custom_keywords_replace_defaults() {
    let keywords = ["should", "boot"];
    let report = extract_pdf(&[], &mock(CONTROLLER_DOCUMENT), &keywords).unwrap();

    let types: Vec<(&str, &str)> = report
        .clauses
        .iter()
        .map(|c| (c.clause_number.as_str(), c.requirement_type.as_str()))
        .collect();
    // "shall" and "must" are no longer keywords
    assert_eq!(types, vec![("1.1", "boot"), ("1.3", "should")]);
}

#[test]
fn requirement_type_lists_keywords_in_configured_order() {
    let text = "Scope\n1. The unit must start and shall stop.";
    let report = extract_clauses(text, &["shall", "must"]).unwrap();
    assert_eq!(report.clauses[0].requirement_type, "shall / must");
}

#[test]
fn rfc2119_preset() {
    let keywords = load_preset("rfc2119").unwrap().keywords;
    let text = "Transport\n4. (1) Clients MUST NOT cache tokens. (2) Servers MAY compress.";
    let report = extract_clauses(text, &keywords).unwrap();
    assert_eq!(report.clauses[0].requirement_type, "MUST NOT / MUST");
    assert_eq!(report.clauses[1].requirement_type, "MAY");
}

// ---------------------------------------------------------------------------
// Test 5: Acquisition failures are fatal
// ---------------------------------------------------------------------------
#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract_file(
        &dir.path().join("absent.pdf"),
        &mock(CONTROLLER_DOCUMENT),
        &default_keywords(),
    )
    .unwrap_err();
    assert!(matches!(err, ReqmineError::InputNotFound { .. }));
}

#[test]
fn extractor_failure_propagates() {
    let err = extract_pdf(b"%PDF-1.7", &FailingExtractor, &default_keywords()).unwrap_err();
    assert!(matches!(err, ReqmineError::Extraction(_)));
}

#[test]
fn extract_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("spec.pdf");
    std::fs::write(&pdf, b"%PDF-1.7 placeholder").unwrap();

    let report = extract_file(&pdf, &mock(CONTROLLER_DOCUMENT), &default_keywords()).unwrap();
    assert_eq!(report.clauses.len(), 3);
}

// ---------------------------------------------------------------------------
// Test 6: Repeated runs write identical tables
// ---------------------------------------------------------------------------
#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    for path in [&first, &second] {
        let report = extract_pdf(&[], &mock(CONTROLLER_DOCUMENT), &default_keywords()).unwrap();
        write_csv(&report.clauses, path).unwrap();
    }

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert_eq!(a, b);
    assert!(String::from_utf8(a)
        .unwrap()
        .starts_with("section,clause_number,clause_text,requirement_type\n"));
}
