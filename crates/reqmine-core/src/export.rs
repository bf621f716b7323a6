use crate::error::ReqmineError;
use crate::model::Clause;
use std::path::Path;

/// Column headers of the exported table, in order. Matches the serialized
/// field names of [`Clause`].
pub const COLUMNS: [&str; 4] = ["section", "clause_number", "clause_text", "requirement_type"];

/// Render clauses as CSV: header row first, fields quoted only when needed.
pub fn to_csv(clauses: &[Clause]) -> Result<Vec<u8>, ReqmineError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // The header comes from the first serialized row; with no rows it is
    // written by hand.
    if clauses.is_empty() {
        writer
            .write_record(COLUMNS)
            .map_err(|e| ReqmineError::TableBuild(e.to_string()))?;
    }
    for clause in clauses {
        writer
            .serialize(clause)
            .map_err(|e| ReqmineError::TableBuild(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| ReqmineError::TableBuild(e.to_string()))
}

/// Write clauses to a CSV file at `path`.
///
/// The table is built in memory before the file is touched, so a failure
/// while building leaves no file behind.
pub fn write_csv(clauses: &[Clause], path: &Path) -> Result<(), ReqmineError> {
    let bytes = to_csv(clauses)?;
    tracing::info!(rows = clauses.len(), "built result table");

    std::fs::write(path, bytes).map_err(|e| ReqmineError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), "wrote CSV file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(number: &str, text: &str, kind: &str) -> Clause {
        Clause {
            section_title: "Scope".into(),
            clause_number: number.into(),
            clause_text: text.into(),
            requirement_type: kind.into(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "section,clause_number,clause_text,requirement_type\n");
    }

    #[test]
    fn test_serialized_header_matches_empty_header() {
        let empty = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        let full = String::from_utf8(to_csv(&[clause("1.1", "x must", "must")]).unwrap()).unwrap();
        let header = format!("{}\n", COLUMNS.join(","));
        assert_eq!(empty, header);
        assert!(full.starts_with(&header));
        assert_eq!(full.lines().count(), 2);
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let rows = [
            clause("1.1", "The system shall log errors", "shall"),
            clause("1.2", "Valves, pumps \"and\" fans must\nstop", "must"),
        ];
        let csv = String::from_utf8(to_csv(&rows).unwrap()).unwrap();
        assert_eq!(
            csv,
            "section,clause_number,clause_text,requirement_type\n\
             Scope,1.1,The system shall log errors,shall\n\
             Scope,1.2,\"Valves, pumps \"\"and\"\" fans must\nstop\",must\n"
        );
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_csv(&[clause("1", "x must", "must")], &path).unwrap_err();
        assert!(matches!(err, ReqmineError::OutputWrite { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[clause("3", " Logs should rotate. ", "should")], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "section,clause_number,clause_text,requirement_type\nScope,3, Logs should rotate. ,should\n"
        );
    }
}
