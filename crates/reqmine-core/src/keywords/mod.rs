pub mod builtin;
pub mod schema;

use crate::error::ReqmineError;
use schema::KeywordSetDef;
use std::path::Path;

/// Load a keyword set from a JSON file.
pub fn load_keyword_set(path: &Path) -> Result<KeywordSetDef, ReqmineError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReqmineError::KeywordSetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_keyword_set(&content, path)
}

/// Parse a keyword set from a JSON string.
pub fn parse_keyword_set(json: &str, source: &Path) -> Result<KeywordSetDef, ReqmineError> {
    let set: KeywordSetDef =
        serde_json::from_str(json).map_err(|e| ReqmineError::KeywordSetLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_keyword_set(&set)?;
    Ok(set)
}

/// Validate that a keyword set is usable for classification.
pub fn validate_keyword_set(set: &KeywordSetDef) -> Result<(), ReqmineError> {
    if set.keywords.is_empty() {
        return Err(ReqmineError::KeywordSetInvalid(format!(
            "keyword set '{}' has no keywords",
            set.name
        )));
    }

    for (i, kw) in set.keywords.iter().enumerate() {
        if kw.is_empty() {
            return Err(ReqmineError::KeywordSetInvalid(format!(
                "keyword set '{}' contains an empty keyword",
                set.name
            )));
        }
        if set.keywords[..i].contains(kw) {
            return Err(ReqmineError::KeywordSetInvalid(format!(
                "keyword set '{}' lists '{}' more than once",
                set.name, kw
            )));
        }
    }

    Ok(())
}
