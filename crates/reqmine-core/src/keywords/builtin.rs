use crate::error::ReqmineError;
use crate::keywords::schema::KeywordSetDef;

const DEFAULT_JSON: &str = include_str!("../../../../keywords/default.json");
const RFC2119_JSON: &str = include_str!("../../../../keywords/rfc2119.json");

/// Available predefined keyword sets.
pub const PRESETS: &[&str] = &["default", "rfc2119"];

/// Name of the preset used when no keywords are configured.
pub const DEFAULT_PRESET: &str = "default";

/// Load a predefined keyword set by name.
pub fn load_preset(name: &str) -> Result<KeywordSetDef, ReqmineError> {
    match name {
        "default" => Ok(serde_json::from_str(DEFAULT_JSON)?),
        "rfc2119" => Ok(serde_json::from_str(RFC2119_JSON)?),
        _ => Err(ReqmineError::KeywordSetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
