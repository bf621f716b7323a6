use serde::{Deserialize, Serialize};

/// A named, ordered list of requirement keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Order here is the order matches are reported in.
    pub keywords: Vec<String>,
}

impl KeywordSetDef {
    /// An ad-hoc keyword set, e.g. from the command line.
    pub fn custom(keywords: Vec<String>) -> Self {
        KeywordSetDef {
            name: "custom".into(),
            description: None,
            keywords,
        }
    }
}
