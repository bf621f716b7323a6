/// Separator between matched keywords in a requirement type.
pub const KEYWORD_SEPARATOR: &str = " / ";

/// Report which keywords occur in `text`.
///
/// Matching is plain, case-sensitive substring containment. Matches are
/// listed in `keywords` order, not in order of appearance, and joined with
/// `" / "`. Returns `None` when nothing matches.
pub fn classify<S: AsRef<str>>(text: &str, keywords: &[S]) -> Option<String> {
    let matched: Vec<&str> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|kw| text.contains(*kw))
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(matched.join(KEYWORD_SEPARATOR))
    }
}
