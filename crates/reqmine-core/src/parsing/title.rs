use regex::Regex;
use std::sync::LazyLock;

/// Leading digit run followed by a literal dot, e.g. "1.", "12.".
static TITLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.").expect("valid regex"));

/// Placeholder used when no preceding line looks like a title.
pub const NO_SECTION_TITLE: &str = "No Section Title";

/// Whether `line` opens a numbered section.
pub fn is_title_line(line: &str) -> bool {
    TITLE_NUMBER.is_match(line)
}

/// Split a leading section number off `text`.
///
/// Returns the digits and the text after the dot, or `None` when `text`
/// does not start with a number.
pub fn strip_section_number(text: &str) -> Option<(&str, &str)> {
    let caps = TITLE_NUMBER.captures(text)?;
    let number = caps.get(1)?.as_str();
    let rest = &text[caps.get(0)?.end()..];
    Some((number, rest))
}

/// Strategy that names a section from the lines preceding its numbered line.
///
/// `prev` is the line immediately before the numbered line, `prev2` the one
/// before that. Either is `None` at the start of the document.
pub trait TitleResolver {
    fn resolve(&self, prev2: Option<&str>, prev: Option<&str>) -> String;
}

impl<F> TitleResolver for F
where
    F: Fn(Option<&str>, Option<&str>) -> String,
{
    fn resolve(&self, prev2: Option<&str>, prev: Option<&str>) -> String {
        self(prev2, prev)
    }
}

/// Default heuristic: a capitalised previous line is the title; failing
/// that, a capitalised line before it starts a two-line title.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedTitle;

impl TitleResolver for CapitalizedTitle {
    fn resolve(&self, prev2: Option<&str>, prev: Option<&str>) -> String {
        let prev = prev.unwrap_or("");
        if starts_uppercase(prev) {
            return prev.to_string();
        }
        match prev2 {
            Some(prev2) if starts_uppercase(prev2) => format!("{} {}", prev2, prev),
            _ => NO_SECTION_TITLE.to_string(),
        }
    }
}

fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}
