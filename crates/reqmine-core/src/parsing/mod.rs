pub mod clauses;
pub mod title;

use crate::model::Section;
use title::{is_title_line, CapitalizedTitle, TitleResolver};

/// Split document lines into numbered sections using the default title heuristic.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    segment_with(lines, &CapitalizedTitle)
}

/// Split document lines into numbered sections.
///
/// A section starts at a numbered line and runs up to, but excluding, the
/// next numbered line or the end of input. Its title is resolved from the
/// two lines read just before the numbered line. Text before the first
/// numbered line is introduction and is dropped. Lines are concatenated
/// without a separator and each body ends with a single space.
pub fn segment_with<S, R>(lines: &[S], resolver: &R) -> Vec<Section>
where
    S: AsRef<str>,
    R: TitleResolver + ?Sized,
{
    let mut sections = Vec::new();
    let mut prev: Option<&str> = None;
    let mut prev2: Option<&str> = None;
    let mut body = String::new();
    // Title of the section whose body is being accumulated; None while in the intro.
    let mut open_title: Option<String> = None;

    for line in lines {
        let line = line.as_ref();
        if is_title_line(line) {
            let title = resolver.resolve(prev2, prev);
            let finished = std::mem::take(&mut body);
            if let Some(closing) = open_title.replace(title) {
                sections.push(finish_section(closing, finished));
            }
        }

        prev2 = prev;
        prev = Some(line);
        body.push_str(line);
    }

    if let Some(title) = open_title {
        sections.push(finish_section(title, body));
    }

    sections
}

fn finish_section(title: String, mut body: String) -> Section {
    body.push(' ');
    Section { title, body }
}
