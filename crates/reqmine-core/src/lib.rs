pub mod classify;
pub mod error;
pub mod export;
pub mod extraction;
pub mod keywords;
pub mod model;
pub mod parsing;

use error::ReqmineError;
use extraction::PdfExtractor;
use model::{Clause, ExtractionReport, RawDocument, SkippedSection};
use parsing::title::{CapitalizedTitle, TitleResolver};
use std::path::Path;

/// Main API entry point: extract requirement clauses from a PDF file.
///
/// A path that does not exist is reported as [`ReqmineError::InputNotFound`];
/// every other acquisition failure comes back from the extractor.
pub fn extract_file<S: AsRef<str>>(
    path: &Path,
    extractor: &dyn PdfExtractor,
    keywords: &[S],
) -> Result<ExtractionReport, ReqmineError> {
    let pdf_bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReqmineError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReqmineError::Extraction(format!("cannot read {}: {}", path.display(), e))
        }
    })?;
    extract_pdf(&pdf_bytes, extractor, keywords)
}

/// Extract requirement clauses from PDF bytes.
pub fn extract_pdf<S: AsRef<str>>(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    keywords: &[S],
) -> Result<ExtractionReport, ReqmineError> {
    let text = extractor.extract_text(pdf_bytes)?;
    tracing::info!(
        backend = extractor.backend_name(),
        chars = text.len(),
        "read text from PDF"
    );
    extract_clauses(&text, keywords)
}

/// Run segmentation, clause splitting and classification over decoded text.
pub fn extract_clauses<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
) -> Result<ExtractionReport, ReqmineError> {
    extract_clauses_with(text, keywords, &CapitalizedTitle)
}

/// Like [`extract_clauses`], with a custom section title heuristic.
pub fn extract_clauses_with<S, R>(
    text: &str,
    keywords: &[S],
    titles: &R,
) -> Result<ExtractionReport, ReqmineError>
where
    S: AsRef<str>,
    R: TitleResolver + ?Sized,
{
    tracing::info!("parsing text");
    let document = RawDocument::from_text(text);
    let sections = parsing::segment_with(document.lines(), titles);

    if sections.is_empty() {
        tracing::warn!("no numbered sections found");
    } else {
        tracing::info!(sections = sections.len(), "segmented document");
    }

    let mut report = ExtractionReport {
        section_count: sections.len(),
        ..Default::default()
    };

    for (index, section) in sections.iter().enumerate() {
        let Some(split) = parsing::clauses::split(&section.body)? else {
            tracing::debug!(index, title = %section.title, "section has no number, skipped");
            report.skipped_sections.push(SkippedSection {
                index,
                title: section.title.clone(),
            });
            continue;
        };

        for (position, clause_text) in split.clauses.iter().enumerate() {
            let clause_number = split.clause_number(position + 1);
            match classify::classify(clause_text, keywords) {
                Some(requirement_type) => report.clauses.push(Clause {
                    section_title: section.title.clone(),
                    clause_number,
                    clause_text: clause_text.clone(),
                    requirement_type,
                }),
                None => {
                    tracing::debug!(clause = %clause_number, "no keyword matched, dropped");
                    report.dropped_clauses += 1;
                }
            }
        }
    }

    tracing::info!(
        clauses = report.clauses.len(),
        dropped = report.dropped_clauses,
        "classified clauses"
    );
    Ok(report)
}
