use reqmine_core::error::ReqmineError;
use reqmine_core::extraction;
use reqmine_core::keywords::builtin;
use reqmine_core::keywords::schema::KeywordSetDef;
use std::path::{Path, PathBuf};

pub fn run(
    pdf_file: PathBuf,
    output_file: PathBuf,
    keywords: Vec<String>,
    preset: &str,
    keywords_file: Option<PathBuf>,
    backend: &str,
) -> Result<(), ReqmineError> {
    let keyword_set = resolve_keywords(keywords, preset, keywords_file.as_deref())?;
    tracing::info!(
        set = %keyword_set.name,
        keywords = ?keyword_set.keywords,
        "using keyword set"
    );

    let extractor = extraction::backend(backend)?;
    let report = reqmine_core::extract_file(&pdf_file, extractor.as_ref(), &keyword_set.keywords)?;
    reqmine_core::export::write_csv(&report.clauses, &output_file)?;

    eprintln!(
        "Extracted {} clause(s) from {} section(s), written to {}",
        report.clauses.len(),
        report.section_count,
        output_file.display()
    );
    if !report.skipped_sections.is_empty() {
        eprintln!(
            "  {} section(s) skipped without a section number",
            report.skipped_sections.len()
        );
    }

    Ok(())
}

/// Keywords given on the command line replace any configured set outright.
fn resolve_keywords(
    keywords: Vec<String>,
    preset: &str,
    keywords_file: Option<&Path>,
) -> Result<KeywordSetDef, ReqmineError> {
    if !keywords.is_empty() {
        return Ok(KeywordSetDef::custom(keywords));
    }
    match keywords_file {
        Some(path) => reqmine_core::keywords::load_keyword_set(path),
        None => builtin::load_preset(preset),
    }
}
