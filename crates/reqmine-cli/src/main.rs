mod commands;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "reqmine",
    version,
    about = "Extract requirement clauses from a specification PDF into a CSV file"
)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Path to write the CSV file to
    output_path: PathBuf,

    /// Requirement keywords; replace the keyword set entirely (default: must shall should)
    keywords: Vec<String>,

    /// Predefined keyword set: default, rfc2119
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    preset: String,

    /// Custom JSON keyword set file
    #[arg(
        short = 'k',
        long = "keywords",
        value_name = "FILE",
        conflicts_with = "preset"
    )]
    keywords_file: Option<PathBuf>,

    /// Text extraction backend: pdf-extract (default) or pdftotext
    #[arg(short, long, default_value = "pdf-extract")]
    backend: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = commands::extract::run(
        cli.pdf_path,
        cli.output_path,
        cli.keywords,
        &cli.preset,
        cli.keywords_file,
        &cli.backend,
    );

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
