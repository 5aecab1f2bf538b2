use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use paperwork::style::DocumentStyle;

/// Renders invoice and letter PDFs from JSON data files.
///
/// Fonts must be present under `assets/fonts` relative to the `paperwork`
/// crate or provided via the `PAPERWORK_FONTS_DIR` environment variable
/// before running the commands below. Sample data files live under `demos/`.
#[derive(Parser)]
#[command(author, version, about = "Invoice and letter PDF generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an invoice PDF from a JSON data file.
    #[command(name = "generate-invoice", aliases = ["generate_invoice", "invoice"])]
    GenerateInvoice {
        #[arg(value_name = "DATA_FILE")]
        data_file: PathBuf,
        #[arg(value_name = "OUTPUT_PATH")]
        output_path: PathBuf,
    },

    /// Render a letter PDF from a JSON data file.
    #[command(name = "generate-letter", aliases = ["generate_letter", "letter"])]
    GenerateLetter {
        #[arg(value_name = "DATA_FILE")]
        data_file: PathBuf,
        #[arg(value_name = "OUTPUT_PATH")]
        output_path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let style = DocumentStyle::default();

    let result = match cli.command {
        Commands::GenerateInvoice {
            data_file,
            output_path,
        } => paperwork::generate_invoice(&data_file, &output_path, &style)
            .map(|bytes| (output_path, bytes)),
        Commands::GenerateLetter {
            data_file,
            output_path,
        } => paperwork::generate_letter(&data_file, &output_path, &style)
            .map(|bytes| (output_path, bytes)),
    };

    match result {
        Ok((output_path, bytes)) => {
            println!("Generated {} ({} bytes)", output_path.display(), bytes);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
