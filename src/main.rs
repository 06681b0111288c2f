// Boat-license scan pipeline: acquire OCR text, extract fields, persist
// outputs and the manifest.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde_json::Value;

use barque::config::{Config, OUTPUT_DIR_VAR};
use barque::models::ExtractionResult;
use barque::output::ResultWriter;
use barque::utils::LicenseError;
use barque::LicenseParser;

#[derive(Parser)]
#[command(
    name = "barque",
    about = "Extract structured fields from a scanned French boat license"
)]
struct Cli {
    /// Scanned license image to recognize (requires the `ocr` feature)
    #[arg(long)]
    image: Option<PathBuf>,

    /// Pre-recognized OCR text file; skips the OCR stage
    #[arg(long)]
    text: Option<PathBuf>,

    /// Output directory; overrides BARQUE_OUTPUT_DIR
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn print_report(result: &ExtractionResult) {
    println!("\n===============================================");
    println!("        BOAT LICENSE EXTRACTION REPORT");
    println!("===============================================\n");
    println!("  Document Type: {}", result.document_type);
    println!("  Surname: {:?}", result.surname);
    println!("  Given Names: {:?}", result.given_names);
    println!("  Birth Date: {:?}", result.birth_date);
    println!("  Birth Place: {:?}", result.birth_place);
    println!("  Issuance Date: {:?}", result.issuance_date);
    println!("  Medical Code: {:?}", result.medical_code);
    println!("  License Number: {:?}", result.license_number);
    println!("  Title Number: {:?}", result.title_number);
    if let Some(error) = &result.error {
        println!("  Extraction Fault: {}", error);
    }
}

fn acquire_text(cli: &Cli) -> Result<String, LicenseError> {
    if let Some(text_path) = &cli.text {
        log::info!("Reading pre-recognized text from {}", text_path.display());
        return Ok(std::fs::read_to_string(text_path)?);
    }

    let image_path = match &cli.image {
        Some(path) => path.clone(),
        None => Config::from_env()?.input_path(),
    };

    #[cfg(feature = "ocr")]
    {
        log::info!("Running OCR on {}", image_path.display());
        barque::processing::OcrProcessor::recognize_file(&image_path)
    }
    #[cfg(not(feature = "ocr"))]
    {
        Err(LicenseError::Config(format!(
            "built without OCR support; cannot recognize {} (pass --text instead)",
            image_path.display()
        )))
    }
}

fn run(cli: &Cli, writer: &ResultWriter) -> Result<Value, LicenseError> {
    let text = acquire_text(cli)?;
    let result = LicenseParser::new().parse(&text);
    print_report(&result);
    writer.persist(&result)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| std::env::var(OUTPUT_DIR_VAR).ok().map(PathBuf::from));
    let Some(output_dir) = output_dir else {
        eprintln!("No output directory: pass --output-dir or set {}", OUTPUT_DIR_VAR);
        process::exit(2);
    };
    let writer = ResultWriter::new(&output_dir);

    // The manifest is written whatever happens, degraded on failure.
    let (manifest, failed) = match run(&cli, &writer) {
        Ok(manifest) => (manifest, false),
        Err(err) => {
            eprintln!("Pipeline error: {}", err);
            (writer.error_manifest(&err.to_string()), true)
        }
    };

    if let Err(err) = writer.write_manifest(&manifest) {
        eprintln!("Failed to write manifest: {}", err);
        process::exit(1);
    }
    if failed {
        process::exit(1);
    }
}
