//! qrschema: convert between QR code images and a JSON schema document.
//!
//! A batch of PNG QR codes serializes into one JSON array of
//! `{ "name", "data" }` entries, and that document deserializes back into
//! one QR image per entry. The schema document is the portable form; the
//! images are regenerated from it on demand.
//!
//! # Modules
//!
//! - [`schema`]: Entry and document types plus their JSON codec
//! - [`conversion`]: The batch converter and its report
//! - [`symbol`]: QR decoder/encoder collaborators
//! - [`raster`]: Image file reading and PNG writing
//! - [`error`]: Error types for qrschema operations

pub mod conversion;
pub mod error;
pub mod raster;
pub mod schema;
pub mod symbol;

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

pub use conversion::{BatchConverter, ConversionReport, ConvertOptions};
pub use error::QrSchemaError;
pub use schema::{Entry, SchemaDocument};

use symbol::DEFAULT_MODULE_SCALE;

/// The qrschema CLI application.
#[derive(Parser)]
#[command(name = "qrschema")]
#[command(version, author, about)]
#[command(override_usage = "qrschema [-s|-d] [-o PATH] [FILES]...")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Serializes (PNG) QR codes into a JSON schema.
    #[arg(short, long, conflicts_with = "deserialize")]
    serialize: bool,

    /// Deserializes JSON schema(s) into (PNG) QR codes.
    #[arg(short, long)]
    deserialize: bool,

    /// Where file(s) produced by this tool should be saved.
    ///
    /// Defaults to 'schema.json' when serializing and to the 'schema'
    /// directory when deserializing.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Pixels per QR module in written images.
    #[arg(
        long,
        env = "QRSCHEMA_SCALE",
        default_value_t = DEFAULT_MODULE_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    scale: u32,

    /// Print a conversion report to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::None)]
    report: ReportFormat,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Input files: PNG images with -s, JSON schema documents with -d.
    files: Vec<PathBuf>,
}

/// How the conversion report is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Stay silent.
    None,
    /// Human-readable summary.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Run the qrschema CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), QrSchemaError> {
    let cli = Cli::parse();

    let options = ConvertOptions {
        module_scale: cli.scale,
        ..Default::default()
    };
    let converter = BatchConverter::new(options);
    let output = cli.output.as_deref();

    let report = if cli.serialize {
        converter.serialize(&cli.files, output)?
    } else if cli.deserialize {
        converter.deserialize(&cli.files, output)?
    } else {
        println!("qrschema {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Pass -s to serialize QR images or -d to deserialize JSON schemas.");
        println!("Run 'qrschema --help' for usage information.");
        return Ok(());
    };

    print_report(&report, cli.report)
}

fn print_report(report: &ConversionReport, format: ReportFormat) -> Result<(), QrSchemaError> {
    match format {
        ReportFormat::None => {}
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
            println!("{}", json);
        }
    }
    Ok(())
}
