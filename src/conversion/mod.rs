//! Batch conversion between QR images and schema documents.
//!
//! The two directions treat failures differently:
//!
//! - **Serialize** (images → document) drops any image that cannot be read
//!   or decoded and keeps going. An image without a QR symbol is not a
//!   failure; it becomes an entry with an empty payload.
//! - **Deserialize** (documents → images) drops any document that cannot
//!   be read or parsed, but an entry that cannot be rendered aborts the run
//!   with [`QrSchemaError::EncodeFailure`]. Images written before the
//!   failing entry stay on disk.
//!
//! Dropped inputs never surface as errors. They are recorded in the
//! returned [`ConversionReport`].

pub mod report;

pub use report::{
    ConversionCounts, ConversionIssue, ConversionIssueCode, ConversionReport, ConversionSeverity,
    Direction,
};

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::QrSchemaError;
use crate::raster;
use crate::schema::{io_json, Entry, SchemaDocument};
use crate::symbol::{QrDecoder, QrEncoder, SymbolDecoder, SymbolEncoder, DEFAULT_MODULE_SCALE};

/// Document written by `serialize` when no output is given.
pub const DEFAULT_DOCUMENT_PATH: &str = "schema.json";

/// Directory written by `deserialize` when no output is given.
pub const DEFAULT_IMAGE_DIR: &str = "schema";

/// Options for batch conversion.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Destination document for `serialize` when none is passed explicitly.
    pub document_path: PathBuf,
    /// Destination directory for `deserialize` when none is passed explicitly.
    pub image_dir: PathBuf,
    /// Pixels per QR module in written images.
    pub module_scale: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            module_scale: DEFAULT_MODULE_SCALE,
        }
    }
}

/// Drives one batch conversion in either direction.
///
/// Inputs are processed one at a time in the order given. The symbol
/// collaborators are generic so tests and embedders can substitute their
/// own.
#[derive(Clone, Debug)]
pub struct BatchConverter<D = QrDecoder, E = QrEncoder> {
    options: ConvertOptions,
    decoder: D,
    encoder: E,
}

impl BatchConverter {
    /// Create a converter backed by the default QR decoder and encoder.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_collaborators(options, QrDecoder, QrEncoder)
    }
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl<D: SymbolDecoder, E: SymbolEncoder> BatchConverter<D, E> {
    pub fn with_collaborators(options: ConvertOptions, decoder: D, encoder: E) -> Self {
        Self {
            options,
            decoder,
            encoder,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Decode images into a schema document without writing anything.
    ///
    /// Entries keep the order of `inputs`. Unusable images are left out
    /// and recorded as warnings in the report.
    pub fn decode_images<P: AsRef<Path>>(
        &self,
        inputs: &[P],
    ) -> (SchemaDocument, ConversionReport) {
        let mut report = ConversionReport::new(Direction::Serialize);
        report.counts.inputs = inputs.len();

        let mut document = SchemaDocument::new();
        for input in inputs {
            let path = input.as_ref();
            match self.decode_image(path) {
                Ok(payload) => {
                    if payload.is_none() {
                        let message = format!(
                            "no QR code found in {}; stored an empty payload",
                            path.display()
                        );
                        report.add(
                            ConversionIssue::info(ConversionIssueCode::EmptyPayload, message)
                                .at(path),
                        );
                    }
                    document.push(Entry::new(entry_name(path), payload.unwrap_or_default()));
                }
                Err(err) => report.add(skip_issue(path, &err)),
            }
        }

        report.counts.entries = document.len();
        (document, report)
    }

    /// Decode images and write the resulting schema document.
    ///
    /// Writes to `output`, or to the configured document path when `None`.
    ///
    /// # Errors
    /// Only failures writing the destination document are returned.
    pub fn serialize<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: Option<&Path>,
    ) -> Result<ConversionReport, QrSchemaError> {
        let destination = output.unwrap_or(self.options.document_path.as_path());
        let (document, mut report) = self.decode_images(inputs);

        io_json::write_schema_json(destination, &document)?;
        report.destination = Some(destination.to_path_buf());

        Ok(report)
    }

    /// Read schema documents and concatenate their entries.
    ///
    /// Entries keep document order, then entry order within each document.
    /// A document that cannot be read or parsed contributes nothing.
    pub fn load_documents<P: AsRef<Path>>(
        &self,
        inputs: &[P],
    ) -> (SchemaDocument, ConversionReport) {
        let mut report = ConversionReport::new(Direction::Deserialize);
        report.counts.inputs = inputs.len();

        let mut entries = SchemaDocument::new();
        for input in inputs {
            let path = input.as_ref();
            match io_json::read_schema_json(path) {
                Ok(document) => entries.extend(document),
                Err(err) => report.add(skip_issue(path, &err)),
            }
        }

        report.counts.entries = entries.len();
        (entries, report)
    }

    /// Read schema documents and write one PNG per entry.
    ///
    /// Images go to `output`, or to the configured image directory when
    /// `None`. The directory is created even if there is nothing to write.
    ///
    /// # Errors
    /// Fails on the first entry that cannot be rendered or written; the
    /// remaining entries are not processed.
    pub fn deserialize<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: Option<&Path>,
    ) -> Result<ConversionReport, QrSchemaError> {
        let destination = output.unwrap_or(self.options.image_dir.as_path());
        let (entries, mut report) = self.load_documents(inputs);

        self.write_images(&entries, destination, &mut report)?;
        report.destination = Some(destination.to_path_buf());

        Ok(report)
    }

    /// Render every entry of `document` into `dir/<entry.name>`.
    ///
    /// A later entry with the same name overwrites the earlier image.
    pub fn write_images(
        &self,
        document: &SchemaDocument,
        dir: &Path,
        report: &mut ConversionReport,
    ) -> Result<(), QrSchemaError> {
        fs::create_dir_all(dir).map_err(QrSchemaError::Io)?;

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in document {
            check_entry_name(&entry.name)?;

            let image = self
                .encoder
                .encode(&entry.data, self.options.module_scale)
                .map_err(|source| QrSchemaError::EncodeFailure {
                    name: entry.name.clone(),
                    source,
                })?;

            let path = dir.join(&entry.name);
            raster::write_png(&path, &image)?;
            report.counts.written += 1;

            if !seen.insert(entry.name.as_str()) {
                let message = format!(
                    "'{}' overwrote an earlier entry with the same name",
                    entry.name
                );
                report.add(
                    ConversionIssue::info(ConversionIssueCode::NameCollision, message).at(path),
                );
            }
        }

        Ok(())
    }

    fn decode_image(&self, path: &Path) -> Result<Option<String>, QrSchemaError> {
        let image = raster::read_luma(path)?;
        self.decoder
            .decode(image.as_raw(), image.width(), image.height())
            .map_err(|source| QrSchemaError::SymbolDecode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// The base name of `path`, used as the entry name.
fn entry_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Entry names must be a single plain file name so images land inside the
/// destination directory.
fn check_entry_name(name: &str) -> Result<(), QrSchemaError> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single_normal && !name.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(QrSchemaError::InvalidEntryName {
            name: name.to_string(),
        })
    }
}

/// Map a per-item read failure to the warning that records the drop.
fn skip_issue(path: &Path, err: &QrSchemaError) -> ConversionIssue {
    let code = match err {
        QrSchemaError::InvalidImage { .. } => ConversionIssueCode::InvalidImage,
        QrSchemaError::SymbolDecode { .. } => ConversionIssueCode::InvalidRaster,
        QrSchemaError::MalformedDocument { .. } => ConversionIssueCode::MalformedDocument,
        _ => ConversionIssueCode::UnreadableInput,
    };

    ConversionIssue::warning(code, err.to_string()).at(path)
}
