//! Upload boundary: file validation, format detection and decoding
//!
//! A prior contract reaches the extractor only as decoded plain text. This
//! module decides whether an uploaded file may be read at all (type
//! allow-list and size ceiling), which format it is, and which decoder turns
//! its bytes into text. PDF and Word files pass validation but have no
//! decoder, so they are rejected with a message asking for a TXT copy.

use crate::error::UploadError;
use crate::extract;
use serde::{Deserialize, Serialize};
use shared_types::ExtractedFields;
use std::collections::HashMap;
use std::io;

/// Largest accepted upload: 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted at upload time
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// File extensions accepted at upload time (compared lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

/// Metadata of a user-selected file, known before any byte is read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name including extension
    pub name: String,
    /// MIME type declared by the environment (may be empty)
    pub declared_type: String,
    /// Size in bytes
    pub size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            size,
        }
    }

    /// Lowercased extension including the dot, e.g. `.txt`
    pub fn extension(&self) -> Option<String> {
        self.name
            .rfind('.')
            .map(|idx| self.name[idx..].to_lowercase())
    }

    fn declared_type_lower(&self) -> String {
        self.declared_type.trim().to_lowercase()
    }
}

/// Document family of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Word,
}

impl DocumentFormat {
    /// Detect the format from the declared MIME type and the extension
    pub fn detect(file: &UploadedFile) -> Self {
        let mime = file.declared_type_lower();
        let extension = file.extension().unwrap_or_default();

        if mime == "application/pdf" || extension == ".pdf" {
            DocumentFormat::Pdf
        } else if mime.contains("word") || extension == ".doc" || extension == ".docx" {
            DocumentFormat::Word
        } else {
            DocumentFormat::PlainText
        }
    }
}

/// Check an upload against the allow-list and size ceiling.
///
/// Either the declared type or the extension being allowed is enough.
/// Nothing is read; on success the detected format is returned.
pub fn validate_upload(file: &UploadedFile) -> Result<DocumentFormat, UploadError> {
    let mime = file.declared_type_lower();
    let type_allowed = ALLOWED_MIME_TYPES.contains(&mime.as_str());
    let extension_allowed = file
        .extension()
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    if !type_allowed && !extension_allowed {
        return Err(UploadError::InvalidType);
    }

    if file.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size: file.size });
    }

    Ok(DocumentFormat::detect(file))
}

/// Turns the raw bytes of one document format into plain text
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<String, UploadError>;
}

/// UTF-8 text decoder. A leading byte-order mark is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextDecoder;

impl DocumentDecoder for PlainTextDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, UploadError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|e| {
            UploadError::ReadOrDecodeFailure(Some(io::Error::new(io::ErrorKind::InvalidData, e)))
        })?;
        Ok(text.to_string())
    }
}

/// Decoders available per document format
pub struct DecoderRegistry {
    decoders: HashMap<DocumentFormat, Box<dyn DocumentDecoder>>,
}

impl DecoderRegistry {
    /// Registry with no decoders at all
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register (or replace) the decoder for a format
    pub fn register(&mut self, format: DocumentFormat, decoder: Box<dyn DocumentDecoder>) {
        self.decoders.insert(format, decoder);
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.decoders.contains_key(&format)
    }

    /// Validate, read once, decode and extract.
    ///
    /// `read` is only called after validation passed and a decoder exists
    /// for the detected format.
    pub fn import<R>(&self, file: &UploadedFile, read: R) -> Result<ExtractedFields, UploadError>
    where
        R: FnOnce() -> io::Result<Vec<u8>>,
    {
        let text = self.read_text(file, read)?;
        let extracted = extract::extract(&text);
        tracing::info!(
            file = %file.name,
            populated = extracted.populated_count(),
            "Imported prior contract"
        );
        Ok(extracted)
    }

    /// Validate, read once and decode to plain text without extracting
    pub fn read_text<R>(&self, file: &UploadedFile, read: R) -> Result<String, UploadError>
    where
        R: FnOnce() -> io::Result<Vec<u8>>,
    {
        let format = validate_upload(file).map_err(|e| {
            tracing::warn!(file = %file.name, size = file.size, kind = e.kind(), "Upload rejected");
            e
        })?;

        let decoder = self.decoders.get(&format).ok_or_else(|| {
            tracing::warn!(file = %file.name, ?format, "No decoder for document format");
            UploadError::UnsupportedFormat(format)
        })?;

        let bytes = read().map_err(|e| {
            tracing::warn!(file = %file.name, error = %e, "Failed to read upload");
            UploadError::ReadOrDecodeFailure(Some(e))
        })?;

        decoder.decode(&bytes)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DocumentFormat::PlainText, Box::new(PlainTextDecoder));
        registry
    }
}

/// Import a prior contract with the default (plain text only) decoders
pub fn import_document<R>(file: &UploadedFile, read: R) -> Result<ExtractedFields, UploadError>
where
    R: FnOnce() -> io::Result<Vec<u8>>,
{
    DecoderRegistry::default().import(file, read)
}
