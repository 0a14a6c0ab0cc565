//! Error types for document import and contract rendering

use crate::upload::DocumentFormat;
use thiserror::Error;

/// Upload boundary errors.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Solo se permiten archivos PDF, DOC, DOCX o TXT")]
    InvalidType,

    #[error("El archivo no puede ser mayor a 10MB")]
    TooLarge { size: u64 },

    #[error("{}", unsupported_message(.0))]
    UnsupportedFormat(DocumentFormat),

    #[error("Error al procesar el archivo. Verifica que sea un documento válido y legible.")]
    ReadOrDecodeFailure(#[source] Option<std::io::Error>),
}

fn unsupported_message(format: &DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Pdf => {
            "Los archivos PDF requieren procesamiento especial. Por favor, convierte el archivo a TXT."
        }
        DocumentFormat::Word => {
            "Los archivos Word requieren procesamiento especial. Por favor, convierte el archivo a TXT."
        }
        DocumentFormat::PlainText => {
            "Este tipo de archivo requiere procesamiento especial. Por favor, convierte el archivo a TXT."
        }
    }
}

impl UploadError {
    /// Stable identifier for logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::InvalidType => "invalid_type",
            UploadError::TooLarge { .. } => "too_large",
            UploadError::UnsupportedFormat(_) => "unsupported_format",
            UploadError::ReadOrDecodeFailure(_) => "read_or_decode_failure",
        }
    }
}

/// Rendering errors. Missing fields are never an error; only values that
/// are present but cannot be interpreted are.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid start date: {0:?} (expected YYYY-MM-DD or D/M/YYYY)")]
    InvalidStartDate(String),

    #[error("Invalid contract duration: {0:?} (expected a whole number of months)")]
    InvalidDuration(String),

    #[error("End date out of range for start {start} plus {months} months")]
    DateOutOfRange { start: String, months: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_fixed() {
        assert_eq!(
            UploadError::InvalidType.to_string(),
            "Solo se permiten archivos PDF, DOC, DOCX o TXT"
        );
        assert_eq!(
            UploadError::TooLarge { size: 12 * 1024 * 1024 }.to_string(),
            "El archivo no puede ser mayor a 10MB"
        );
        assert!(UploadError::UnsupportedFormat(DocumentFormat::Pdf)
            .to_string()
            .starts_with("Los archivos PDF"));
        assert!(UploadError::UnsupportedFormat(DocumentFormat::Word)
            .to_string()
            .starts_with("Los archivos Word"));
        assert_eq!(
            UploadError::ReadOrDecodeFailure(None).to_string(),
            "Error al procesar el archivo. Verifica que sea un documento válido y legible."
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UploadError::TooLarge { size: 0 }.kind(), "too_large");
        assert_eq!(
            UploadError::UnsupportedFormat(DocumentFormat::Word).kind(),
            "unsupported_format"
        );
    }
}
