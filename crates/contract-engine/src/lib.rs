//! Real-estate contract engine
//!
//! This crate provides the core of the contract generator:
//! - Field extraction from the plain text of a prior contract
//! - Rendering of residential lease, sale and commercial lease contracts
//! - Upload validation and pluggable document decoders
//! - Plain-text export naming
//!
//! The record type and selectors live in `shared-types`.

pub mod calendar;
pub mod error;
pub mod export;
pub mod extract;
pub mod session;
pub mod templates;
pub mod upload;

pub use calendar::LeaseCalendar;
pub use error::{RenderError, UploadError};
pub use export::{download_file_name, ContractExport};
pub use extract::extract;
pub use session::ContractSession;
pub use templates::{
    clause_for, list_templates, render, render_with, BrokerDefaults, RenderOptions, TemplateInfo,
};
pub use upload::{
    import_document, validate_upload, DecoderRegistry, DocumentDecoder, DocumentFormat,
    UploadedFile, MAX_UPLOAD_BYTES,
};

pub use shared_types::{AdjustmentType, ContractField, ContractRecord, ContractType, ExtractedFields};
