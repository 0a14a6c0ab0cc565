//! One contract-generation session
//!
//! A session owns the contract type (fixed at creation) and the single
//! mutable record. Choosing another contract type means starting a new
//! session.

use crate::error::{RenderError, UploadError};
use crate::export::ContractExport;
use crate::templates::{self, RenderOptions};
use crate::upload::{DecoderRegistry, UploadedFile};
use shared_types::{ContractRecord, ContractType, ExtractedFields};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSession {
    contract_type: ContractType,
    record: ContractRecord,
}

impl ContractSession {
    /// Start a session with a fresh record
    pub fn new(contract_type: ContractType) -> Self {
        Self::with_record(contract_type, ContractRecord::new())
    }

    pub fn with_record(contract_type: ContractType, record: ContractRecord) -> Self {
        Self {
            contract_type,
            record,
        }
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    pub fn record(&self) -> &ContractRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut ContractRecord {
        &mut self.record
    }

    /// Import a prior contract with the default decoders and merge what
    /// was found into the record. On error the record is left unchanged.
    pub fn import_document<R>(
        &mut self,
        file: &UploadedFile,
        read: R,
    ) -> Result<ExtractedFields, UploadError>
    where
        R: FnOnce() -> io::Result<Vec<u8>>,
    {
        self.import_document_with(&DecoderRegistry::default(), file, read)
    }

    pub fn import_document_with<R>(
        &mut self,
        decoders: &DecoderRegistry,
        file: &UploadedFile,
        read: R,
    ) -> Result<ExtractedFields, UploadError>
    where
        R: FnOnce() -> io::Result<Vec<u8>>,
    {
        let extracted = decoders.import(file, read)?;
        self.record.merge_extracted(&extracted);
        Ok(extracted)
    }

    /// Render the contract signed today
    pub fn render(&self) -> Result<String, RenderError> {
        templates::render(&self.record, self.contract_type)
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        templates::render_with(&self.record, self.contract_type, options)
    }

    /// Render and package the result for download
    pub fn export_with(&self, options: &RenderOptions) -> Result<ContractExport, RenderError> {
        let content = self.render_with(options)?;
        Ok(ContractExport::new(
            self.contract_type,
            &self.record.tenant_name,
            content,
        ))
    }

    pub fn export(&self) -> Result<ContractExport, RenderError> {
        self.export_with(&RenderOptions::default())
    }
}
