//! Plain-text export of a rendered contract

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::ContractType;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// File name prefix for every export
pub const EXPORT_PREFIX: &str = "contrato";

/// A rendered contract ready to be saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractExport {
    pub file_name: String,
    /// Exactly the rendered text
    pub content: String,
}

impl ContractExport {
    pub fn new(contract_type: ContractType, tenant_name: &str, content: String) -> Self {
        Self {
            file_name: download_file_name(contract_type, tenant_name),
            content,
        }
    }

    /// Write the export into `dir`, returning the full path
    pub fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.content.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = self.content.len(), "Saved contract");
        Ok(path)
    }
}

/// `contrato_<type code>_<tenant name with whitespace runs as "_">.txt`
pub fn download_file_name(contract_type: ContractType, tenant_name: &str) -> String {
    format!(
        "{}_{}_{}.txt",
        EXPORT_PREFIX,
        contract_type.code(),
        WHITESPACE_RUN.replace_all(tenant_name, "_")
    )
}
