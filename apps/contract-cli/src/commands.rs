//! Command implementations

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use contract_engine::{
    clause_for, import_document, list_templates, ContractExport, ContractSession, LeaseCalendar,
    RenderOptions, UploadedFile,
};
use serde_json::{json, Map, Value};
use shared_types::{ContractField, ContractRecord, ContractType};

/// MIME type to declare for a file on disk, from its extension
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

fn uploaded_file(path: &Path, mime: Option<&str>) -> Result<UploadedFile> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let declared_type = mime.unwrap_or_else(|| guess_mime(path));

    Ok(UploadedFile::new(name, declared_type, metadata.len()))
}

/// `extract`: run the field extractor over a prior contract and report
/// the fields as camelCase JSON
pub fn extract_file(path: &Path, mime: Option<&str>) -> Result<Value> {
    let file = uploaded_file(path, mime)?;
    let extracted = import_document(&file, || std::fs::read(path))?;

    let mut fields = Map::new();
    for (field, value) in extracted.entries() {
        fields.insert(field.key().to_string(), Value::String(value.to_string()));
    }

    Ok(json!({
        "file": file.name,
        "populated": extracted.populated_count(),
        "fields": fields,
    }))
}

/// Parse a `key=value` assignment for `--set`
pub fn parse_assignment(input: &str) -> Result<(ContractField, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=value, got {:?}", input))?;
    let field: ContractField = key.parse()?;
    Ok((field, value.to_string()))
}

/// Parse the `--date` signing date
pub fn parse_issue_date(input: &str) -> Result<NaiveDate, String> {
    LeaseCalendar::parse_date(input)
        .ok_or_else(|| format!("invalid date {:?}, expected YYYY-MM-DD or D/M/YYYY", input))
}

/// Where the record values of a `render` invocation come from. Layers are
/// applied in field order: session defaults, JSON, imported file, `--set`.
#[derive(Debug, Default)]
pub struct RecordSource {
    pub json: Option<String>,
    pub from: Option<PathBuf>,
    pub mime: Option<String>,
    pub assignments: Vec<(ContractField, String)>,
}

fn apply_json(record: &mut ContractRecord, json: &str) -> Result<()> {
    let value: Value = serde_json::from_str(json).context("Invalid record JSON")?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("Record JSON must be an object"))?;

    for (key, value) in object {
        let field: ContractField = key.parse()?;
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            other => bail!("Field {} must be a string, got {}", key, other),
        };
        record.set(field, text);
    }
    Ok(())
}

pub fn build_record(contract_type: ContractType, source: &RecordSource) -> Result<ContractSession> {
    let mut session = ContractSession::new(contract_type);

    if let Some(json) = &source.json {
        apply_json(session.record_mut(), json)?;
    }

    if let Some(path) = &source.from {
        let file = uploaded_file(path, source.mime.as_deref())?;
        let extracted = session.import_document(&file, || std::fs::read(path))?;
        tracing::info!(
            populated = extracted.populated_count(),
            "Merged fields from {}",
            path.display()
        );
    }

    for (field, value) in &source.assignments {
        session.record_mut().set(*field, value.clone());
    }

    Ok(session)
}

/// `render`: build the record and produce the export
pub fn render_contract(
    contract_type: ContractType,
    source: &RecordSource,
    issued_on: Option<NaiveDate>,
) -> Result<ContractExport> {
    let session = build_record(contract_type, source)?;
    let options = match issued_on {
        Some(date) => RenderOptions::issued_on(date),
        None => RenderOptions::default(),
    };
    Ok(session.export_with(&options)?)
}

/// `templates`: the registry as pretty JSON
pub fn templates_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&list_templates())?)
}

/// `clause`: adjustment clause text for a code
pub fn clause_text(code: &str) -> Result<&'static str> {
    let text = clause_for(code);
    if text.is_empty() {
        bail!("Unknown adjustment type: {} (use CVS_CER, ICL, IPC or FIJO)", code);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("previo.TXT")), "text/plain");
        assert_eq!(guess_mime(Path::new("a/b/contrato.pdf")), "application/pdf");
        assert_eq!(guess_mime(Path::new("sin_extension")), "application/octet-stream");
    }

    #[test]
    fn test_parse_assignment() {
        let (field, value) = parse_assignment("tenantName=Ana Ruiz").unwrap();
        assert_eq!(field, ContractField::TenantName);
        assert_eq!(value, "Ana Ruiz");

        let (_, value) = parse_assignment("ownerEmail=a=b@example.com").unwrap();
        assert_eq!(value, "a=b@example.com");

        assert!(parse_assignment("tenantName").is_err());
        assert!(parse_assignment("inquilino=Ana").is_err());
    }

    #[test]
    fn test_apply_json_layers_over_defaults() {
        let source = RecordSource {
            json: Some(r#"{"tenantName":"Ana Ruiz","monthlyAmount":150000,"adjustmentType":null}"#.to_string()),
            ..Default::default()
        };
        let session = build_record(ContractType::ResidentialLease, &source).unwrap();
        let record = session.record();

        assert_eq!(record.tenant_name, "Ana Ruiz");
        assert_eq!(record.monthly_amount, "150000");
        assert_eq!(record.adjustment_type, "");
        assert_eq!(record.contract_duration, "36");
    }

    #[test]
    fn test_apply_json_rejects_unknown_keys() {
        let source = RecordSource {
            json: Some(r#"{"inquilino":"Ana"}"#.to_string()),
            ..Default::default()
        };
        assert!(build_record(ContractType::Sale, &source).is_err());
    }

    #[test]
    fn test_assignments_win() {
        let source = RecordSource {
            json: Some(r#"{"tenantName":"Ana Ruiz"}"#.to_string()),
            assignments: vec![(ContractField::TenantName, "Eva Sol".to_string())],
            ..Default::default()
        };
        let session = build_record(ContractType::Sale, &source).unwrap();
        assert_eq!(session.record().tenant_name, "Eva Sol");
    }

    #[test]
    fn test_clause_text() {
        assert_eq!(clause_text("ICL").unwrap(), clause_for("ICL"));
        assert!(clause_text("OTRO").is_err());
    }

    #[test]
    fn test_parse_issue_date() {
        assert_eq!(
            parse_issue_date("2024-03-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(parse_issue_date("ayer").is_err());
    }
}
