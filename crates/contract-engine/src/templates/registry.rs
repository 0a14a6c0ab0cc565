//! Template registry and metadata

use serde::{Deserialize, Serialize};
use shared_types::{ContractField, ContractType};

/// Information about an available template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Contract type this template renders
    pub contract_type: ContractType,
    /// Template name (the contract type code)
    pub name: String,
    /// Human-readable title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Record fields substituted into the text
    pub inputs: Vec<String>,
    /// Whether the adjustment clause table applies
    pub uses_adjustment_clause: bool,
}

const SALE_INPUTS: &[ContractField] = &[
    ContractField::OwnerName,
    ContractField::OwnerDni,
    ContractField::OwnerAddress,
    ContractField::TenantName,
    ContractField::TenantDni,
    ContractField::TenantAddress,
    ContractField::PropertyAddress,
    ContractField::MunicipalReference,
    ContractField::ParcelNumber,
    ContractField::MonthlyAmount,
    ContractField::RealtyCompany,
    ContractField::RealtorName,
    ContractField::RealtorNumber,
];

const LEASE_INPUTS: &[ContractField] = &[
    ContractField::OwnerName,
    ContractField::OwnerDni,
    ContractField::OwnerAddress,
    ContractField::TenantName,
    ContractField::TenantDni,
    ContractField::TenantEmail,
    ContractField::FamilyMembers,
    ContractField::PropertyAddress,
    ContractField::PropertyDescription,
    ContractField::MunicipalReference,
    ContractField::ParcelNumber,
    ContractField::MonthlyAmount,
    ContractField::DepositAmount,
    ContractField::StartDate,
    ContractField::ContractDuration,
    ContractField::AdjustmentType,
    ContractField::RealtyCompany,
    ContractField::RealtorName,
    ContractField::RealtorNumber,
    ContractField::Guarantor1Name,
    ContractField::Guarantor1Dni,
    ContractField::Guarantor1Address,
    ContractField::Guarantor1Email,
    ContractField::Guarantor1Job,
    ContractField::Guarantor2Name,
    ContractField::Guarantor2Dni,
    ContractField::Guarantor2Address,
    ContractField::Guarantor2Email,
    ContractField::Guarantor2Job,
];

/// Record fields a contract type substitutes into its text
pub fn template_inputs(contract_type: ContractType) -> &'static [ContractField] {
    if contract_type.is_lease() {
        LEASE_INPUTS
    } else {
        SALE_INPUTS
    }
}

/// Metadata for one contract type
pub fn get_template(contract_type: ContractType) -> TemplateInfo {
    let description = match contract_type {
        ContractType::ResidentialLease => "Contratos de alquiler para vivienda",
        ContractType::Sale => "Contratos de compra y venta",
        ContractType::CommercialLease => "Contratos de alquiler comercial",
    };

    TemplateInfo {
        contract_type,
        name: contract_type.code().to_string(),
        title: contract_type.title().to_string(),
        description: description.to_string(),
        inputs: template_inputs(contract_type)
            .iter()
            .map(|field| field.key().to_string())
            .collect(),
        uses_adjustment_clause: contract_type.is_lease(),
    }
}

/// List all available templates
pub fn list_templates() -> Vec<TemplateInfo> {
    ContractType::ALL.iter().map(|t| get_template(*t)).collect()
}
