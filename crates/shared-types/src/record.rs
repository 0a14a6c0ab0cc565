//! Contract record: every value the templates can substitute
//!
//! All fields are plain strings and the empty string means "not set".
//! The record is created empty (or pre-filled by extraction), edited by the
//! caller and consumed read-only by the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lease duration in months for a new session
pub const DEFAULT_CONTRACT_DURATION: &str = "36";

/// Default adjustment code for a new session
pub const DEFAULT_ADJUSTMENT_TYPE: &str = "CVS_CER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractRecord {
    // Property
    pub property_address: String,
    pub property_description: String,
    pub municipal_reference: String,
    pub parcel_number: String,

    // Owner (lessor / seller)
    pub owner_name: String,
    pub owner_dni: String,
    pub owner_address: String,
    pub owner_email: String,

    // Tenant (lessee / buyer)
    pub tenant_name: String,
    pub tenant_dni: String,
    pub tenant_address: String,
    pub tenant_email: String,
    pub family_members: String,

    // Guarantors
    pub guarantor1_name: String,
    pub guarantor1_dni: String,
    pub guarantor1_address: String,
    pub guarantor1_email: String,
    pub guarantor1_job: String,
    pub guarantor2_name: String,
    pub guarantor2_dni: String,
    pub guarantor2_address: String,
    pub guarantor2_email: String,
    pub guarantor2_job: String,

    // Economic terms
    pub monthly_amount: String,
    pub deposit_amount: String,
    /// `YYYY-MM-DD` or `D/M/YYYY`
    pub start_date: String,
    /// Whole months
    pub contract_duration: String,
    /// One of `CVS_CER`, `ICL`, `IPC`, `FIJO`
    pub adjustment_type: String,

    // Broker; empty values fall back to the renderer's defaults
    pub realtor_name: String,
    pub realtor_number: String,
    pub realty_company: String,
    pub realty_address: String,
}

impl ContractRecord {
    /// A fresh session record: empty except for the default duration and
    /// adjustment type.
    pub fn new() -> Self {
        Self {
            contract_duration: DEFAULT_CONTRACT_DURATION.to_string(),
            adjustment_type: DEFAULT_ADJUSTMENT_TYPE.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ContractField) -> &str {
        match field {
            ContractField::PropertyAddress => &self.property_address,
            ContractField::PropertyDescription => &self.property_description,
            ContractField::MunicipalReference => &self.municipal_reference,
            ContractField::ParcelNumber => &self.parcel_number,
            ContractField::OwnerName => &self.owner_name,
            ContractField::OwnerDni => &self.owner_dni,
            ContractField::OwnerAddress => &self.owner_address,
            ContractField::OwnerEmail => &self.owner_email,
            ContractField::TenantName => &self.tenant_name,
            ContractField::TenantDni => &self.tenant_dni,
            ContractField::TenantAddress => &self.tenant_address,
            ContractField::TenantEmail => &self.tenant_email,
            ContractField::FamilyMembers => &self.family_members,
            ContractField::Guarantor1Name => &self.guarantor1_name,
            ContractField::Guarantor1Dni => &self.guarantor1_dni,
            ContractField::Guarantor1Address => &self.guarantor1_address,
            ContractField::Guarantor1Email => &self.guarantor1_email,
            ContractField::Guarantor1Job => &self.guarantor1_job,
            ContractField::Guarantor2Name => &self.guarantor2_name,
            ContractField::Guarantor2Dni => &self.guarantor2_dni,
            ContractField::Guarantor2Address => &self.guarantor2_address,
            ContractField::Guarantor2Email => &self.guarantor2_email,
            ContractField::Guarantor2Job => &self.guarantor2_job,
            ContractField::MonthlyAmount => &self.monthly_amount,
            ContractField::DepositAmount => &self.deposit_amount,
            ContractField::StartDate => &self.start_date,
            ContractField::ContractDuration => &self.contract_duration,
            ContractField::AdjustmentType => &self.adjustment_type,
            ContractField::RealtorName => &self.realtor_name,
            ContractField::RealtorNumber => &self.realtor_number,
            ContractField::RealtyCompany => &self.realty_company,
            ContractField::RealtyAddress => &self.realty_address,
        }
    }

    pub fn set(&mut self, field: ContractField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: ContractField) -> &mut String {
        match field {
            ContractField::PropertyAddress => &mut self.property_address,
            ContractField::PropertyDescription => &mut self.property_description,
            ContractField::MunicipalReference => &mut self.municipal_reference,
            ContractField::ParcelNumber => &mut self.parcel_number,
            ContractField::OwnerName => &mut self.owner_name,
            ContractField::OwnerDni => &mut self.owner_dni,
            ContractField::OwnerAddress => &mut self.owner_address,
            ContractField::OwnerEmail => &mut self.owner_email,
            ContractField::TenantName => &mut self.tenant_name,
            ContractField::TenantDni => &mut self.tenant_dni,
            ContractField::TenantAddress => &mut self.tenant_address,
            ContractField::TenantEmail => &mut self.tenant_email,
            ContractField::FamilyMembers => &mut self.family_members,
            ContractField::Guarantor1Name => &mut self.guarantor1_name,
            ContractField::Guarantor1Dni => &mut self.guarantor1_dni,
            ContractField::Guarantor1Address => &mut self.guarantor1_address,
            ContractField::Guarantor1Email => &mut self.guarantor1_email,
            ContractField::Guarantor1Job => &mut self.guarantor1_job,
            ContractField::Guarantor2Name => &mut self.guarantor2_name,
            ContractField::Guarantor2Dni => &mut self.guarantor2_dni,
            ContractField::Guarantor2Address => &mut self.guarantor2_address,
            ContractField::Guarantor2Email => &mut self.guarantor2_email,
            ContractField::Guarantor2Job => &mut self.guarantor2_job,
            ContractField::MonthlyAmount => &mut self.monthly_amount,
            ContractField::DepositAmount => &mut self.deposit_amount,
            ContractField::StartDate => &mut self.start_date,
            ContractField::ContractDuration => &mut self.contract_duration,
            ContractField::AdjustmentType => &mut self.adjustment_type,
            ContractField::RealtorName => &mut self.realtor_name,
            ContractField::RealtorNumber => &mut self.realtor_number,
            ContractField::RealtyCompany => &mut self.realty_company,
            ContractField::RealtyAddress => &mut self.realty_address,
        }
    }

    /// Overlay extracted values. Fields the extractor could not find are
    /// left untouched.
    pub fn merge_extracted(&mut self, extracted: &ExtractedFields) {
        for (field, value) in extracted.entries() {
            if !value.is_empty() {
                self.set(field, value);
            }
        }
    }

    pub fn has_guarantor1(&self) -> bool {
        !self.guarantor1_name.is_empty()
    }

    /// Guarantor 2 only counts when guarantor 1 is also present
    pub fn has_guarantor2(&self) -> bool {
        self.has_guarantor1() && !self.guarantor2_name.is_empty()
    }
}

/// Name of a single record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    PropertyAddress,
    PropertyDescription,
    MunicipalReference,
    ParcelNumber,
    OwnerName,
    OwnerDni,
    OwnerAddress,
    OwnerEmail,
    TenantName,
    TenantDni,
    TenantAddress,
    TenantEmail,
    FamilyMembers,
    Guarantor1Name,
    Guarantor1Dni,
    Guarantor1Address,
    Guarantor1Email,
    Guarantor1Job,
    Guarantor2Name,
    Guarantor2Dni,
    Guarantor2Address,
    Guarantor2Email,
    Guarantor2Job,
    MonthlyAmount,
    DepositAmount,
    StartDate,
    ContractDuration,
    AdjustmentType,
    RealtorName,
    RealtorNumber,
    RealtyCompany,
    RealtyAddress,
}

impl ContractField {
    pub const ALL: [ContractField; 32] = [
        ContractField::PropertyAddress,
        ContractField::PropertyDescription,
        ContractField::MunicipalReference,
        ContractField::ParcelNumber,
        ContractField::OwnerName,
        ContractField::OwnerDni,
        ContractField::OwnerAddress,
        ContractField::OwnerEmail,
        ContractField::TenantName,
        ContractField::TenantDni,
        ContractField::TenantAddress,
        ContractField::TenantEmail,
        ContractField::FamilyMembers,
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
        ContractField::MonthlyAmount,
        ContractField::DepositAmount,
        ContractField::StartDate,
        ContractField::ContractDuration,
        ContractField::AdjustmentType,
        ContractField::RealtorName,
        ContractField::RealtorNumber,
        ContractField::RealtyCompany,
        ContractField::RealtyAddress,
    ];

    /// camelCase key, identical to the serialized record field name
    pub fn key(&self) -> &'static str {
        match self {
            ContractField::PropertyAddress => "propertyAddress",
            ContractField::PropertyDescription => "propertyDescription",
            ContractField::MunicipalReference => "municipalReference",
            ContractField::ParcelNumber => "parcelNumber",
            ContractField::OwnerName => "ownerName",
            ContractField::OwnerDni => "ownerDni",
            ContractField::OwnerAddress => "ownerAddress",
            ContractField::OwnerEmail => "ownerEmail",
            ContractField::TenantName => "tenantName",
            ContractField::TenantDni => "tenantDni",
            ContractField::TenantAddress => "tenantAddress",
            ContractField::TenantEmail => "tenantEmail",
            ContractField::FamilyMembers => "familyMembers",
            ContractField::Guarantor1Name => "guarantor1Name",
            ContractField::Guarantor1Dni => "guarantor1Dni",
            ContractField::Guarantor1Address => "guarantor1Address",
            ContractField::Guarantor1Email => "guarantor1Email",
            ContractField::Guarantor1Job => "guarantor1Job",
            ContractField::Guarantor2Name => "guarantor2Name",
            ContractField::Guarantor2Dni => "guarantor2Dni",
            ContractField::Guarantor2Address => "guarantor2Address",
            ContractField::Guarantor2Email => "guarantor2Email",
            ContractField::Guarantor2Job => "guarantor2Job",
            ContractField::MonthlyAmount => "monthlyAmount",
            ContractField::DepositAmount => "depositAmount",
            ContractField::StartDate => "startDate",
            ContractField::ContractDuration => "contractDuration",
            ContractField::AdjustmentType => "adjustmentType",
            ContractField::RealtorName => "realtorName",
            ContractField::RealtorNumber => "realtorNumber",
            ContractField::RealtyCompany => "realtyCompany",
            ContractField::RealtyAddress => "realtyAddress",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ContractField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contract field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContractField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Fields recovered from a prior contract's text. Empty means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub owner_name: String,
    pub owner_dni: String,
    pub tenant_name: String,
    pub tenant_dni: String,
    pub property_address: String,
    pub municipal_reference: String,
    pub parcel_number: String,
    pub monthly_amount: String,
}

impl ExtractedFields {
    /// Record field paired with its extracted value
    pub fn entries(&self) -> [(ContractField, &str); 8] {
        [
            (ContractField::OwnerName, &self.owner_name),
            (ContractField::OwnerDni, &self.owner_dni),
            (ContractField::TenantName, &self.tenant_name),
            (ContractField::TenantDni, &self.tenant_dni),
            (ContractField::PropertyAddress, &self.property_address),
            (ContractField::MunicipalReference, &self.municipal_reference),
            (ContractField::ParcelNumber, &self.parcel_number),
            (ContractField::MonthlyAmount, &self.monthly_amount),
        ]
    }

    /// Store a value for one of the extractable fields. Returns `false` when
    /// the field is not one the extractor produces.
    pub fn set(&mut self, field: ContractField, value: impl Into<String>) -> bool {
        let slot = match field {
            ContractField::OwnerName => &mut self.owner_name,
            ContractField::OwnerDni => &mut self.owner_dni,
            ContractField::TenantName => &mut self.tenant_name,
            ContractField::TenantDni => &mut self.tenant_dni,
            ContractField::PropertyAddress => &mut self.property_address,
            ContractField::MunicipalReference => &mut self.municipal_reference,
            ContractField::ParcelNumber => &mut self.parcel_number,
            ContractField::MonthlyAmount => &mut self.monthly_amount,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn populated_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }
}
