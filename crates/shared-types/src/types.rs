use std::fmt;
use std::str::FromStr;

/// Kind of contract being generated. Chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContractType {
    #[serde(rename = "locacion", alias = "residential-lease")]
    ResidentialLease,
    #[serde(rename = "compraventa", alias = "sale")]
    Sale,
    #[serde(rename = "comercial", alias = "commercial-lease")]
    CommercialLease,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [
        ContractType::ResidentialLease,
        ContractType::Sale,
        ContractType::CommercialLease,
    ];

    /// Short code used in export file names (`locacion`, `compraventa`, `comercial`)
    pub fn code(&self) -> &'static str {
        match self {
            ContractType::ResidentialLease => "locacion",
            ContractType::Sale => "compraventa",
            ContractType::CommercialLease => "comercial",
        }
    }

    /// Human-readable title shown next to the selector
    pub fn title(&self) -> &'static str {
        match self {
            ContractType::ResidentialLease => "Locación Residencial",
            ContractType::Sale => "Compraventa",
            ContractType::CommercialLease => "Locación Comercial",
        }
    }

    pub fn is_lease(&self) -> bool {
        matches!(
            self,
            ContractType::ResidentialLease | ContractType::CommercialLease
        )
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contract type: {0}")]
pub struct UnknownContractType(pub String);

impl FromStr for ContractType {
    type Err = UnknownContractType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locacion" | "residential-lease" | "residential" => Ok(ContractType::ResidentialLease),
            "compraventa" | "sale" => Ok(ContractType::Sale),
            "comercial" | "commercial-lease" | "commercial" => Ok(ContractType::CommercialLease),
            _ => Err(UnknownContractType(s.to_string())),
        }
    }
}

/// Rent adjustment methodology for lease contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AdjustmentType {
    /// Lower of 0.90 × CVS and CER (Ley 27.737)
    #[serde(rename = "CVS_CER")]
    CvsCer,
    /// Índice de Contratos de Locación (BCRA)
    #[serde(rename = "ICL")]
    Icl,
    /// Índice de Precios al Consumidor (INDEC)
    #[serde(rename = "IPC")]
    Ipc,
    /// No adjustment for the whole term
    #[serde(rename = "FIJO", alias = "FIXED")]
    Fixed,
}

impl AdjustmentType {
    pub const ALL: [AdjustmentType; 4] = [
        AdjustmentType::CvsCer,
        AdjustmentType::Icl,
        AdjustmentType::Ipc,
        AdjustmentType::Fixed,
    ];

    /// Code stored in the record's `adjustmentType` field
    pub fn code(&self) -> &'static str {
        match self {
            AdjustmentType::CvsCer => "CVS_CER",
            AdjustmentType::Icl => "ICL",
            AdjustmentType::Ipc => "IPC",
            AdjustmentType::Fixed => "FIJO",
        }
    }

    /// Parse a record code. Codes are matched exactly; `FIXED` is accepted for `FIJO`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CVS_CER" => Some(AdjustmentType::CvsCer),
            "ICL" => Some(AdjustmentType::Icl),
            "IPC" => Some(AdjustmentType::Ipc),
            "FIJO" | "FIXED" => Some(AdjustmentType::Fixed),
            _ => None,
        }
    }
}

impl fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
