pub mod record;
pub mod types;

pub use record::{ContractField, ContractRecord, ExtractedFields, UnknownField};
pub use types::{AdjustmentType, ContractType, UnknownContractType};
