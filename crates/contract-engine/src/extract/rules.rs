//! Labeled patterns used to pre-fill a record from a prior contract
//!
//! Every rule keys on a fixed lead-in phrase of the contract prose, is case
//! insensitive and tolerates up to three `*` emphasis markers around the
//! captured values. Only the first occurrence is used.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ContractField;

lazy_static! {
    /// "Entre el señor Juan Pérez, DNI 20.123.456"
    static ref OWNER_PATTERN: Regex = Regex::new(
        r"(?i)Entre el señor\s*\*{0,3}([^,*]+)\*{0,3},?\s*DNI\s*\*{0,3}([0-9.]+)"
    )
    .unwrap();

    /// "como LOCATARIO, María Gómez, DNI 27.654.321". The name has to follow
    /// the role declaration before the next comma or line break.
    static ref TENANT_PATTERN: Regex = Regex::new(
        r"(?i)como\s*\*{0,3}LOCATARIO\*{0,3},?\s*[^*,\n]*?\*{0,3}([^,*\n]+)\*{0,3},?\s*DNI\s*\*{0,3}([0-9.]+)"
    )
    .unwrap();

    /// "ubicado en Calle 12 Nº 345, de la Ciudad de Santa Rosa"
    static ref PROPERTY_ADDRESS_PATTERN: Regex =
        Regex::new(r"(?i)ubicado en\s*([^,]+)").unwrap();

    /// "Referencia Municipal: 12.345"
    static ref MUNICIPAL_REFERENCE_PATTERN: Regex =
        Regex::new(r"(?i)Referencia Municipal:\s*([0-9.]+)").unwrap();

    /// "Partida Numero: 678.910"
    static ref PARCEL_NUMBER_PATTERN: Regex =
        Regex::new(r"(?i)Partida Numero:\s*([0-9.]+)").unwrap();

    /// "la suma de PESOS CIEN MIL ($ 100.000.-)"
    static ref MONTHLY_AMOUNT_PATTERN: Regex =
        Regex::new(r"(?i)suma de\s*\*{0,3}PESOS\s*([^(]*)\(([^)]*)\)").unwrap();

    static ref RULES: Vec<ExtractionRule> = vec![
        ExtractionRule {
            name: "owner",
            pattern: &*OWNER_PATTERN,
            captures: &[(1, ContractField::OwnerName), (2, ContractField::OwnerDni)],
            normalize: trimmed,
        },
        ExtractionRule {
            name: "tenant",
            pattern: &*TENANT_PATTERN,
            captures: &[(1, ContractField::TenantName), (2, ContractField::TenantDni)],
            normalize: trimmed,
        },
        ExtractionRule {
            name: "property_address",
            pattern: &*PROPERTY_ADDRESS_PATTERN,
            captures: &[(1, ContractField::PropertyAddress)],
            normalize: trimmed,
        },
        ExtractionRule {
            name: "municipal_reference",
            pattern: &*MUNICIPAL_REFERENCE_PATTERN,
            captures: &[(1, ContractField::MunicipalReference)],
            normalize: trimmed,
        },
        ExtractionRule {
            name: "parcel_number",
            pattern: &*PARCEL_NUMBER_PATTERN,
            captures: &[(1, ContractField::ParcelNumber)],
            normalize: trimmed,
        },
        ExtractionRule {
            name: "monthly_amount",
            pattern: &*MONTHLY_AMOUNT_PATTERN,
            captures: &[(2, ContractField::MonthlyAmount)],
            normalize: amount_digits,
        },
    ];
}

/// A named pattern mapping capture groups onto record fields
pub struct ExtractionRule {
    /// Rule identifier used in logs
    pub name: &'static str,
    pub pattern: &'static Regex,
    /// (capture group, target field) pairs
    pub captures: &'static [(usize, ContractField)],
    normalize: fn(&str) -> String,
}

impl ExtractionRule {
    /// Apply the rule to `text`. Returns an empty vector when the lead-in
    /// phrase is not found.
    pub fn apply(&self, text: &str) -> Vec<(ContractField, String)> {
        let Some(captures) = self.pattern.captures(text) else {
            return Vec::new();
        };

        self.captures
            .iter()
            .map(|(group, field)| {
                let value = captures
                    .get(*group)
                    .map(|m| (self.normalize)(m.as_str()))
                    .unwrap_or_default();
                (*field, value)
            })
            .collect()
    }

    /// Fields this rule can populate
    pub fn fields(&self) -> impl Iterator<Item = ContractField> + '_ {
        self.captures.iter().map(|(_, field)| *field)
    }
}

impl std::fmt::Debug for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// All extraction rules, in application order
pub fn rules() -> &'static [ExtractionRule] {
    &RULES
}

/// Look a rule up by name
pub fn rule(name: &str) -> Option<&'static ExtractionRule> {
    RULES.iter().find(|rule| rule.name == name)
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Keep digits and the decimal comma; drops `$`, thousands dots, the
/// trailing `.-` and whitespace.
fn amount_digits(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect()
}
