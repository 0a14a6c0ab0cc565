//! Contract templates and rendering
//!
//! Every template substitutes record fields into fixed Spanish prose.
//! Missing fields render as empty text; only malformed dates or durations
//! fail a render.

pub mod clauses;
pub mod lease;
pub mod registry;
pub mod sale;

pub use clauses::{adjustment_clause, clause_for};
pub use lease::{LeasePhrasing, COMMERCIAL, RESIDENTIAL};
pub use registry::{get_template, list_templates, TemplateInfo};

use crate::calendar::LeaseCalendar;
use crate::error::RenderError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_types::{ContractRecord, ContractType};

/// Broker named in the intervention clause when the record leaves the
/// broker fields empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerDefaults {
    pub realty_company: String,
    pub realtor_name: String,
    pub realtor_number: String,
    pub realty_address: String,
}

impl Default for BrokerDefaults {
    fn default() -> Self {
        Self {
            realty_company: "KONRAD Inversiones + Desarrollos Inmobiliarios".to_string(),
            realtor_name: "Germán E. Konrad".to_string(),
            realtor_number: "573".to_string(),
            realty_address: "calle AMEGHINO Nº 602, Santa Rosa, La Pampa".to_string(),
        }
    }
}

/// Broker values after applying record overrides to the defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broker<'a> {
    pub realty_company: &'a str,
    pub realtor_name: &'a str,
    pub realtor_number: &'a str,
    pub realty_address: &'a str,
}

impl<'a> Broker<'a> {
    pub fn resolve(record: &'a ContractRecord, defaults: &'a BrokerDefaults) -> Self {
        fn pick<'b>(value: &'b str, fallback: &'b str) -> &'b str {
            if value.is_empty() {
                fallback
            } else {
                value
            }
        }

        Self {
            realty_company: pick(&record.realty_company, &defaults.realty_company),
            realtor_name: pick(&record.realtor_name, &defaults.realtor_name),
            realtor_number: pick(&record.realtor_number, &defaults.realtor_number),
            realty_address: pick(&record.realty_address, &defaults.realty_address),
        }
    }

    /// Sentence recording the broker's participation
    fn intervention(&self) -> String {
        format!(
            "Se deja constancia que ha intervenido en la concertación del presente contrato la firma \"{}\", representada por su titular el Corredor de Comercio {}, Colegiado N° {}.",
            self.realty_company, self.realtor_name, self.realtor_number
        )
    }
}

/// Rendering parameters that do not come from the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Date printed in the signature paragraph
    pub issued_on: NaiveDate,
    pub broker: BrokerDefaults,
}

impl RenderOptions {
    pub fn issued_on(date: NaiveDate) -> Self {
        Self {
            issued_on: date,
            broker: BrokerDefaults::default(),
        }
    }

    pub fn with_broker(mut self, broker: BrokerDefaults) -> Self {
        self.broker = broker;
        self
    }
}

impl Default for RenderOptions {
    /// Signed today, in local time
    fn default() -> Self {
        Self::issued_on(chrono::Local::now().date_naive())
    }
}

/// Start and end dates of a lease, already formatted for the contract text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseTerm {
    pub start: String,
    pub end: String,
}

impl LeaseTerm {
    /// Compute the term from `start_date` and `contract_duration`.
    ///
    /// An empty start date leaves both dates empty and an empty duration
    /// leaves the end date empty. Values that are present but cannot be
    /// parsed are errors.
    pub fn from_record(record: &ContractRecord) -> Result<Self, RenderError> {
        let start_input = record.start_date.trim();
        let duration_input = record.contract_duration.trim();

        let months = if duration_input.is_empty() {
            None
        } else {
            Some(
                duration_input
                    .parse::<u32>()
                    .map_err(|_| RenderError::InvalidDuration(record.contract_duration.clone()))?,
            )
        };

        if start_input.is_empty() {
            return Ok(Self::default());
        }

        let start = LeaseCalendar::parse_date(start_input)
            .ok_or_else(|| RenderError::InvalidStartDate(record.start_date.clone()))?;

        let end = match months {
            Some(months) => {
                let end = LeaseCalendar::add_months(start, months).ok_or_else(|| {
                    RenderError::DateOutOfRange {
                        start: start.to_string(),
                        months,
                    }
                })?;
                LeaseCalendar::format_es_ar(end)
            }
            None => String::new(),
        };

        Ok(Self {
            start: LeaseCalendar::format_es_ar(start),
            end,
        })
    }
}

/// Render a contract signed today
pub fn render(record: &ContractRecord, contract_type: ContractType) -> Result<String, RenderError> {
    render_with(record, contract_type, &RenderOptions::default())
}

/// Render a contract with explicit options
pub fn render_with(
    record: &ContractRecord,
    contract_type: ContractType,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let broker = Broker::resolve(record, &options.broker);
    let issued_on = LeaseCalendar::format_es_ar(options.issued_on);

    let text = match contract_type {
        ContractType::ResidentialLease => {
            let term = LeaseTerm::from_record(record)?;
            lease::render_lease(record, &RESIDENTIAL, &term, &broker, &issued_on)
        }
        ContractType::CommercialLease => {
            let term = LeaseTerm::from_record(record)?;
            lease::render_lease(record, &COMMERCIAL, &term, &broker, &issued_on)
        }
        ContractType::Sale => sale::render_sale(record, &broker, &issued_on),
    };

    tracing::info!(
        contract_type = %contract_type,
        chars = text.chars().count(),
        "Rendered contract"
    );
    Ok(text)
}

/// Two-column signature block: rule line, names, role labels
fn signature_lines(left: &str, right: &str, labels: &str) -> String {
    format!(
        "________________________                    ________________________\n{}                        {}\n{}",
        left, right, labels
    )
}
