use chrono::{Datelike, Months, NaiveDate};

/// Date handling for lease terms in the es-AR locale
pub struct LeaseCalendar;

impl LeaseCalendar {
    /// Parse a start date as entered in the record.
    ///
    /// Accepts the ISO form produced by date inputs (`2024-01-15`) and the
    /// local day-first form (`15/1/2024`, `15/01/2024`).
    pub fn parse_date(input: &str) -> Option<NaiveDate> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
            .ok()
    }

    /// Add calendar months to a date.
    ///
    /// When the day does not exist in the target month the result is clamped
    /// to that month's last day (Jan 31 + 1 month = Feb 29 in a leap year).
    /// Returns `None` only when the result falls outside chrono's range.
    pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(months))
    }

    /// Format a date as `d/m/yyyy` with no zero padding, the es-AR short form
    pub fn format_es_ar(date: NaiveDate) -> String {
        format!("{}/{}/{}", date.day(), date.month(), date.year())
    }
}
