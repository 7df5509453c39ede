use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{ClientError, ClientResult};
use crate::utils::constants::MSG_INVALID_END_DATE;

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rango de alquiler; invariante `end > start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ClientResult<Self> {
        if end <= start {
            return Err(ClientError::validation(MSG_INVALID_END_DATE));
        }
        Ok(Self { start, end })
    }

    /// Construir desde los valores de dos `<input type="date">`.
    /// `None` si alguno está vacío o no es una fecha.
    pub fn from_inputs(start: &str, end: &str) -> Option<ClientResult<Self>> {
        let start = parse_input_date(start)?;
        let end = parse_input_date(end)?;
        Some(Self::new(start, end))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Días facturables (las fechas no llevan hora, la diferencia ya es entera)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// `None` si el producto no cabe en un `Decimal`
    pub fn total_price(&self, price_per_day: Decimal) -> Option<Decimal> {
        Decimal::from(self.days()).checked_mul(price_per_day)
    }
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

pub fn to_input_value(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Primer día válido como fecha de fin
pub fn min_end_date(start: NaiveDate) -> NaiveDate {
    start + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_input_date(s).unwrap()
    }

    #[test]
    fn test_three_days_at_fifty() {
        let range = DateRange::new(date("2024-01-01"), date("2024-01-04")).unwrap();
        assert_eq!(range.days(), 3);
        assert_eq!(range.total_price(Decimal::new(5000, 2)), Some(Decimal::from(150)));
    }

    #[test]
    fn test_total_price_overflow_is_none() {
        let range = DateRange::new(date("2024-01-01"), date("2024-01-04")).unwrap();
        assert_eq!(range.total_price(Decimal::MAX), None);
    }

    #[test]
    fn test_end_must_be_after_start() {
        let d = date("2024-03-10");
        assert!(DateRange::new(d, d).unwrap_err().is_validation());
        assert!(DateRange::new(d, date("2024-03-09")).is_err());
        assert!(DateRange::new(d, min_end_date(d)).is_ok());
    }

    #[test]
    fn test_from_inputs_requires_both_dates() {
        assert!(DateRange::from_inputs("", "2024-01-04").is_none());
        assert!(DateRange::from_inputs("2024-01-01", "").is_none());
        assert!(DateRange::from_inputs("2024-01-01", "garbage").is_none());
        assert!(matches!(DateRange::from_inputs("2024-01-01", "2024-01-02"), Some(Ok(_))));
    }

    #[test]
    fn test_min_end_date_crosses_month_and_year() {
        assert_eq!(to_input_value(min_end_date(date("2024-02-29"))), "2024-03-01");
        assert_eq!(to_input_value(min_end_date(date("2024-12-31"))), "2025-01-01");
    }
}
