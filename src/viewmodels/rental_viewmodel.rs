// ============================================================================
// RENTAL VIEWMODEL - Validación de fechas y precio total
// ============================================================================

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{ClientError, ClientResult};
use crate::models::rental::min_end_date;
use crate::models::{parse_input_date, to_input_value, DateRange};
use crate::utils::constants::MSG_INVALID_END_DATE;
use crate::utils::format_currency;
use crate::views::rental_form;

/// Efecto de cambiar la fecha de inicio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartDateChange {
    /// Nuevo `min` del input de fin
    pub end_min: String,
    /// La fecha de fin ya no es válida y se borra sin avisar
    pub clear_end: bool,
}

pub fn on_start_date_changed(start: &str, end: &str) -> Option<StartDateChange> {
    let start = parse_input_date(start)?;
    let clear_end = parse_input_date(end).map_or(false, |end| end <= start);
    Some(StartDateChange {
        end_min: to_input_value(min_end_date(start)),
        clear_end,
    })
}

/// Validar la fecha de fin introducida directamente.
/// Solo rechaza si ambas fechas son válidas y `end <= start`.
pub fn validate_end_date(start: &str, end: &str) -> ClientResult<()> {
    match (parse_input_date(start), parse_input_date(end)) {
        (Some(start), Some(end)) if end <= start => Err(ClientError::validation(MSG_INVALID_END_DATE)),
        _ => Ok(()),
    }
}

/// Precio por día desde el input (0 si vacío o inválido)
pub fn parse_price_per_day(value: &str) -> Decimal {
    Decimal::from_str(value.trim()).unwrap_or(Decimal::ZERO)
}

/// Total formateado, o `None` si las fechas no permiten calcularlo
/// o el importe desborda
pub fn compute_total(start: &str, end: &str, price_per_day: &str) -> Option<String> {
    let range = DateRange::from_inputs(start, end)?.ok()?;
    match range.total_price(parse_price_per_day(price_per_day)) {
        Some(total) => Some(format_currency(total)),
        None => {
            log::warn!("⚠️ [RENTAL] Precio por día fuera de rango: {}", price_per_day);
            None
        }
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// ViewModel del formulario de alquiler
#[derive(Clone, Default)]
pub struct RentalViewModel;

impl RentalViewModel {
    pub fn new() -> Self {
        Self
    }

    /// Mínimos iniciales: hoy para ambos inputs
    pub fn init_date_limits(&self) {
        let today = to_input_value(today());
        rental_form::set_date_minimums(&today, &today);
    }

    pub fn on_start_changed(&self) {
        let (start, end) = rental_form::read_dates();
        if let Some(change) = on_start_date_changed(&start, &end) {
            rental_form::set_end_min(&change.end_min);
            if change.clear_end {
                log::debug!("📅 [RENTAL] Fecha de fin {} ya no es válida, se borra", end);
                rental_form::clear_end_date();
            }
        }
    }

    pub fn on_end_changed(&self) {
        let (start, end) = rental_form::read_dates();
        if let Err(e) = validate_end_date(&start, &end) {
            log::warn!("⚠️ [RENTAL] Fecha de fin rechazada: {} <= {}", end, start);
            rental_form::reject_end_date(&e.to_string());
        }
    }

    /// Recalcular total; si no se puede, el total mostrado no cambia
    pub fn recalculate_total(&self) {
        let (start, end) = rental_form::read_dates();
        let price = rental_form::read_price_per_day();
        if let Some(total) = compute_total(&start, &end, &price) {
            rental_form::show_total(&total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_for_three_days() {
        assert_eq!(compute_total("2024-01-01", "2024-01-04", "50.00").as_deref(), Some("$150.00"));
    }

    #[test]
    fn test_total_undefined_without_dates() {
        assert_eq!(compute_total("", "2024-01-04", "50"), None);
        assert_eq!(compute_total("2024-01-01", "", "50"), None);
        assert_eq!(compute_total("2024-01-04", "2024-01-01", "50"), None);
    }

    #[test]
    fn test_total_overflow_leaves_total_undefined() {
        assert_eq!(compute_total("2024-01-01", "2024-01-04", "79228162514264337593543950335"), None);
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        assert_eq!(compute_total("2024-01-01", "2024-01-02", "").as_deref(), Some("$0.00"));
        assert_eq!(compute_total("2024-01-01", "2024-01-02", "abc").as_deref(), Some("$0.00"));
        assert_eq!(parse_price_per_day(" 19.99 "), Decimal::new(1999, 2));
    }

    #[test]
    fn test_end_date_at_or_before_start_is_rejected() {
        let start = "2024-05-10";
        assert!(validate_end_date(start, "2024-05-10").is_err());
        assert!(validate_end_date(start, "2024-05-01").is_err());
        assert!(validate_end_date(start, "2024-05-11").is_ok());
        assert!(validate_end_date(start, "2024-06-30").is_ok());
    }

    #[test]
    fn test_end_date_accepted_when_start_missing() {
        assert!(validate_end_date("", "2024-05-01").is_ok());
    }

    #[test]
    fn test_start_change_moves_end_min_and_clears_stale_end() {
        let change = on_start_date_changed("2024-05-10", "2024-05-09").unwrap();
        assert_eq!(change.end_min, "2024-05-11");
        assert!(change.clear_end);

        let keep = on_start_date_changed("2024-05-10", "2024-05-12").unwrap();
        assert!(!keep.clear_end);

        let no_end = on_start_date_changed("2024-05-10", "").unwrap();
        assert!(!no_end.clear_end);

        assert!(on_start_date_changed("", "2024-05-12").is_none());
    }
}
