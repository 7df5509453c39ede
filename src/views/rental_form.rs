// ============================================================================
// RENTAL FORM VIEW - Inputs de fecha y precio total
// ============================================================================

use crate::dom::{blocking_alert, get_element_by_id, get_input_by_id, set_text_content};
use crate::utils::constants::{END_DATE_ID, PRICE_PER_DAY_ID, START_DATE_ID, TOTAL_PRICE_ID};

/// (inicio, fin) tal como están en los inputs; "" si no existen
pub fn read_dates() -> (String, String) {
    (input_value(START_DATE_ID), input_value(END_DATE_ID))
}

pub fn read_price_per_day() -> String {
    input_value(PRICE_PER_DAY_ID)
}

fn input_value(id: &str) -> String {
    get_input_by_id(id).map(|input| input.value()).unwrap_or_default()
}

pub fn set_date_minimums(start_min: &str, end_min: &str) {
    if let Some(start) = get_input_by_id(START_DATE_ID) {
        start.set_min(start_min);
    }
    set_end_min(end_min);
}

pub fn set_end_min(end_min: &str) {
    if let Some(end) = get_input_by_id(END_DATE_ID) {
        end.set_min(end_min);
    }
}

pub fn clear_end_date() {
    if let Some(end) = get_input_by_id(END_DATE_ID) {
        end.set_value("");
    }
}

/// Diálogo bloqueante y borrar la fecha de fin
pub fn reject_end_date(message: &str) {
    blocking_alert(message);
    clear_end_date();
}

pub fn show_total(total: &str) {
    if let Some(element) = get_element_by_id(TOTAL_PRICE_ID) {
        set_text_content(&element, total);
    }
}
