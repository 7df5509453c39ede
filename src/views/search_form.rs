// ============================================================================
// SEARCH FORM VIEW - Lectura de los filtros
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::dom::get_typed_by_id;
use crate::services::SearchQuery;
use crate::utils::constants::{SEARCH_INPUT_ID, VEHICLE_TYPE_SELECT_ID};

/// Valores actuales de ambos filtros ("" si el campo no existe)
pub fn read_search_query() -> SearchQuery {
    let search = get_typed_by_id::<HtmlInputElement>(SEARCH_INPUT_ID)
        .map(|input| input.value())
        .unwrap_or_default();
    let vehicle_type = get_typed_by_id::<HtmlSelectElement>(VEHICLE_TYPE_SELECT_ID)
        .map(|select| select.value())
        .unwrap_or_default();
    SearchQuery { search, vehicle_type }
}
