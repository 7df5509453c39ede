// ============================================================================
// LOADING VIEW - Único par show/hide sobre #loadingIndicator
// ============================================================================

use crate::dom::{add_class, get_element_by_id, remove_class};
use crate::utils::constants::{LOADING_INDICATOR_ID, LOADING_SHOW_CLASS};

pub fn show_loading() {
    if let Some(indicator) = get_element_by_id(LOADING_INDICATOR_ID) {
        if let Err(e) = add_class(&indicator, LOADING_SHOW_CLASS) {
            log::warn!("⚠️ [LOADING] No se pudo mostrar: {}", e);
        }
    }
}

pub fn hide_loading() {
    if let Some(indicator) = get_element_by_id(LOADING_INDICATOR_ID) {
        if let Err(e) = remove_class(&indicator, LOADING_SHOW_CLASS) {
            log::warn!("⚠️ [LOADING] No se pudo ocultar: {}", e);
        }
    }
}
