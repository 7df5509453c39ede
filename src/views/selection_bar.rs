// ============================================================================
// SELECTION BAR VIEW - Botones select-all / proceed y formulario POST
// ============================================================================

use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::dom::{append_child, document, get_element_by_id, get_typed_by_id, set_text_content, ElementBuilder};
use crate::error::{ClientError, ClientResult};
use crate::utils::constants::{PROCEED_BTN_ID, RENTAL_DETAILS_ENDPOINT, SELECT_ALL_BTN_ID};
use crate::viewmodels::SelectionSummary;

pub fn apply_selection_summary(summary: &SelectionSummary) {
    if let Some(select_all) = get_element_by_id(SELECT_ALL_BTN_ID) {
        set_text_content(&select_all, summary.select_all_label());
    }

    if let Some(proceed) = get_typed_by_id::<HtmlButtonElement>(PROCEED_BTN_ID) {
        proceed.set_disabled(!summary.proceed_enabled());
        set_text_content(&proceed, &summary.proceed_label());
    }
}

/// Crear un `<form method=POST>` oculto con un input por campo y enviarlo
pub fn submit_selection_form(fields: &[(&str, String)]) -> ClientResult<()> {
    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| ClientError::Dom("No <body>".to_string()))?;

    let form: HtmlFormElement = ElementBuilder::new("form")?.build_as()?;
    form.set_method("POST");
    form.set_action(RENTAL_DETAILS_ENDPOINT);

    for (name, value) in fields {
        let input: HtmlInputElement = ElementBuilder::new("input")?.build_as()?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        append_child(&form, &input)?;
    }

    append_child(&body, &form)?;
    form.submit()?;
    Ok(())
}
