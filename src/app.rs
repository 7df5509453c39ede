// ============================================================================
// APP - Conecta los ViewModels con el HTML renderizado por el servidor
// ============================================================================
// Cada binding comprueba que sus elementos existen; si faltan, se omite
// (la página sigue funcionando con menos interactividad).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::dom::{
    add_class, blocking_alert, current_pathname, get_element_by_id, on_change, on_click, on_event, on_input,
    on_submit, query_selector_all, window,
};
use crate::error::{ClientError, ClientResult};
use crate::state::AppState;
use crate::utils::constants::{
    END_DATE_ID, NEEDS_VALIDATION_SELECTOR, PRICE_INPUT_SELECTOR, PROCEED_BTN_ID, SEARCH_INPUT_ID,
    SELECT_ALL_BTN_ID, START_DATE_ID, VEHICLE_TYPE_SELECT_ID, WAS_VALIDATED_CLASS,
};
use crate::viewmodels::{AvailabilityViewModel, RentalViewModel, SearchViewModel, SelectionViewModel};
use crate::views::{loading, scan_rendered_cards, vehicle_list};

/// Aplicación principal
pub struct App {
    state: AppState,
    selection: SelectionViewModel,
    search: SearchViewModel,
    availability: AvailabilityViewModel,
    rental: RentalViewModel,
}

impl App {
    pub fn new() -> Self {
        let state = AppState::new();
        let selection = SelectionViewModel::new(state.clone());
        Self {
            search: SearchViewModel::new(state.clone(), selection.clone()),
            availability: AvailabilityViewModel::new(state.clone(), selection.clone()),
            rental: RentalViewModel::new(),
            selection,
            state,
        }
    }

    /// Registrar todos los listeners. Llamar UNA sola vez.
    pub fn mount(&self) -> ClientResult<()> {
        log::info!("🎬 [APP] Montando en {}", current_pathname());
        loading::hide_loading();

        self.bind_history()?;
        self.bind_selection()?;
        self.bind_search()?;
        self.bind_dates()?;
        self.bind_price_inputs()?;
        // Validación antes que el loading: el loading mira default_prevented()
        self.bind_form_validation()?;
        self.bind_loading_on_submit()?;

        self.availability.start_if_needed(&current_pathname());

        log::info!("✅ [APP] Montada ({} cards)", self.state.cards.len());
        Ok(())
    }

    /// Volver atrás/adelante recarga para que el servidor mande
    fn bind_history(&self) -> ClientResult<()> {
        let win = window().ok_or_else(|| ClientError::Dom("No window".to_string()))?;

        on_event(&win, "popstate", |_| {
            if let Some(win) = window() {
                if let Err(e) = win.location().reload() {
                    log::error!("❌ [APP] Error recargando tras popstate: {:?}", e);
                }
            }
        })?;

        on_event(&win, "load", |_| loading::hide_loading())
    }

    fn bind_selection(&self) -> ClientResult<()> {
        let cards = scan_rendered_cards();
        let on_toggle: Rc<dyn Fn(i64, bool)> = {
            let selection = self.selection.clone();
            Rc::new(move |id, checked| selection.on_checkbox_changed(id, checked))
        };
        for card in &cards {
            vehicle_list::bind_checkbox(card, on_toggle.clone())?;
        }
        self.state.cards.replace(cards);
        self.state.reset_selection_from_cards();

        if let Some(select_all) = get_element_by_id(SELECT_ALL_BTN_ID) {
            let selection = self.selection.clone();
            on_click(&select_all, move |_| selection.toggle_all())?;
        }

        if let Some(proceed) = get_element_by_id(PROCEED_BTN_ID) {
            let selection = self.selection.clone();
            on_click(&proceed, move |_| match selection.proceed() {
                Ok(()) => {}
                Err(ClientError::Validation(message)) => blocking_alert(&message),
                Err(e) => log::error!("❌ [SELECTION] Error enviando selección: {}", e),
            })?;
        }

        if !self.state.cards.is_empty() {
            self.selection.refresh();
        }
        Ok(())
    }

    fn bind_search(&self) -> ClientResult<()> {
        if let Some(input) = get_element_by_id(SEARCH_INPUT_ID) {
            let search = self.search.clone();
            on_input(&input, move |_| search.on_filters_changed())?;
        }
        if let Some(select) = get_element_by_id(VEHICLE_TYPE_SELECT_ID) {
            let search = self.search.clone();
            on_change(&select, move |_| search.on_filters_changed())?;
        }
        Ok(())
    }

    fn bind_dates(&self) -> ClientResult<()> {
        let (Some(start), Some(end)) = (get_element_by_id(START_DATE_ID), get_element_by_id(END_DATE_ID)) else {
            return Ok(());
        };
        self.rental.init_date_limits();

        let rental = self.rental.clone();
        on_change(&start, move |_| rental.on_start_changed())?;

        let rental = self.rental.clone();
        on_change(&end, move |_| rental.on_end_changed())
    }

    fn bind_price_inputs(&self) -> ClientResult<()> {
        for input in query_selector_all(PRICE_INPUT_SELECTOR) {
            let rental = self.rental.clone();
            on_change(&input, move |_| rental.recalculate_total())?;
        }
        Ok(())
    }

    fn bind_form_validation(&self) -> ClientResult<()> {
        for element in query_selector_all(NEEDS_VALIDATION_SELECTOR) {
            if let Ok(form) = element.dyn_into::<HtmlFormElement>() {
                bind_form_validation(&form)?;
            }
        }
        Ok(())
    }

    fn bind_loading_on_submit(&self) -> ClientResult<()> {
        for form in query_selector_all("form") {
            bind_loading_on_submit(&form)?;
        }
        Ok(())
    }
}

/// Validación nativa: un formulario inválido no se envía.
/// Registrar antes que `bind_loading_on_submit` sobre el mismo form.
pub fn bind_form_validation(form: &HtmlFormElement) -> ClientResult<()> {
    let target = form.clone();
    on_submit(form, move |event| {
        if !target.check_validity() {
            event.prevent_default();
            event.stop_propagation();
            log::debug!("📝 [FORM] Formulario inválido, envío cancelado");
        }
        if let Err(e) = add_class(&target, WAS_VALIDATED_CLASS) {
            log::warn!("⚠️ [FORM] {}", e);
        }
    })
}

/// Mostrar el loading al enviar, salvo que el envío se haya cancelado
pub fn bind_loading_on_submit(form: &Element) -> ClientResult<()> {
    on_submit(form, |event| {
        if !event.default_prevented() {
            loading::show_loading();
        }
    })
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
