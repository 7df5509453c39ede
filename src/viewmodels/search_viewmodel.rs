// ============================================================================
// SEARCH VIEWMODEL - Búsqueda/filtro con debounce y guard de generación
// ============================================================================

use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::services::{ApiClient, SearchQuery};
use crate::state::AppState;
use crate::utils::constants::MSG_SEARCH_FAILED;
use crate::utils::Debouncer;
use crate::viewmodels::{AlertViewModel, SelectionViewModel};
use crate::views::{loading, search_form, vehicle_list};

#[derive(Clone)]
pub struct SearchViewModel {
    api: ApiClient,
    state: AppState,
    selection: SelectionViewModel,
    // Compartido por searchInput y vehicleTypeSelect
    debouncer: Debouncer,
}

impl SearchViewModel {
    pub fn new(state: AppState, selection: SelectionViewModel) -> Self {
        Self {
            api: ApiClient::new(),
            state,
            selection,
            debouncer: Debouncer::new(CONFIG.search_debounce_ms),
        }
    }

    /// Cualquier cambio en los filtros: reprograma la búsqueda
    pub fn on_filters_changed(&self) {
        let vm = self.clone();
        self.debouncer.schedule(move || {
            let query = search_form::read_search_query();
            vm.run_search(query);
        });
    }

    /// Lanzar la búsqueda ya (sin debounce)
    pub fn run_search(&self, query: SearchQuery) {
        let ticket = self.state.search_guard.issue();
        let vm = self.clone();
        loading::show_loading();

        spawn_local(async move {
            let result = vm.api.search_vehicles(&query).await;

            if !vm.state.search_guard.is_current(ticket) {
                log::debug!("⏭️ [SEARCH] Respuesta obsoleta descartada ({:?})", ticket);
                return;
            }
            loading::hide_loading();

            match result {
                Ok(vehicles) => {
                    let on_toggle: Rc<dyn Fn(i64, bool)> = {
                        let selection = vm.selection.clone();
                        Rc::new(move |id, checked| selection.on_checkbox_changed(id, checked))
                    };
                    match vehicle_list::render_vehicle_list(&vehicles, on_toggle) {
                        Ok(Some(cards)) => {
                            vm.state.cards.replace(cards);
                            vm.state.reset_selection_from_cards();
                            vm.selection.refresh();
                        }
                        Ok(None) => log::warn!("⚠️ [SEARCH] #vehicleContainer no existe, nada que renderizar"),
                        Err(e) => log::error!("❌ [SEARCH] Error renderizando vehículos: {}", e),
                    }
                }
                Err(e) => {
                    // La vista anterior se queda como está
                    log::error!("❌ [SEARCH] Error buscando vehículos: {}", e);
                    AlertViewModel::show_error(MSG_SEARCH_FAILED);
                }
            }
        });
    }
}
