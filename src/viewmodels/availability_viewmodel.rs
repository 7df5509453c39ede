// ============================================================================
// AVAILABILITY VIEWMODEL - Polling de disponibilidad cada 30 s
// ============================================================================
// Re-consulta /api/vehicles y refleja el estado en las cards ya renderizadas.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::models::VehicleRecord;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::SelectionViewModel;
use crate::views::availability;

/// Qué hacer con una card tras el polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAvailability {
    /// Atenuar, deshabilitar y desmarcar; badge "Rented" (se crea si falta)
    Rented,
    /// Restaurar; un badge existente pasa a "Available" (no se crea)
    Available,
    /// El vehículo no vino en la respuesta: no tocar
    Unknown,
}

/// Plan de actualización para las cards en pantalla, en el mismo orden
pub fn plan_availability(card_ids: &[i64], vehicles: &[VehicleRecord]) -> Vec<(i64, CardAvailability)> {
    let index: HashMap<i64, bool> = vehicles.iter().map(|v| (v.id, v.is_available)).collect();
    card_ids
        .iter()
        .map(|id| {
            let availability = match index.get(id) {
                Some(true) => CardAvailability::Available,
                Some(false) => CardAvailability::Rented,
                None => CardAvailability::Unknown,
            };
            (*id, availability)
        })
        .collect()
}

#[derive(Clone)]
pub struct AvailabilityViewModel {
    api: ApiClient,
    state: AppState,
    selection: SelectionViewModel,
    interval: Rc<RefCell<Option<Interval>>>,
}

impl AvailabilityViewModel {
    pub fn new(state: AppState, selection: SelectionViewModel) -> Self {
        Self {
            api: ApiClient::new(),
            state,
            selection,
            interval: Rc::new(RefCell::new(None)),
        }
    }

    /// Iniciar el polling si la vista lo necesita. Idempotente.
    pub fn start_if_needed(&self, pathname: &str) {
        if !CONFIG.should_poll(pathname) {
            log::debug!("⏸️ [POLL] Vista '{}' sin polling de disponibilidad", pathname);
            return;
        }
        if self.interval.borrow().is_some() {
            log::warn!("⚠️ [POLL] start_if_needed ya fue llamado, ignorando llamada duplicada");
            return;
        }

        let period = CONFIG.availability_poll_ms;
        log::info!("⏰ [POLL] Disponibilidad cada {} segundos", period / 1000);

        let vm = self.clone();
        let interval = Interval::new(period, move || vm.refresh());
        *self.interval.borrow_mut() = Some(interval);
    }

    /// Un ciclo de polling
    pub fn refresh(&self) {
        let vm = self.clone();
        spawn_local(async move {
            match vm.api.fetch_vehicles().await {
                Ok(vehicles) => vm.apply(&vehicles),
                Err(e) => log::error!("❌ [POLL] Error refrescando disponibilidad: {}", e),
            }
        });
    }

    /// Aplicar una respuesta a las cards registradas
    pub fn apply(&self, vehicles: &[VehicleRecord]) {
        let plan = plan_availability(&self.state.cards.ids(), vehicles);
        let mut rented = 0;

        for (vehicle_id, status) in plan {
            let Some(card) = self.state.cards.find(vehicle_id) else {
                continue;
            };
            if status == CardAvailability::Rented {
                rented += 1;
                self.state.selection.borrow_mut().set(vehicle_id, false);
            }
            if let Err(e) = availability::apply_card_availability(&card, status) {
                log::error!("❌ [POLL] Error actualizando card {}: {}", vehicle_id, e);
            }
        }

        log::debug!("🔄 [POLL] {} vehículos recibidos, {} alquilados en pantalla", vehicles.len(), rented);
        // Un vehículo alquilado pudo quedar desmarcado
        self.selection.refresh();
    }
}
