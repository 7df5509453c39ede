// ============================================================================
// SELECTION VIEWMODEL - Selección de vehículos y "proceed"
// ============================================================================

use crate::error::{ClientError, ClientResult};
use crate::state::{AppState, SelectionSet};
use crate::utils::constants::{MSG_EMPTY_SELECTION, SELECTED_VEHICLES_FIELD};
use crate::views::{loading, selection_bar};

/// Resumen que pintan `selectAllBtn` y `proceedBtn`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    /// Cards cuyo checkbox está habilitado
    pub selectable: usize,
}

impl SelectionSummary {
    pub fn new(selected: usize, selectable: usize) -> Self {
        Self { selected, selectable }
    }

    pub fn all_selected(&self) -> bool {
        self.selectable > 0 && self.selected >= self.selectable
    }

    pub fn select_all_label(&self) -> &'static str {
        if self.all_selected() {
            "Deselect All"
        } else {
            "Select All"
        }
    }

    pub fn proceed_enabled(&self) -> bool {
        self.selected > 0
    }

    pub fn proceed_label(&self) -> String {
        if self.proceed_enabled() {
            format!("Proceed with {} vehicle(s)", self.selected)
        } else {
            "Select vehicles to proceed".to_string()
        }
    }

    /// Valor que select-all aplica a todos los checkboxes
    pub fn select_all_target(&self) -> bool {
        !self.all_selected()
    }
}

/// Campos del formulario POST a `/rental-details` (un campo por ID)
pub fn proceed_fields(selection: &SelectionSet) -> ClientResult<Vec<(&'static str, String)>> {
    if selection.is_empty() {
        return Err(ClientError::validation(MSG_EMPTY_SELECTION));
    }
    Ok(selection
        .ids()
        .into_iter()
        .map(|id| (SELECTED_VEHICLES_FIELD, id.to_string()))
        .collect())
}

/// ViewModel de selección - lógica + aplicar resumen a la vista
#[derive(Clone)]
pub struct SelectionViewModel {
    state: AppState,
}

impl SelectionViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary::new(self.state.selected_count(), self.state.cards.selectable_count())
    }

    /// Checkbox individual cambiado
    pub fn on_checkbox_changed(&self, vehicle_id: i64, checked: bool) {
        self.state.selection.borrow_mut().set(vehicle_id, checked);
        log::debug!("☑️ [SELECTION] Vehículo {} → {}", vehicle_id, checked);
        self.refresh();
    }

    /// Botón select-all / deselect-all
    pub fn toggle_all(&self) {
        let target = self.summary().select_all_target();
        {
            let mut selection = self.state.selection.borrow_mut();
            for card in self.state.cards.cards() {
                if !card.is_selectable() {
                    continue;
                }
                card.checkbox.set_checked(target);
                selection.set(card.vehicle_id, target);
            }
        }
        log::info!("☑️ [SELECTION] Select-all → {}", target);
        self.refresh();
    }

    /// Botón proceed: valida y envía el formulario sintetizado
    pub fn proceed(&self) -> ClientResult<()> {
        let fields = proceed_fields(&self.state.selection.borrow())?;
        log::info!("🚗 [SELECTION] Enviando {} vehículos a rental-details", fields.len());
        // form.submit() no dispara el evento submit, el loading se muestra aquí
        loading::show_loading();
        selection_bar::submit_selection_form(&fields)
    }

    /// Repintar botones a partir del estado actual
    pub fn refresh(&self) {
        let summary = self.summary();
        selection_bar::apply_selection_summary(&summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_disables_proceed() {
        let summary = SelectionSummary::new(0, 4);
        assert!(!summary.proceed_enabled());
        assert_eq!(summary.proceed_label(), "Select vehicles to proceed");
        assert_eq!(summary.select_all_label(), "Select All");
    }

    #[test]
    fn test_count_matches_checked_boxes() {
        for selected in 1..=4 {
            let summary = SelectionSummary::new(selected, 4);
            assert!(summary.proceed_enabled());
            assert_eq!(summary.proceed_label(), format!("Proceed with {} vehicle(s)", selected));
        }
    }

    #[test]
    fn test_select_all_toggles_to_opposite() {
        let all = SelectionSummary::new(3, 3);
        assert!(all.all_selected());
        assert_eq!(all.select_all_label(), "Deselect All");
        assert!(!all.select_all_target());

        let some = SelectionSummary::new(1, 3);
        assert!(some.select_all_target());
        assert!(SelectionSummary::new(0, 3).select_all_target());
    }

    #[test]
    fn test_no_cards_is_not_all_selected() {
        let summary = SelectionSummary::new(0, 0);
        assert!(!summary.all_selected());
        assert_eq!(summary.select_all_label(), "Select All");
    }

    #[test]
    fn test_proceed_rejects_empty_selection() {
        let err = proceed_fields(&SelectionSet::new()).unwrap_err();
        assert_eq!(err, ClientError::validation(MSG_EMPTY_SELECTION));
    }

    #[test]
    fn test_proceed_repeats_field_per_id() {
        let mut selection = SelectionSet::new();
        selection.set(12, true);
        selection.set(4, true);
        let fields = proceed_fields(&selection).unwrap();
        assert_eq!(
            fields,
            vec![
                ("selected_vehicles", "4".to_string()),
                ("selected_vehicles", "12".to_string()),
            ]
        );
    }
}
