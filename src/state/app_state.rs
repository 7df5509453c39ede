// ============================================================================
// APP STATE - Estado global de la página
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{CardRegistry, RequestGuard, SelectionSet};

/// Estado compartido entre handlers (clonar solo clona los Rc)
#[derive(Clone, Default)]
pub struct AppState {
    pub selection: Rc<RefCell<SelectionSet>>,
    pub cards: CardRegistry,
    pub search_guard: RequestGuard,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sincronizar selección con las cards actuales (p.ej. checkboxes
    /// restaurados por el navegador al volver atrás)
    pub fn reset_selection_from_cards(&self) {
        let mut selection = self.selection.borrow_mut();
        selection.clear();
        for card in self.cards.cards() {
            if card.is_checked() && card.is_selectable() {
                selection.set(card.vehicle_id, true);
            }
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selection.borrow().len()
    }
}
