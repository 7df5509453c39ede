// ============================================================================
// CARD REGISTRY - Referencias cacheadas a las cards renderizadas
// ============================================================================
// Se reconstruye solo cuando la lista se re-renderiza; los handlers nunca
// vuelven a recorrer el documento buscando `.vehicle-checkbox`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlInputElement};

/// Una card en pantalla con su checkbox de selección
#[derive(Clone, Debug)]
pub struct RenderedCard {
    pub vehicle_id: i64,
    pub card: HtmlElement,
    pub checkbox: HtmlInputElement,
}

impl RenderedCard {
    pub fn is_checked(&self) -> bool {
        self.checkbox.checked()
    }

    pub fn is_selectable(&self) -> bool {
        !self.checkbox.disabled()
    }
}

#[derive(Clone, Default)]
pub struct CardRegistry {
    cards: Rc<RefCell<Vec<RenderedCard>>>,
}

impl CardRegistry {
    /// Reemplazar el conjunto completo (tras un render)
    pub fn replace(&self, cards: Vec<RenderedCard>) {
        log::debug!("🗂️ [CARDS] Registro reconstruido: {} cards", cards.len());
        *self.cards.borrow_mut() = cards;
    }

    /// Copia de los handles (clonar un HtmlElement solo clona la referencia JS)
    pub fn cards(&self) -> Vec<RenderedCard> {
        self.cards.borrow().clone()
    }

    pub fn find(&self, vehicle_id: i64) -> Option<RenderedCard> {
        self.cards
            .borrow()
            .iter()
            .find(|c| c.vehicle_id == vehicle_id)
            .cloned()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.cards.borrow().iter().map(|c| c.vehicle_id).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.borrow().is_empty()
    }

    pub fn selectable_count(&self) -> usize {
        self.cards.borrow().iter().filter(|c| c.is_selectable()).count()
    }
}
