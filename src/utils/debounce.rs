// ============================================================================
// DEBOUNCE - Agrupa ráfagas de eventos en una sola llamada (trailing edge)
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Debouncer basado en `gloo_timers::Timeout`.
///
/// Cada `schedule` reemplaza el timeout pendiente; soltar un `Timeout`
/// no disparado lo cancela, así que solo se ejecuta la última llamada.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Programar `f`; cancela cualquier llamada pendiente
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, f);
        // El Timeout anterior se suelta aquí (clearTimeout)
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Cancelar la llamada pendiente, si existe
    pub fn cancel(&self) {
        // Soltar el Timeout equivale a clearTimeout
        self.pending.borrow_mut().take();
    }
}
