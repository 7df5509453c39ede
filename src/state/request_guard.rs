// ============================================================================
// REQUEST GUARD - Contador de generación para respuestas fuera de orden
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

/// Ticket emitido al lanzar una petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Solo la petición más reciente puede aplicar su respuesta
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitir un ticket nuevo; invalida todos los anteriores
    pub fn issue(&self) -> RequestTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_wins() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        // La respuesta de `first` llega después de emitir `second`
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = RequestGuard::new();
        let clone = guard.clone();
        let ticket = guard.issue();
        clone.issue();
        assert!(!guard.is_current(ticket));
    }
}
