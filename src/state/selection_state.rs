// ============================================================================
// SELECTION STATE - IDs de vehículos marcados por el usuario
// ============================================================================

use std::collections::BTreeSet;

/// Conjunto de vehículos seleccionados (nunca se persiste)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflejar el estado de un checkbox
    pub fn set(&mut self, vehicle_id: i64, checked: bool) {
        if checked {
            self.ids.insert(vehicle_id);
        } else {
            self.ids.remove(&vehicle_id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// IDs en orden ascendente
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_updates_count() {
        let mut selection = SelectionSet::new();
        selection.set(3, true);
        selection.set(1, true);
        selection.set(3, true);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.ids(), vec![1, 3]);

        selection.set(3, false);
        assert_eq!(selection.ids(), vec![1]);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = SelectionSet::new();
        for id in [1, 2, 3] {
            selection.set(id, true);
        }
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
