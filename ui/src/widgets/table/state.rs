//! Per-table UI state that survives between frames.

use std::collections::HashMap;

use gigboard_business::RowKey;

/// Identifies one toggle cell: column position plus row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleSlot {
    pub column: usize,
    pub row: RowKey,
}

impl ToggleSlot {
    pub fn new(column: usize, row: RowKey) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, Clone, Copy)]
struct Optimistic {
    /// Row value the flip was made against.
    seed: bool,
    value: bool,
}

/// Optimistic toggle values, keyed by [`ToggleSlot`].
///
/// A flipped switch shows its new value until either the seed value from the
/// row changes or the owner replaces the data and calls [`Self::reset`].
#[derive(Debug, Default)]
pub struct FieldTableState {
    toggles: HashMap<ToggleSlot, Optimistic>,
}

impl FieldTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value to draw for `slot` given the current row value `seed`.
    pub fn toggle_value(&mut self, slot: &ToggleSlot, seed: bool) -> bool {
        match self.toggles.get(slot) {
            Some(optimistic) if optimistic.seed == seed => optimistic.value,
            Some(_) => {
                self.toggles.remove(slot);
                seed
            }
            None => seed,
        }
    }

    /// Records a user flip of `slot` from `seed` to `value`.
    pub fn set_toggle(&mut self, slot: ToggleSlot, seed: bool, value: bool) {
        if seed == value {
            self.toggles.remove(&slot);
        } else {
            self.toggles.insert(slot, Optimistic { seed, value });
        }
    }

    /// Drops every optimistic value. Call when new rows arrive.
    pub fn reset(&mut self) {
        self.toggles.clear();
    }

    pub fn pending_toggles(&self) -> usize {
        self.toggles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> ToggleSlot {
        ToggleSlot::new(3, RowKey::Id(id.to_owned()))
    }

    #[test]
    fn test_untouched_toggle_shows_seed() {
        let mut state = FieldTableState::new();
        assert!(state.toggle_value(&slot("a"), true));
        assert!(!state.toggle_value(&slot("a"), false));
    }

    #[test]
    fn test_flip_is_shown_until_seed_changes() {
        let mut state = FieldTableState::new();
        state.set_toggle(slot("a"), false, true);

        assert!(state.toggle_value(&slot("a"), false));
        assert!(!state.toggle_value(&slot("b"), false));

        // The refetched row now agrees with the flip.
        assert!(state.toggle_value(&slot("a"), true));
        assert_eq!(state.pending_toggles(), 0);
    }

    #[test]
    fn test_flip_back_clears_entry() {
        let mut state = FieldTableState::new();
        state.set_toggle(slot("a"), false, true);
        state.set_toggle(slot("a"), false, false);
        assert_eq!(state.pending_toggles(), 0);
    }

    #[test]
    fn test_reset_rolls_back_to_seed() {
        let mut state = FieldTableState::new();
        state.set_toggle(slot("a"), false, true);
        state.reset();
        assert!(!state.toggle_value(&slot("a"), false));
    }

    #[test]
    fn test_slots_are_per_column() {
        let mut state = FieldTableState::new();
        state.set_toggle(ToggleSlot::new(0, RowKey::Index(0)), false, true);
        assert!(!state.toggle_value(&ToggleSlot::new(1, RowKey::Index(0)), false));
    }
}
