//! Grid cells and the view model that carries selection across rebuilds

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Identity;

/// One day-by-hour grid entry with a measure value and selection identity.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    /// Raw day label as received from the host.
    pub day_of_week: String,
    /// Canonical row index (0=Mon..6=Sun, 7=Holiday, 10=unrecognized).
    pub day_index: u8,
    /// Raw hour label as received from the host.
    pub hour_of_day: String,
    /// Parsed hour used for column positioning.
    pub hour: u32,
    pub value: f64,
    pub highlight_value: f64,
    /// True iff a highlight sub-value exists for this row, whatever its
    /// magnitude.
    pub highlighted: bool,
    pub identity: Identity,
    pub selected: bool,
}

/// Ordered cell list (input row order) plus the saved-selection map that
/// survives full rebuilds.
///
/// Cells are always newly constructed on rebuild; `selected` is the only
/// field restored from prior state, keyed by identity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewModel {
    pub cells: Vec<Cell>,
    /// True when any cell carries a cross-filter highlight this cycle.
    pub is_highlighted: bool,
    #[serde(skip)]
    pub(crate) saved_selection: HashMap<Identity, bool>,
}

impl ViewModel {
    /// Selection state to carry into the next rebuild: the stored map,
    /// overridden by the live `selected` flags of the current cells.
    pub fn selection_snapshot(&self) -> HashMap<Identity, bool> {
        let mut saved = self.saved_selection.clone();
        for cell in &self.cells {
            saved.insert(cell.identity.clone(), cell.selected);
        }
        saved
    }

    /// Restore `selected` flags from the saved map; identities with no
    /// saved entry default to unselected.
    pub fn restore_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = self
                .saved_selection
                .get(&cell.identity)
                .copied()
                .unwrap_or(false);
        }
    }

    /// Mark exactly the given identities selected.
    pub fn set_selected(&mut self, selected: &[Identity]) {
        for cell in &mut self.cells {
            cell.selected = selected.contains(&cell.identity);
        }
    }

    /// Drop every selection flag (used when the reconciler clears a stale
    /// selection).
    pub fn clear_selected(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
        self.saved_selection.clear();
    }

    pub fn keys(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.identity.key()).collect()
    }
}
