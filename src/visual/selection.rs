//! Selection tooling and highlight reconciliation
//!
//! The host's selection manager sits behind the [`Interactivity`] trait;
//! the crate ships an in-process implementation for hosts (and tests)
//! without one. Reconciliation is a two-flag state machine evaluated once
//! per update: a cross-filter highlight arriving while a local selection
//! is active clears that selection, so the two emphasis mechanisms never
//! fight on screen.

use crate::types::{FormatSettings, Identity};
use crate::visual::scene::{OpacityPatch, Scene, Shape};

/// Host selection-manager contract.
///
/// `select` applies a selection request and returns the full new selected
/// set — synchronously here; hosts whose managers resolve asynchronously
/// feed the resolved set back through the controller's `apply_selection`.
pub trait Interactivity {
    fn select(&mut self, identities: &[Identity], multi_select: bool) -> Vec<Identity>;
    fn clear(&mut self);
    fn has_selection(&self) -> bool;
}

/// In-process selection manager with the usual click semantics: a plain
/// click replaces the selection (or toggles it off when it already is the
/// selection), a multi-select click toggles membership.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInteractivity {
    selected: Vec<Identity>,
}

impl InMemoryInteractivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[Identity] {
        &self.selected
    }
}

impl Interactivity for InMemoryInteractivity {
    fn select(&mut self, identities: &[Identity], multi_select: bool) -> Vec<Identity> {
        if multi_select {
            for id in identities {
                if let Some(pos) = self.selected.iter().position(|s| s == id) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(id.clone());
                }
            }
        } else if self.selected == identities {
            self.selected.clear();
        } else {
            self.selected = identities.to_vec();
        }
        self.selected.clone()
    }

    fn clear(&mut self) {
        self.selected.clear();
    }

    fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}

/// Two-flag state machine deciding when a stale local selection must be
/// cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    was_highlighted: bool,
    was_selected: bool,
}

impl SelectionState {
    /// Evaluate one update cycle. `is_highlighted` is this cycle's
    /// highlight disjunction; `has_selection` is the selection manager's
    /// report, taken before any clearing. Returns true when the current
    /// selection must be cleared.
    pub fn reconcile(&mut self, is_highlighted: bool, has_selection: bool) -> bool {
        let clear = self.was_selected && is_highlighted;
        self.was_highlighted = is_highlighted;
        self.was_selected = has_selection;
        clear
    }

    pub fn was_highlighted(&self) -> bool {
        self.was_highlighted
    }

    pub fn was_selected(&self) -> bool {
        self.was_selected
    }
}

/// Opacity corrections for a painted scene after the selected set changed:
/// solid when selected or when nothing is selected, dimmed otherwise.
/// Only cell shapes are patched.
pub fn reconcile_opacity(
    scene: &Scene,
    selected: &[Identity],
    settings: &FormatSettings,
) -> Vec<OpacityPatch> {
    let mut patches = Vec::new();
    for (index, shape) in scene.shapes.iter().enumerate() {
        let Some(identity) = shape.cell_identity() else {
            continue;
        };
        let fill_opacity = if selected.is_empty() || selected.contains(identity) {
            settings.solid
        } else {
            settings.dimmed
        };
        if let Shape::Rect(rect) = shape {
            if rect.fill_opacity != fill_opacity {
                patches.push(OpacityPatch {
                    shape: index,
                    fill_opacity,
                });
            }
        }
    }
    patches
}
