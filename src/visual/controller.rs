//! Top-level visual controller
//!
//! `Hourmap` owns everything that survives between host `update` calls:
//! parsed settings, the view model (and with it the saved selection), the
//! reconciler flags, the selection collaborator, and the generation
//! counter that guards late selection continuations. Update calls are
//! synchronous and serial; a failed update returns its error and leaves
//! the previous frame untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::{scheme_colors, QuantileScale, ViewModelBuilder};
use crate::types::{
    Cell, DataTable, FormatSettings, Identity, Result, ViewModel, HOLIDAY_INDEX,
};
use crate::visual::grid::GridRenderer;
use crate::visual::layout::Layout;
use crate::visual::scene::{HitTarget, OpacityPatch, Scene, Shape};
use crate::visual::selection::{
    reconcile_opacity, InMemoryInteractivity, Interactivity, SelectionState,
};
use crate::visual::text::{ApproxMeasurer, TextMeasurer};

/// Glyph measured once per update to derive margins from the font size.
const REF_GLYPH: &str = "W";

/// Host viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the host hands over per update call.
#[derive(Debug, Clone, Copy)]
pub struct UpdateInput<'a> {
    pub table: &'a DataTable,
    pub viewport: Viewport,
    /// Settings property bag; `None` keeps the previously parsed settings.
    pub formatting: Option<&'a Value>,
}

/// The heatmap visual.
pub struct Hourmap {
    settings: FormatSettings,
    view_model: ViewModel,
    state: SelectionState,
    interactivity: Box<dyn Interactivity>,
    measurer: Box<dyn TextMeasurer>,
    generation: u64,
    scene: Option<Scene>,
    allow_interactions: bool,
}

impl Hourmap {
    pub fn new(measurer: Box<dyn TextMeasurer>, interactivity: Box<dyn Interactivity>) -> Self {
        Self {
            settings: FormatSettings::default(),
            view_model: ViewModel::default(),
            state: SelectionState::default(),
            interactivity,
            measurer,
            generation: 0,
            scene: None,
            allow_interactions: true,
        }
    }

    /// Controller with the built-in measurer and selection manager.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(ApproxMeasurer),
            Box::new(InMemoryInteractivity::new()),
        )
    }

    /// Hosts that render a static image disable interaction wiring.
    pub fn set_allow_interactions(&mut self, allow: bool) {
        self.allow_interactions = allow;
    }

    /// Rebuild the view model and produce a fresh scene.
    pub fn update(&mut self, input: &UpdateInput) -> Result<Scene> {
        if let Some(bag) = input.formatting {
            self.settings = FormatSettings::from_value(bag);
        }

        let has_selection = self.interactivity.has_selection();
        self.view_model = ViewModelBuilder::build(input.table, &self.view_model, has_selection)?;

        // An externally driven highlight lands while our selection is
        // active: drop the selection rather than show both emphases.
        if self
            .state
            .reconcile(self.view_model.is_highlighted, has_selection)
        {
            self.interactivity.clear();
            self.view_model.clear_selected();
        }
        let has_selection = self.interactivity.has_selection();

        let glyph = self
            .measurer
            .measure(REF_GLYPH, self.settings.axis_font_size);
        let layout = Layout::compute(
            input.viewport.width,
            input.viewport.height,
            glyph,
            self.settings.bank_holiday,
            self.settings.tile_shape,
        );

        // Holiday rows leave the dataset before the scale sees it, so the
        // domain follows the drawn set.
        let bank_holiday = self.settings.bank_holiday;
        let cells: Vec<&Cell> = self
            .view_model
            .cells
            .iter()
            .filter(|c| bank_holiday || c.day_index != HOLIDAY_INDEX)
            .collect();
        let scale = QuantileScale::from_cells(&cells, scheme_colors(&self.settings));

        self.generation += 1;
        let scene = GridRenderer::new(&self.settings, &layout, glyph).render(
            &cells,
            &scale,
            has_selection,
            self.generation,
            (input.viewport.width, input.viewport.height),
        );
        self.scene = Some(scene.clone());
        Ok(scene)
    }

    /// The most recently rendered scene, if any update has succeeded.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn settings(&self) -> &FormatSettings {
        &self.settings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Click on a cell shape. Returns the opacity corrections for the
    /// current scene, or `None` when interactions are disabled or no scene
    /// is up.
    pub fn cell_clicked(
        &mut self,
        identity: &Identity,
        multi_select: bool,
    ) -> Option<Vec<OpacityPatch>> {
        if !self.allow_interactions {
            return None;
        }
        let generation = self.scene.as_ref()?.generation;
        let selected = self
            .interactivity
            .select(&[identity.clone()], multi_select);
        self.apply_selection(generation, &selected)
    }

    /// Click on an axis label: selects every cell in that day row or hour
    /// column. Cell targets take the single-cell path.
    pub fn label_clicked(
        &mut self,
        target: &HitTarget,
        multi_select: bool,
    ) -> Option<Vec<OpacityPatch>> {
        if !self.allow_interactions {
            return None;
        }
        let generation = self.scene.as_ref()?.generation;
        let identities: Vec<Identity> = match target {
            HitTarget::Cell(id) => vec![id.clone()],
            HitTarget::Day(day) => self
                .view_model
                .cells
                .iter()
                .filter(|c| c.day_index == *day)
                .map(|c| c.identity.clone())
                .collect(),
            HitTarget::Hour(hour) => self
                .view_model
                .cells
                .iter()
                .filter(|c| c.hour == *hour)
                .map(|c| c.identity.clone())
                .collect(),
        };
        if identities.is_empty() {
            return None;
        }
        let selected = self.interactivity.select(&identities, multi_select);
        self.apply_selection(generation, &selected)
    }

    /// Continuation for a resolved selection request.
    ///
    /// `generation` is the scene the request was issued against; if an
    /// update has repainted since, the continuation is a no-op — its
    /// shapes no longer exist.
    pub fn apply_selection(
        &mut self,
        generation: u64,
        selected: &[Identity],
    ) -> Option<Vec<OpacityPatch>> {
        let scene = self.scene.as_mut()?;
        if scene.generation != generation {
            return None;
        }
        self.view_model.set_selected(selected);
        let patches = reconcile_opacity(scene, selected, &self.settings);
        for patch in &patches {
            if let Shape::Rect(rect) = &mut scene.shapes[patch.shape] {
                rect.fill_opacity = patch.fill_opacity;
            }
        }
        Some(patches)
    }
}

impl Default for Hourmap {
    fn default() -> Self {
        Self::with_defaults()
    }
}
