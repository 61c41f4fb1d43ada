//! Declarative scene primitives
//!
//! An update produces a complete scene: the host paints it and wires the
//! hit targets back into the controller's click entry points. Scenes are
//! rebuilt whole each cycle; stamping them with a generation lets late
//! selection continuations detect that their scene is gone.

use serde::Serialize;

use crate::types::{Identity, Rgb};

/// Horizontal text anchoring, matching the usual vector-text semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// What a click on a shape means to the selection layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HitTarget {
    /// One grid cell, keyed by its row identity.
    Cell(Identity),
    /// A day axis label (canonical day index).
    Day(u8),
    /// An hour axis label (0..=23).
    Hour(u32),
}

/// A filled, optionally rounded rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub target: Option<HitTarget>,
}

/// A positioned text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextShape {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_pt: f64,
    pub anchor: TextAnchor,
    pub target: Option<HitTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Rect(RectShape),
    Text(TextShape),
}

impl Shape {
    pub fn target(&self) -> Option<&HitTarget> {
        match self {
            Shape::Rect(r) => r.target.as_ref(),
            Shape::Text(t) => t.target.as_ref(),
        }
    }

    /// The cell identity this shape is bound to, if any.
    pub fn cell_identity(&self) -> Option<&Identity> {
        match self.target() {
            Some(HitTarget::Cell(id)) => Some(id),
            _ => None,
        }
    }
}

/// One full frame: viewport extent, the chart-group origin (margin
/// offset), and shapes in draw order, all in chart coordinates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    pub generation: u64,
    pub width: f64,
    pub height: f64,
    /// Translation applied to every shape when painting: the chart group
    /// sits at `(margin.left, margin.top)` within the viewport.
    pub origin: (f64, f64),
    /// Fill opacity of the scene root.
    pub root_opacity: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Count of cell rectangles (shapes bound to a cell identity).
    pub fn cell_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| s.cell_identity().is_some())
            .count()
    }
}

/// In-place opacity correction for an already-painted shape, addressed by
/// its index in the scene's shape list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpacityPatch {
    pub shape: usize,
    pub fill_opacity: f64,
}
