//! Visual layer: layout, scene assembly, and the update controller

pub mod controller;
pub mod grid;
pub mod layout;
pub mod scene;
pub mod selection;
pub mod text;

pub use controller::{Hourmap, UpdateInput, Viewport};
pub use grid::{GridRenderer, DAY_LABELS, HOUR_LABELS};
pub use layout::{Layout, Margin, FILLET, HOUR_COLUMNS};
pub use scene::{HitTarget, OpacityPatch, RectShape, Scene, Shape, TextAnchor, TextShape};
pub use selection::{
    reconcile_opacity, InMemoryInteractivity, Interactivity, SelectionState,
};
pub use text::{ApproxMeasurer, TextMeasurer, TextMetrics};
