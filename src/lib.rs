//! Day-of-week x hour-of-day heatmap scene builder for embedded analytics
//! visuals.
//!
//! The hosting application hands [`Hourmap::update`] a tabular dataset
//! (day and hour category columns plus role-tagged measures), a viewport,
//! and a settings property bag; it gets back a [`visual::Scene`] — axis
//! labels, one colored tile per cell, a 9-swatch legend — ready to paint.
//! Clicks on the scene's hit targets flow back through
//! [`Hourmap::cell_clicked`] / [`Hourmap::label_clicked`], and late
//! selection continuations are generation-guarded so a repaint in between
//! degrades them to no-ops.
//!
//! ```
//! use hourmap::types::{CategoryColumn, DataTable, Identity, MeasureColumn};
//! use hourmap::visual::{Hourmap, UpdateInput, Viewport};
//!
//! let table = DataTable::new(
//!     vec![
//!         CategoryColumn::new(
//!             "Day",
//!             vec!["Mon".into(), "Tue".into()],
//!             vec![Identity::new("r0"), Identity::new("r1")],
//!         ),
//!         CategoryColumn::new("Hour", vec!["8".into(), "17".into()], Vec::new()),
//!     ],
//!     vec![MeasureColumn::new(
//!         "events",
//!         vec!["values".into()],
//!         vec![Some(12.0), Some(30.0)],
//!     )],
//! );
//!
//! let mut visual = Hourmap::with_defaults();
//! let scene = visual
//!     .update(&UpdateInput {
//!         table: &table,
//!         viewport: Viewport::new(800.0, 600.0),
//!         formatting: None,
//!     })
//!     .unwrap();
//! assert_eq!(scene.cell_count(), 2);
//! ```

pub mod services;
pub mod types;
pub mod visual;

pub use types::{FormatSettings, HourmapError, Result};
pub use visual::{Hourmap, Scene, UpdateInput, Viewport};
