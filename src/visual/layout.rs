//! Grid geometry
//!
//! All sizes derive from two inputs: the viewport and one reference glyph
//! measured at the axis font size. The hour axis is fixed at 24 columns;
//! rows carry an extra break before the weekend and before the holiday
//! row, so the three day groups read as separate bands.

use crate::types::TileShape;
use crate::visual::text::TextMetrics;

/// Padding unit used throughout the margin arithmetic.
pub const FILLET: f64 = 5.0;

/// The hour axis always spans a full day.
pub const HOUR_COLUMNS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Resolved geometry for one update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub margin: Margin,
    pub chart_width: f64,
    pub chart_height: f64,
    /// Side length of one square cell.
    pub grid_size: f64,
    /// Extra vertical gap before Saturday and before the holiday row.
    pub grid_break: f64,
    pub legend_element_width: f64,
    /// Day rows drawn: 8 with the holiday row, else 7.
    pub rows: u8,
    /// Top edge of the legend strip, in chart coordinates.
    pub y_legend: f64,
    pub background_width: f64,
    pub background_height: f64,
    pub legend_height: f64,
    pub corner_radius: f64,
}

impl Layout {
    pub fn compute(
        viewport_width: f64,
        viewport_height: f64,
        glyph: TextMetrics,
        bank_holiday: bool,
        tile_shape: TileShape,
    ) -> Self {
        let margin = Margin {
            top: glyph.height + 2.0 * FILLET,
            left: glyph.width * 3.0 + FILLET,
            bottom: FILLET,
            right: FILLET,
        };

        // Degenerate viewports collapse to a zero-size grid rather than
        // going negative.
        let chart_width = (viewport_width - margin.left - margin.right).max(0.0);
        let chart_height = (viewport_height - margin.top - margin.bottom).max(0.0);

        let grid_size = (chart_width / HOUR_COLUMNS as f64).floor();
        let grid_break = (grid_size / 2.0).ceil();

        let (rows, inner_gaps, legend_gaps) = if bank_holiday {
            (8u8, 2.0, 3.0)
        } else {
            (7u8, 1.0, 2.0)
        };

        Self {
            margin,
            chart_width,
            chart_height,
            grid_size,
            grid_break,
            legend_element_width: grid_size * 2.0,
            rows,
            y_legend: rows as f64 * grid_size + legend_gaps * grid_break,
            background_width: margin.left + margin.right + grid_size * HOUR_COLUMNS as f64,
            background_height: margin.top
                + margin.bottom
                + rows as f64 * grid_size
                + inner_gaps * grid_break,
            legend_height: grid_size / 2.0 + glyph.height * 2.0 + 2.0 * FILLET,
            corner_radius: grid_size * tile_shape.bevel(),
        }
    }

    /// Column position of an hour.
    pub fn x(&self, hour: u32) -> f64 {
        hour as f64 * self.grid_size
    }

    /// Row position of a canonical day index, with the pre-weekend and
    /// pre-holiday breaks applied.
    pub fn y(&self, row: u8) -> f64 {
        let mut y = row as f64 * self.grid_size;
        if row > 4 {
            y += self.grid_break;
        }
        if row > 6 {
            y += self.grid_break;
        }
        y
    }
}
