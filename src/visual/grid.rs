//! Scene assembly for the heatmap grid
//!
//! One pass over the filtered cell set produces the full frame: panels,
//! axis labels, cell tiles, legend, units label. Axis labels carry hit
//! targets of their own so a click on "Mon" can select the whole row.

use crate::services::QuantileScale;
use crate::types::{day_index, Cell, FormatSettings};
use crate::visual::layout::{Layout, FILLET};
use crate::visual::scene::{HitTarget, RectShape, Scene, Shape, TextAnchor, TextShape};
use crate::visual::text::TextMetrics;

/// Day rows in draw order; the holiday row only when enabled.
pub const DAY_LABELS: [&str; 8] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Hol"];

/// Hour columns in 12-hour display style.
pub const HOUR_LABELS: [&str; 24] = [
    "0", "1a", "2a", "3a", "4a", "5a", "6a", "7a", "8a", "9a", "10a", "11a", "12", "1p", "2p",
    "3p", "4p", "5p", "6p", "7p", "8p", "9p", "10p", "11p",
];

/// Pixel inset pulling axis labels clear of the grid edge.
const AXIS_INSET: f64 = 11.0;

/// Assembles a scene from the view model, layout, and color scale.
pub struct GridRenderer<'a> {
    settings: &'a FormatSettings,
    layout: &'a Layout,
    glyph: TextMetrics,
}

impl<'a> GridRenderer<'a> {
    pub fn new(settings: &'a FormatSettings, layout: &'a Layout, glyph: TextMetrics) -> Self {
        Self {
            settings,
            layout,
            glyph,
        }
    }

    /// Build the frame. `cells` must already be holiday-filtered; the
    /// scale must have been built from the same filtered set.
    pub fn render(
        &self,
        cells: &[&Cell],
        scale: &QuantileScale,
        has_selection: bool,
        generation: u64,
        viewport: (f64, f64),
    ) -> Scene {
        let mut shapes = Vec::with_capacity(cells.len() + 64);

        if self.settings.background {
            shapes.push(self.chart_panel());
        }
        self.push_day_labels(&mut shapes);
        self.push_hour_labels(&mut shapes);
        self.push_cells(&mut shapes, cells, scale, has_selection);
        if self.settings.background {
            shapes.push(self.legend_panel());
        }
        self.push_legend(&mut shapes, scale);
        shapes.push(self.units_label());

        Scene {
            generation,
            width: viewport.0,
            height: viewport.1,
            origin: (self.layout.margin.left, self.layout.margin.top),
            root_opacity: self.settings.transparent,
            shapes,
        }
    }

    fn chart_panel(&self) -> Shape {
        Shape::Rect(RectShape {
            x: -self.layout.margin.left,
            y: -self.layout.margin.top,
            width: self.layout.background_width,
            height: self.layout.background_height,
            corner_radius: 0.0,
            fill: self.settings.background_color,
            fill_opacity: self.settings.background_opacity / 100.0,
            target: None,
        })
    }

    fn legend_panel(&self) -> Shape {
        Shape::Rect(RectShape {
            x: -self.layout.margin.left,
            y: self.layout.y_legend - FILLET,
            width: self.layout.background_width,
            height: self.layout.legend_height,
            corner_radius: 0.0,
            fill: self.settings.background_color,
            fill_opacity: self.settings.background_opacity / 100.0,
            target: None,
        })
    }

    fn push_day_labels(&self, shapes: &mut Vec<Shape>) {
        for (row, label) in DAY_LABELS[..self.layout.rows as usize].iter().enumerate() {
            shapes.push(Shape::Text(TextShape {
                text: (*label).into(),
                x: -AXIS_INSET,
                y: self.layout.y(row as u8) + self.layout.grid_size / 1.5,
                font_size_pt: self.settings.axis_font_size,
                anchor: TextAnchor::End,
                target: Some(HitTarget::Day(day_index(label))),
            }));
        }
    }

    fn push_hour_labels(&self, shapes: &mut Vec<Shape>) {
        for (hour, label) in HOUR_LABELS.iter().enumerate() {
            shapes.push(Shape::Text(TextShape {
                text: (*label).into(),
                x: self.layout.x(hour as u32) + self.layout.grid_size / 2.0,
                y: -AXIS_INSET,
                font_size_pt: self.settings.axis_font_size,
                anchor: TextAnchor::Middle,
                target: Some(HitTarget::Hour(hour as u32)),
            }));
        }
    }

    fn push_cells(
        &self,
        shapes: &mut Vec<Shape>,
        cells: &[&Cell],
        scale: &QuantileScale,
        has_selection: bool,
    ) {
        for cell in cells {
            let fill_opacity = if cell.selected || !has_selection {
                self.settings.solid
            } else {
                self.settings.dimmed
            };
            shapes.push(Shape::Rect(RectShape {
                x: self.layout.x(cell.hour),
                y: self.layout.y(cell.day_index),
                width: self.layout.grid_size,
                height: self.layout.grid_size,
                corner_radius: self.layout.corner_radius,
                fill: scale.color(cell.value),
                fill_opacity,
                target: Some(HitTarget::Cell(cell.identity.clone())),
            }));
        }
    }

    fn push_legend(&self, shapes: &mut Vec<Shape>, scale: &QuantileScale) {
        let swatch_height = self.layout.grid_size / 2.0;
        for (i, bound) in scale.legend_bounds().iter().enumerate() {
            let x = self.layout.legend_element_width * i as f64;
            shapes.push(Shape::Rect(RectShape {
                x,
                y: self.layout.y_legend,
                width: self.layout.legend_element_width,
                height: swatch_height,
                corner_radius: 0.0,
                fill: scale.colors()[i],
                fill_opacity: self.settings.solid,
                target: None,
            }));
            shapes.push(Shape::Text(TextShape {
                text: format!("\u{2265} {}", bound.round()),
                x,
                y: self.layout.y_legend + swatch_height + self.glyph.height,
                font_size_pt: self.settings.axis_font_size,
                anchor: TextAnchor::Start,
                target: None,
            }));
        }
    }

    fn units_label(&self) -> Shape {
        Shape::Text(TextShape {
            text: self.settings.units_label.clone(),
            x: 0.0,
            y: self.layout.y_legend + self.layout.grid_size / 2.0 + self.glyph.height * 2.0,
            font_size_pt: self.settings.axis_font_size,
            anchor: TextAnchor::Start,
            target: None,
        })
    }
}
