//! Quantized value-to-color scale
//!
//! The domain is the two-point span `[0, max(cell.value)]`, not the full
//! value distribution: splitting a two-point domain into equal quantiles
//! degenerates to an equal-width 9-band split of `[0, max]`, and the
//! legend thresholds are those equal fractions. Lookup is bisect-right
//! over the interior thresholds, so a value sitting exactly on a
//! threshold falls into the upper bucket and `max` lands in the last one.

use crate::types::{Cell, Rgb};

/// Value-to-color mapping over `[0, max]` with one band per palette entry.
#[derive(Debug, Clone)]
pub struct QuantileScale {
    thresholds: Vec<f64>,
    colors: Vec<Rgb>,
}

impl QuantileScale {
    /// Build the scale from the domain maximum and an ordered palette.
    pub fn new(max: f64, colors: Vec<Rgb>) -> Self {
        let buckets = colors.len().max(1);
        let thresholds = (1..buckets)
            .map(|i| max * i as f64 / buckets as f64)
            .collect();
        Self { thresholds, colors }
    }

    /// Build from the cell set that will actually be drawn. Callers must
    /// filter the cells first; the domain follows the filtered set.
    pub fn from_cells(cells: &[&Cell], colors: Vec<Rgb>) -> Self {
        let max = cells.iter().map(|c| c.value).fold(0.0, f64::max);
        Self::new(max, colors)
    }

    /// Color band for a value.
    pub fn color(&self, value: f64) -> Rgb {
        self.colors[self.bucket(value)]
    }

    /// Bucket index for a value (bisect-right over the thresholds).
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.iter().filter(|t| **t <= value).count()
    }

    /// Interior thresholds (`buckets - 1` values).
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    /// Lower bound of each bucket: 0 followed by the interior thresholds.
    pub fn legend_bounds(&self) -> Vec<f64> {
        let mut bounds = Vec::with_capacity(self.colors.len());
        bounds.push(0.0);
        bounds.extend_from_slice(&self.thresholds);
        bounds
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::palette::{interpolated_two, BUCKETS};
    use crate::types::Identity;

    fn gray_ramp() -> Vec<Rgb> {
        interpolated_two(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), BUCKETS)
    }

    fn cell(value: f64) -> Cell {
        Cell {
            day_of_week: "Mon".into(),
            day_index: 0,
            hour_of_day: "0".into(),
            hour: 0,
            value,
            highlight_value: 0.0,
            highlighted: false,
            identity: Identity::new("x"),
            selected: false,
        }
    }

    // ========== Thresholds ==========

    #[test]
    fn test_thresholds_equal_split_of_domain() {
        let scale = QuantileScale::new(100.0, gray_ramp());
        let q = scale.quantiles();
        assert_eq!(q.len(), 8);
        for (i, t) in q.iter().enumerate() {
            let expected = 100.0 * (i + 1) as f64 / 9.0;
            assert!((t - expected).abs() < 1e-9, "threshold {i}: {t}");
        }
    }

    #[test]
    fn test_legend_bounds_start_at_zero() {
        let scale = QuantileScale::new(90.0, gray_ramp());
        let bounds = scale.legend_bounds();
        assert_eq!(bounds.len(), 9);
        assert_eq!(bounds[0], 0.0);
        assert_eq!(bounds[1], 10.0);
        assert_eq!(bounds[8], 80.0);
    }

    // ========== Bucket lookup ==========

    #[test]
    fn test_bucket_interior_values() {
        let scale = QuantileScale::new(90.0, gray_ramp());
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(5.0), 0);
        assert_eq!(scale.bucket(15.0), 1);
        assert_eq!(scale.bucket(89.0), 8);
    }

    #[test]
    fn test_bucket_boundary_goes_upper() {
        let scale = QuantileScale::new(90.0, gray_ramp());
        // a value exactly on a threshold belongs to the upper band
        assert_eq!(scale.bucket(10.0), 1);
        assert_eq!(scale.bucket(80.0), 8);
    }

    #[test]
    fn test_max_maps_to_last_bucket() {
        let scale = QuantileScale::new(90.0, gray_ramp());
        assert_eq!(scale.bucket(90.0), 8);
        assert_eq!(scale.color(90.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_negative_values_clamp_to_first_bucket() {
        let scale = QuantileScale::new(90.0, gray_ramp());
        assert_eq!(scale.bucket(-5.0), 0);
    }

    #[test]
    fn test_zero_max_degenerates_to_last_bucket() {
        // every threshold collapses to 0, bisect-right sends everything up
        let scale = QuantileScale::new(0.0, gray_ramp());
        assert_eq!(scale.bucket(0.0), 8);
    }

    // ========== Domain from cells ==========

    #[test]
    fn test_from_cells_uses_observed_max() {
        let cells = [cell(3.0), cell(12.0), cell(7.0)];
        let refs: Vec<&Cell> = cells.iter().collect();
        let scale = QuantileScale::from_cells(&refs, gray_ramp());
        assert!((scale.quantiles()[8 - 1] - 12.0 * 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_cells_empty_set() {
        let scale = QuantileScale::from_cells(&[], gray_ramp());
        assert_eq!(scale.bucket(0.0), 8);
    }
}
