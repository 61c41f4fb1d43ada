//! View-model construction from the host table
//!
//! Rebuilds the full cell list on every update, carrying nothing across
//! except the saved selection (keyed by row identity). Measure values are
//! looked up by role, never by position.

use crate::types::{
    day_index, parse_hour, Cell, DataTable, HourmapError, Result, ViewModel,
};

/// Role name the grid measure must be tagged with.
pub const VALUES_ROLE: &str = "values";

/// Stateless builder: table in, view model out.
pub struct ViewModelBuilder;

impl ViewModelBuilder {
    /// Build a fresh view model from `table`.
    ///
    /// `previous` contributes only its selection snapshot; its cells are
    /// never reused. The snapshot is re-applied at the end, but only when
    /// the interactivity layer reports an active selection (`has_selection`)
    /// — otherwise every cell starts unselected.
    ///
    /// Errors leave `previous` untouched in the caller: a misaligned table
    /// aborts the cycle (`MissingData`), and a non-numeric hour label
    /// aborts it fail-fast (`InvalidHourLabel`) instead of producing an
    /// unpositionable tile.
    pub fn build(
        table: &DataTable,
        previous: &ViewModel,
        has_selection: bool,
    ) -> Result<ViewModel> {
        let day = table
            .categories
            .first()
            .ok_or_else(|| HourmapError::MissingData("day category column".into()))?;
        let hour = table
            .categories
            .get(1)
            .ok_or_else(|| HourmapError::MissingData("hour category column".into()))?;

        if day.values.len() != hour.values.len() {
            return Err(HourmapError::MissingData(format!(
                "category columns misaligned ({} day rows, {} hour rows)",
                day.values.len(),
                hour.values.len()
            )));
        }
        if day.identities.len() != day.values.len() {
            return Err(HourmapError::MissingData(format!(
                "identity count mismatch ({} identities, {} rows)",
                day.identities.len(),
                day.values.len()
            )));
        }

        // Role lookup: the measure may sit at any index, or be absent
        // entirely (every value then defaults to 0).
        let measure = table.measures.iter().find(|m| m.has_role(VALUES_ROLE));

        let mut vm = ViewModel {
            cells: Vec::with_capacity(day.values.len()),
            is_highlighted: false,
            saved_selection: previous.selection_snapshot(),
        };

        for (row, day_label) in day.values.iter().enumerate() {
            let hour_label = &hour.values[row];
            let value = measure.and_then(|m| m.value(row));
            let highlight = measure.and_then(|m| m.highlight(row));
            let highlighted = highlight.is_some();
            if highlighted {
                vm.is_highlighted = true;
            }

            vm.cells.push(Cell {
                day_of_week: day_label.clone(),
                day_index: day_index(day_label),
                hour_of_day: hour_label.clone(),
                hour: parse_hour(hour_label, row)?,
                value: value.unwrap_or(0.0),
                highlight_value: highlight.unwrap_or(0.0),
                highlighted,
                identity: day.identities[row].clone(),
                selected: false,
            });
        }

        if has_selection {
            vm.restore_selection();
        }

        Ok(vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryColumn, Identity, MeasureColumn};

    fn table(rows: &[(&str, &str)]) -> DataTable {
        let days = CategoryColumn::new(
            "Day",
            rows.iter().map(|(d, _)| d.to_string()).collect(),
            (0..rows.len())
                .map(|i| Identity::new(format!("row-{i}")))
                .collect(),
        );
        let hours = CategoryColumn::new(
            "Hour",
            rows.iter().map(|(_, h)| h.to_string()).collect(),
            Vec::new(),
        );
        DataTable::new(vec![days, hours], Vec::new())
    }

    fn values_measure(values: Vec<Option<f64>>) -> MeasureColumn {
        MeasureColumn::new("events", vec![VALUES_ROLE.into()], values)
    }

    // ========== Basic construction ==========

    #[test]
    fn test_cells_in_row_order() {
        let mut t = table(&[("Mon", "0"), ("Tue", "1"), ("Sun", "23")]);
        t.measures
            .push(values_measure(vec![Some(1.0), Some(2.0), Some(3.0)]));

        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert_eq!(vm.cells.len(), 3);
        assert_eq!(vm.cells[0].day_index, 0);
        assert_eq!(vm.cells[1].day_index, 1);
        assert_eq!(vm.cells[2].day_index, 6);
        assert_eq!(vm.cells[2].hour, 23);
        assert_eq!(vm.cells[1].value, 2.0);
        assert!(!vm.is_highlighted);
    }

    #[test]
    fn test_missing_measure_defaults_to_zero() {
        let t = table(&[("Mon", "0"), ("Tue", "1")]);
        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert!(vm.cells.iter().all(|c| c.value == 0.0));
        assert!(vm.cells.iter().all(|c| !c.highlighted));
    }

    #[test]
    fn test_measure_found_by_role_not_position() {
        let mut t = table(&[("Mon", "0")]);
        t.measures.push(MeasureColumn::new(
            "tooltip",
            vec!["tooltips".into()],
            vec![Some(99.0)],
        ));
        t.measures.push(values_measure(vec![Some(7.0)]));

        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert_eq!(vm.cells[0].value, 7.0);
    }

    #[test]
    fn test_null_value_defaults_but_row_kept() {
        let mut t = table(&[("Mon", "0"), ("Mon", "1")]);
        t.measures.push(values_measure(vec![None, Some(4.0)]));

        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert_eq!(vm.cells.len(), 2);
        assert_eq!(vm.cells[0].value, 0.0);
        assert_eq!(vm.cells[1].value, 4.0);
    }

    // ========== Highlights ==========

    #[test]
    fn test_highlight_presence_sets_flags() {
        let mut t = table(&[("Mon", "0"), ("Tue", "1")]);
        t.measures.push(
            values_measure(vec![Some(5.0), Some(6.0)])
                .with_highlights(vec![Some(0.0), None]),
        );

        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        // a zero highlight still counts as highlighted
        assert!(vm.cells[0].highlighted);
        assert_eq!(vm.cells[0].highlight_value, 0.0);
        assert!(!vm.cells[1].highlighted);
        assert!(vm.is_highlighted);
    }

    #[test]
    fn test_no_highlights_no_flag() {
        let mut t = table(&[("Mon", "0")]);
        t.measures.push(values_measure(vec![Some(5.0)]));
        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert!(!vm.is_highlighted);
    }

    // ========== Selection persistence ==========

    #[test]
    fn test_selection_survives_rebuild() {
        let mut t = table(&[("Mon", "0"), ("Tue", "1")]);
        t.measures.push(values_measure(vec![Some(1.0), Some(2.0)]));

        let mut vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        vm.cells[1].selected = true;

        let rebuilt = ViewModelBuilder::build(&t, &vm, true).unwrap();
        assert!(!rebuilt.cells[0].selected);
        assert!(rebuilt.cells[1].selected);

        // round-trip law: rebuilding again changes nothing
        let again = ViewModelBuilder::build(&t, &rebuilt, true).unwrap();
        let flags: Vec<bool> = again.cells.iter().map(|c| c.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_no_active_selection_resets_flags() {
        let mut t = table(&[("Mon", "0")]);
        t.measures.push(values_measure(vec![Some(1.0)]));

        let mut vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        vm.cells[0].selected = true;

        let rebuilt = ViewModelBuilder::build(&t, &vm, false).unwrap();
        assert!(!rebuilt.cells[0].selected);
    }

    // ========== Error conditions ==========

    #[test]
    fn test_missing_category_column() {
        let t = DataTable::default();
        let err = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap_err();
        assert!(matches!(err, HourmapError::MissingData(_)));
    }

    #[test]
    fn test_misaligned_categories() {
        let days = CategoryColumn::new(
            "Day",
            vec!["Mon".into(), "Tue".into()],
            vec![Identity::new("a"), Identity::new("b")],
        );
        let hours = CategoryColumn::new("Hour", vec!["0".into()], Vec::new());
        let t = DataTable::new(vec![days, hours], Vec::new());

        let err = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap_err();
        assert!(matches!(err, HourmapError::MissingData(_)));
    }

    #[test]
    fn test_invalid_hour_aborts_build() {
        let t = table(&[("Mon", "0"), ("Mon", "midnight")]);
        let err = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap_err();
        match err {
            HourmapError::InvalidHourLabel { label, row } => {
                assert_eq!(label, "midnight");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_day_kept_with_sentinel() {
        let t = table(&[("someday", "3")]);
        let vm = ViewModelBuilder::build(&t, &ViewModel::default(), false).unwrap();
        assert_eq!(vm.cells[0].day_index, 10);
    }
}
