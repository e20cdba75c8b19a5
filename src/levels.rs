//! Floor-level discovery: clusters cells into stories by elevation.

use crate::topo::Cell;

/// Formats a story label for a level index: `Floor00`, `Floor01`, ...
pub fn floor_label(index: usize) -> String {
    format!("Floor{:02}", index)
}

/// Assigns a story label to each cell.
///
/// The distinct rounded floor elevations of all cells, sorted ascending,
/// form the discovered levels. Each cell gets the label of the first level
/// within `min_difference` of its own elevation. The output is aligned with
/// the input: a cell with no level in range yields `None` (this cannot
/// happen for `min_difference >= 0`, since every cell's own elevation is
/// one of the levels).
///
/// Deterministic for a fixed input and tolerance, and free of hidden
/// state: calling it twice yields identical output.
pub fn floor_levels(cells: &[Cell], min_difference: f64) -> Vec<Option<String>> {
    let elevations: Vec<f64> = cells.iter().map(|c| c.floor_elevation()).collect();
    levels_from_elevations(&elevations, min_difference)
}

/// Label assignment on bare elevations; `floor_levels` is the cell-facing
/// wrapper. Elevations are expected to be pre-rounded (2 decimals).
pub fn levels_from_elevations(elevations: &[f64], min_difference: f64) -> Vec<Option<String>> {
    let mut levels: Vec<f64> = elevations.to_vec();
    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup();

    elevations
        .iter()
        .map(|elev| {
            levels
                .iter()
                .position(|level| (elev - level).abs() <= min_difference)
                .map(floor_label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(elevations: &[f64], tol: f64) -> Vec<String> {
        levels_from_elevations(elevations, tol)
            .into_iter()
            .map(|l| l.unwrap())
            .collect()
    }

    #[test]
    fn test_three_story_building() {
        let got = labels(&[0.0, 0.0, 3.0, 3.0, 6.0], 2.0);
        assert_eq!(got, ["Floor00", "Floor00", "Floor01", "Floor01", "Floor02"]);
    }

    #[test]
    fn test_single_story() {
        let got = labels(&[0.0, 0.0, 0.0], 2.0);
        assert_eq!(got, ["Floor00", "Floor00", "Floor00"]);
    }

    #[test]
    fn test_first_level_within_tolerance_wins() {
        // 1.5 is a level of its own, but level 0.0 is scanned first and is
        // within tolerance, so both cells land on Floor00.
        let got = labels(&[0.0, 1.5], 2.0);
        assert_eq!(got, ["Floor00", "Floor00"]);
    }

    #[test]
    fn test_labels_follow_sorted_levels_not_input_order() {
        let got = labels(&[6.0, 0.0, 3.0], 1.0);
        assert_eq!(got, ["Floor02", "Floor00", "Floor01"]);
    }

    #[test]
    fn test_negative_tolerance_yields_none() {
        let got = levels_from_elevations(&[0.0, 3.0], -1.0);
        assert_eq!(got, [None, None]);
    }

    #[test]
    fn test_idempotent() {
        let elevations = [0.0, 2.5, 5.0, 5.0];
        let first = levels_from_elevations(&elevations, 2.0);
        let second = levels_from_elevations(&elevations, 2.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_on_cells() -> anyhow::Result<()> {
        let cells = vec![
            Cell::from_box(2., 2., 3., None, None)?,
            Cell::from_box(2., 2., 3., Some((2., 0., 0.)), None)?,
            Cell::from_box(2., 2., 3., Some((0., 0., 3.)), None)?,
        ];
        let got = floor_levels(&cells, 2.0);
        assert_eq!(
            got,
            [
                Some("Floor00".to_string()),
                Some("Floor00".to_string()),
                Some("Floor01".to_string()),
            ]
        );
        Ok(())
    }
}
