//! Boundary mask construction.
//!
//! A boundary row is one with no valid source value for a given shift width:
//! for a lag of `k`, the first `k` periods of its group; for a lead of `k`,
//! the last `k`.

use lagpanel_primitives::{Direction, Steps};
use ndarray::{Array1, ArrayView1};

/// Sorted distinct values of a time column.
///
/// NaN entries are ignored.
#[must_use]
pub fn distinct_times(time: ArrayView1<'_, f64>) -> Vec<f64> {
    let mut values: Vec<f64> = time.iter().copied().filter(|t| !t.is_nan()).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Mark boundary rows by their global time value.
///
/// A row is marked iff its time index is among the `|steps|` smallest distinct
/// time values in the whole table (or the `|steps|` largest, for a lead).
/// Marking by value rather than by position within the group turns the
/// boundary test into one comparison per row, but is only correct when every
/// group spans the same time grid.
///
/// If `steps` is zero no row is marked. If `|steps|` is at least the number of
/// distinct time values every row is marked.
#[must_use]
pub fn build_boundary_mask(time: ArrayView1<'_, f64>, steps: Steps) -> Array1<bool> {
    let distinct = distinct_times(time);
    boundary_mask_from_grid(time, &distinct, steps)
}

/// Same as [`build_boundary_mask`] for a time grid that is already known.
pub(crate) fn boundary_mask_from_grid(
    time: ArrayView1<'_, f64>,
    distinct: &[f64],
    steps: Steps,
) -> Array1<bool> {
    let width = steps.width();
    let Some(direction) = steps.direction() else {
        return Array1::from_elem(time.len(), false);
    };

    if width >= distinct.len() {
        return Array1::from_elem(time.len(), true);
    }

    // The boundary set is a prefix (lag) or suffix (lead) of the sorted grid,
    // so membership reduces to a threshold test.
    match direction {
        Direction::Lag => {
            let cut = distinct[width - 1];
            time.mapv(|t| t <= cut)
        }
        Direction::Lead => {
            let cut = distinct[distinct.len() - width];
            time.mapv(|t| t >= cut)
        }
    }
}

/// Start index of each contiguous group run, plus a final end sentinel.
///
/// For group ids `[A, A, B, B, B, C]` this returns `[0, 2, 5, 6]`. An empty
/// column returns `[0]`.
#[must_use]
pub fn group_boundaries(group: ArrayView1<'_, f64>) -> Vec<usize> {
    let len = group.len();
    let mut boundaries = vec![0];

    for (i, pair) in group.windows(2).into_iter().enumerate() {
        if pair[0] != pair[1] {
            boundaries.push(i + 1);
        }
    }

    if len > 0 {
        boundaries.push(len);
    }
    boundaries
}

/// Number of groups described by `boundaries`.
#[must_use]
pub const fn group_count(boundaries: &[usize]) -> usize {
    boundaries.len().saturating_sub(1)
}

/// Position of every row within its group.
#[must_use]
pub fn group_ranks(boundaries: &[usize]) -> Array1<usize> {
    let len = boundaries.last().copied().unwrap_or(0);
    let mut ranks = Array1::zeros(len);
    for run in boundaries.windows(2) {
        for (rank, row) in (run[0]..run[1]).enumerate() {
            ranks[row] = rank;
        }
    }
    ranks
}

/// Mark boundary rows by their position within each group.
///
/// Rows with rank `< |steps|` are marked for a lag, rows within `|steps|` of
/// the end of their group for a lead. Unlike [`build_boundary_mask`] this does
/// not depend on groups sharing a time grid, only on each group being one
/// contiguous block.
#[must_use]
pub fn build_group_boundary_mask(group: ArrayView1<'_, f64>, steps: Steps) -> Array1<bool> {
    let boundaries = group_boundaries(group);
    group_mask_from_boundaries(&boundaries, steps)
}

pub(crate) fn group_mask_from_boundaries(boundaries: &[usize], steps: Steps) -> Array1<bool> {
    let len = boundaries.last().copied().unwrap_or(0);
    let width = steps.width();
    let mut mask = Array1::from_elem(len, false);

    let Some(direction) = steps.direction() else {
        return mask;
    };

    for run in boundaries.windows(2) {
        let (start, end) = (run[0], run[1]);
        let edge = width.min(end - start);
        let marked = match direction {
            Direction::Lag => start..start + edge,
            Direction::Lead => end - edge..end,
        };
        for row in marked {
            mask[row] = true;
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn distinct_times_sorted_unique() {
        let t = array![2.0, 0.0, 1.0, 2.0, 0.0, f64::NAN];
        assert_eq!(distinct_times(t.view()), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn lag_marks_earliest_times() {
        let time = array![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0];
        let mask = build_boundary_mask(time.view(), Steps::new(2));
        assert_eq!(mask.to_vec(), vec![true, true, false, false, true, true, false, false]);
    }

    #[test]
    fn lead_marks_latest_times() {
        let time = array![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        let mask = build_boundary_mask(time.view(), Steps::new(-1));
        assert_eq!(mask.to_vec(), vec![false, false, true, false, false, true]);
    }

    #[test]
    fn zero_steps_marks_nothing() {
        let time = array![0.0, 1.0, 2.0];
        let mask = build_boundary_mask(time.view(), Steps::new(0));
        assert!(mask.iter().all(|m| !m));
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(-7)]
    fn oversized_steps_marks_everything(#[case] steps: i64) {
        let time = array![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        let mask = build_boundary_mask(time.view(), Steps::new(steps));
        assert!(mask.iter().all(|m| *m));
    }

    #[test]
    fn empty_time_column() {
        let time: Array1<f64> = array![];
        assert!(build_boundary_mask(time.view(), Steps::new(1)).is_empty());
        assert_eq!(group_boundaries(time.view()), vec![0]);
        assert!(group_ranks(&[0]).is_empty());
    }

    #[test]
    fn boundaries_of_runs() {
        let group = array![7.0, 7.0, 3.0, 3.0, 3.0, 9.0];
        let b = group_boundaries(group.view());
        assert_eq!(b, vec![0, 2, 5, 6]);
        assert_eq!(group_count(&b), 3);
        assert_eq!(group_ranks(&b).to_vec(), vec![0, 1, 0, 1, 2, 0]);
    }

    #[test]
    fn group_mask_handles_unequal_lengths() {
        let group = array![1.0, 1.0, 1.0, 2.0, 3.0, 3.0];
        let lag = build_group_boundary_mask(group.view(), Steps::new(2));
        assert_eq!(lag.to_vec(), vec![true, true, false, true, true, true]);

        let lead = build_group_boundary_mask(group.view(), Steps::new(-1));
        assert_eq!(lead.to_vec(), vec![false, false, true, true, false, true]);
    }

    #[test]
    fn global_and_group_masks_agree_on_uniform_grid() {
        let time = array![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0];
        let group = array![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0];
        for steps in [-3, -1, 0, 1, 2, 3] {
            let steps = Steps::new(steps);
            assert_eq!(
                build_boundary_mask(time.view(), steps),
                build_group_boundary_mask(group.view(), steps)
            );
        }
    }
}
