//! Up-front checks run before any table is modified.

use lagpanel_primitives::{ColumnRole, Steps};
use ndarray::{ArrayView1, s};

use crate::LagError;

pub(crate) fn check_column(
    width: usize,
    index: usize,
    role: ColumnRole,
) -> Result<usize, LagError> {
    if index < width { Ok(index) } else { Err(LagError::ColumnOutOfRange { role, index, width }) }
}

/// The shift may consume the whole grid (every row censored) but not exceed it.
pub(crate) fn check_steps(steps: Steps, distinct: usize, height: usize) -> Result<(), LagError> {
    if height > 0 && steps.width() > distinct {
        return Err(LagError::StepsExceedTimeGrid { steps, distinct });
    }
    Ok(())
}

/// Check that every group run has the same length.
///
/// # Errors
/// Returns `LagError::UnequalGroupLengths` naming the first group that differs
/// from the first group's length.
pub fn check_uniform_groups(boundaries: &[usize]) -> Result<(), LagError> {
    let mut runs = boundaries.windows(2).map(|w| (w[0], w[1] - w[0]));
    let Some((_, expected)) = runs.next() else {
        return Ok(());
    };

    match runs.find(|&(_, len)| len != expected) {
        Some((group_start, actual)) => {
            Err(LagError::UnequalGroupLengths { expected, actual, group_start })
        }
        None => Ok(()),
    }
}

/// Check that every group run walks the whole time grid, in order.
///
/// `distinct` is the sorted set of time values in the table. A group passes
/// only if its time values are exactly `distinct`, which rules out groups
/// that are offset from one another or have gaps or repeats.
///
/// # Errors
/// Returns `LagError::GroupOffTimeGrid` for the first group that does not.
pub fn check_full_time_grid(
    time: ArrayView1<'_, f64>,
    boundaries: &[usize],
    distinct: &[f64],
) -> Result<(), LagError> {
    for run in boundaries.windows(2) {
        let (start, end) = (run[0], run[1]);
        let spans = end - start == distinct.len()
            && time.slice(s![start..end]).iter().zip(distinct).all(|(t, d)| t == d);
        if !spans {
            return Err(LagError::GroupOffTimeGrid { group_start: start, distinct: distinct.len() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn column_bounds() {
        assert_eq!(check_column(4, 3, ColumnRole::Source).unwrap(), 3);
        assert!(matches!(
            check_column(4, 4, ColumnRole::Group),
            Err(LagError::ColumnOutOfRange { role: ColumnRole::Group, index: 4, width: 4 })
        ));
    }

    #[test]
    fn steps_against_grid() {
        assert!(check_steps(Steps::new(3), 3, 9).is_ok());
        assert!(check_steps(Steps::new(-4), 3, 9).is_err());
        // empty tables never fail
        assert!(check_steps(Steps::new(10), 0, 0).is_ok());
    }

    #[test]
    fn uniform_groups() {
        assert!(check_uniform_groups(&[0]).is_ok());
        assert!(check_uniform_groups(&[0, 3, 6, 9]).is_ok());

        let err = check_uniform_groups(&[0, 3, 6, 8]).unwrap_err();
        assert!(matches!(
            err,
            LagError::UnequalGroupLengths { expected: 3, actual: 2, group_start: 6 }
        ));
    }

    #[test]
    fn full_time_grid() {
        let distinct = [0.0, 1.0, 2.0];
        let time = array![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        assert!(check_full_time_grid(time.view(), &[0, 3, 6], &distinct).is_ok());

        // groups offset by one period: neither spans the four-value grid
        let time = array![0.0, 1.0, 2.0, 1.0, 2.0, 3.0];
        let err = check_full_time_grid(time.view(), &[0, 3, 6], &[0.0, 1.0, 2.0, 3.0]);
        assert!(matches!(err, Err(LagError::GroupOffTimeGrid { group_start: 0, distinct: 4 })));

        // repeated period inside a group
        let time = array![0.0, 0.0, 2.0, 0.0, 1.0, 2.0];
        let err = check_full_time_grid(time.view(), &[0, 3, 6], &distinct);
        assert!(matches!(err, Err(LagError::GroupOffTimeGrid { group_start: 0, .. })));

        let empty = ndarray::Array1::<f64>::zeros(0);
        assert!(check_full_time_grid(empty.view(), &[0], &[]).is_ok());
    }
}
