//! Column shifting.
//!
//! Two gather plans are provided. [`shift_column`] rotates the whole column
//! once and relies on the boundary mask to blank out the rows that picked up
//! a neighbouring group's values; it is exact only for equal-length groups on
//! a shared time grid. [`shift_column_by_group`] computes each row's source
//! from its position within its own group and never crosses a group edge.

use lagpanel_primitives::{ColumnRole, ComputePlacement, Direction, Steps, Table, UNDEFINED};
use ndarray::{Array1, ArrayView1, Zip};

use crate::{LagError, validate::check_column};

/// Circularly rotate a column so that row `i` receives row `i - steps`.
///
/// Indices wrap modulo the column length, so a lag of one moves the last
/// value to the front.
#[must_use]
pub fn rotate(
    values: ArrayView1<'_, f64>,
    steps: Steps,
    placement: ComputePlacement,
) -> Array1<f64> {
    let len = values.len();
    if len == 0 {
        return Array1::zeros(0);
    }

    let offset = steps.get().rem_euclid(len as i64) as usize;
    let source = |row: usize| values[(row + len - offset) % len];

    if placement.is_parallel() {
        let mut out = Array1::zeros(len);
        Zip::indexed(&mut out).par_for_each(|row, v| *v = source(row));
        out
    } else {
        Array1::from_shape_fn(len, source)
    }
}

/// Shift one column by whole-table rotation and install the result.
///
/// The source column is rotated by `steps`, every row flagged in
/// `boundary_mask` is set to [`UNDEFINED`], and the result either replaces
/// `target_col` or is appended as a new trailing column when `append` is set.
/// No other column is touched.
///
/// # Errors
/// Returns `LagError::ColumnOutOfRange` for a bad source or target index and
/// `LagError::LengthMismatch` if the mask does not cover the table.
pub fn shift_column(
    table: Table,
    source_col: usize,
    target_col: usize,
    steps: Steps,
    boundary_mask: ArrayView1<'_, bool>,
    append: bool,
    placement: ComputePlacement,
) -> Result<Table, LagError> {
    check_columns(&table, source_col, target_col, append)?;
    if boundary_mask.len() != table.height() {
        return Err(LagError::LengthMismatch {
            what: "boundary mask",
            expected: table.height(),
            actual: boundary_mask.len(),
        });
    }

    let mut shifted = rotate(table.view().column(source_col), steps, placement);
    Zip::from(&mut shifted).and(&boundary_mask).for_each(|v, &masked| {
        if masked {
            *v = UNDEFINED;
        }
    });

    install(table, target_col, shifted.view(), append)
}

/// Source row for every destination row under a per-group offset copy.
///
/// `boundaries` are group run starts plus an end sentinel, as returned by
/// [`group_boundaries`](crate::group_boundaries). Rows whose source would fall
/// outside their own group map to `None`.
#[must_use]
pub fn group_source_index(boundaries: &[usize], steps: Steps) -> Array1<Option<usize>> {
    let len = boundaries.last().copied().unwrap_or(0);
    let width = steps.width();
    let mut index = Array1::from_elem(len, None);

    for run in boundaries.windows(2) {
        let (start, end) = (run[0], run[1]);
        if width >= end - start {
            continue;
        }
        match steps.direction() {
            None => (start..end).for_each(|row| index[row] = Some(row)),
            Some(Direction::Lag) => {
                (start + width..end).for_each(|row| index[row] = Some(row - width));
            }
            Some(Direction::Lead) => {
                (start..end - width).for_each(|row| index[row] = Some(row + width));
            }
        }
    }
    index
}

/// Shift a column within each group, returning explicit optional values.
///
/// # Errors
/// Returns `LagError::LengthMismatch` if `boundaries` do not cover `source`.
pub fn shift_values_by_group(
    source: ArrayView1<'_, f64>,
    boundaries: &[usize],
    steps: Steps,
    placement: ComputePlacement,
) -> Result<Array1<Option<f64>>, LagError> {
    let covered = boundaries.last().copied().unwrap_or(0);
    if covered != source.len() {
        return Err(LagError::LengthMismatch {
            what: "group boundaries",
            expected: source.len(),
            actual: covered,
        });
    }

    let index = group_source_index(boundaries, steps);
    let gather = |from: &Option<usize>| from.map(|j| source[j]);

    Ok(if placement.is_parallel() {
        Zip::from(&index).par_map_collect(gather)
    } else {
        index.map(gather)
    })
}

/// Shift one column within each group and install the result.
///
/// Rows without a source inside their own group receive [`UNDEFINED`].
/// Groups may have different lengths.
///
/// # Errors
/// Returns `LagError::ColumnOutOfRange` for a bad source or target index and
/// `LagError::LengthMismatch` if `boundaries` do not cover the table.
pub fn shift_column_by_group(
    table: Table,
    source_col: usize,
    target_col: usize,
    boundaries: &[usize],
    steps: Steps,
    append: bool,
    placement: ComputePlacement,
) -> Result<Table, LagError> {
    check_columns(&table, source_col, target_col, append)?;

    let shifted =
        shift_values_by_group(table.view().column(source_col), boundaries, steps, placement)?
            .mapv(|v| v.unwrap_or(UNDEFINED));

    install(table, target_col, shifted.view(), append)
}

fn check_columns(
    table: &Table,
    source_col: usize,
    target_col: usize,
    append: bool,
) -> Result<(), LagError> {
    check_column(table.width(), source_col, ColumnRole::Source)?;
    if !append {
        check_column(table.width(), target_col, ColumnRole::Target)?;
    }
    Ok(())
}

fn install(
    table: Table,
    target_col: usize,
    values: ArrayView1<'_, f64>,
    append: bool,
) -> Result<Table, LagError> {
    let table = if append {
        table.with_column_appended(values)?
    } else {
        table.with_column_replaced(target_col, values)?
    };
    Ok(table)
}
