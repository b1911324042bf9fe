//! Censoring of rows without a defined shifted value.

use lagpanel_primitives::{ColumnRole, Steps, Table, is_undefined};

use crate::{LagError, validate::check_column};

/// Drop every row whose `target_col` value is undefined.
///
/// Surviving rows keep their relative order. With `keep_all` set the table is
/// returned unchanged, which is useful for inspecting what would be dropped.
/// The column index is checked in both modes.
/// Applying the filter twice gives the same result as applying it once.
///
/// # Errors
/// Returns `LagError::ColumnOutOfRange` if `target_col` does not exist.
pub fn filter_undefined(
    table: Table,
    target_col: usize,
    keep_all: bool,
) -> Result<Table, LagError> {
    check_column(table.width(), target_col, ColumnRole::Target)?;
    if keep_all {
        return Ok(table);
    }

    let keep: Vec<usize> = table
        .view()
        .column(target_col)
        .iter()
        .enumerate()
        .filter_map(|(row, v)| (!is_undefined(*v)).then_some(row))
        .collect();

    if keep.len() == table.height() {
        return Ok(table);
    }
    Ok(table.select_rows(&keep))
}

/// Number of rows censored by a shift of `steps` over `groups` groups.
///
/// Holds when every group has at least `|steps|` rows; shorter groups are
/// censored entirely and contribute their own length instead. Saturates at
/// `usize::MAX`.
#[must_use]
pub const fn expected_censored_rows(groups: usize, steps: Steps) -> usize {
    groups.saturating_mul(steps.width())
}
