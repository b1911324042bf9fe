//! Panel ordering.

use polars::prelude::*;

/// Sort a panel by group and then by time.
///
/// Equal keys keep their input order. The result satisfies the ordering the
/// lag engine assumes: each group is one contiguous block with time ascending.
///
/// # Arguments
/// * `df` - Input LazyFrame
/// * `group_col` - Column identifying the panel unit
/// * `time_col` - Column holding the time index
pub fn sort_panel(df: LazyFrame, group_col: &str, time_col: &str) -> LazyFrame {
    df.sort([group_col, time_col], SortMultipleOptions::new().with_maintain_order(true))
}
